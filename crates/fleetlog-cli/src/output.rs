//! Text and JSON rendering of command results.
//!
//! Text renderers return strings so they can be tested without capturing
//! stdout; [`emit`] picks the format and prints.

use std::fmt::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use fleetlog_lib::detection::truncate;
use fleetlog_lib::equipment::EquipmentMaster;
use fleetlog_lib::{AirCorpsReport, AirDefenseReport, DetectionReport, NightReconReport, SortieReport};

use crate::context::OutputFormat;

/// Print `value` as pretty JSON or as the text produced by `text`.
pub fn emit<T, F>(format: OutputFormat, value: &T, text: F) -> Result<()>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(value).context("failed to encode JSON output")?;
            println!("{json}");
        }
        OutputFormat::Text => print!("{}", text(value)),
    }
    Ok(())
}

/// Table of air corps with their rendered air power.
pub fn air_corps_table(reports: &[AirCorpsReport]) -> String {
    let mut out = String::new();
    if reports.is_empty() {
        out.push_str("No air corps in snapshot.\n");
        return out;
    }

    let _ = writeln!(out, "Air corps ({}):", reports.len());
    let _ = writeln!(
        out,
        "{:>4} {:>5}  {:<20} {:<12} {:>6}  {}",
        "Area", "Corps", "Name", "Mode", "Radius", "Air Power"
    );
    for report in reports {
        let _ = writeln!(
            out,
            "{:>4} {:>5}  {:<20} {:<12} {:>6}  {}",
            report.area_id,
            report.id,
            report.name,
            report.action_mode,
            report.distance,
            report.rendered
        );
    }
    out
}

pub fn air_defense_text(report: &AirDefenseReport) -> String {
    let corps = if report.corps.is_empty() {
        "none".to_string()
    } else {
        report
            .corps
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!(
        "Area {} air defense: {}\n  defending corps: {}\n  rocket fighters: {} (x{:.1})\n",
        report.area_id, report.rendered, corps, report.rocket_fighters, report.multiplier
    )
}

/// One line per detection result, e.g. `Fleet 1 (First Fleet): 26.829 (1.0)`.
pub fn detection_text(label: &str, report: &DetectionReport) -> String {
    format!("{label}: {}\n", report.rendered)
}

pub fn sortie_text(label: &str, report: &SortieReport) -> String {
    let mut out = format!("{label}:\n");
    for entry in &report.values {
        let _ = writeln!(
            out,
            "  coefficient {:.0}: {:.3}",
            entry.coefficient,
            truncate(entry.value, 1000.0)
        );
    }
    if report.los_failed {
        out.push_str("  warning: unclassified equipment present; reload the game screen\n");
    }
    out
}

pub fn night_recon_text(label: &str, report: &NightReconReport) -> String {
    format!("{label}: {}\n", report.rendered)
}

/// Table of equipment master rows.
pub fn equipment_table(items: &[&EquipmentMaster]) -> String {
    let mut out = String::new();
    if items.is_empty() {
        out.push_str("No equipment in catalog.\n");
        return out;
    }

    let _ = writeln!(out, "Equipment ({}):", items.len());
    let _ = writeln!(
        out,
        "{:>5}  {:<36} {:<18} {:>3} {:>3} {:>3} {:>3}",
        "Id", "Name", "Category", "AA", "EV", "FP", "LoS"
    );
    for item in items {
        let _ = writeln!(
            out,
            "{:>5}  {:<36} {:<18} {:>3} {:>3} {:>3} {:>3}",
            item.id,
            item.name,
            item.category.to_string(),
            item.params.attack,
            item.params.evasion,
            item.params.firepower,
            item.params.search
        );
    }
    out
}
