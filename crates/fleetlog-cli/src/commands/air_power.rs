//! Air corps and high-altitude interception commands.

use anyhow::{Context, Result};

use fleetlog_lib::airbase::AreaId;
use fleetlog_lib::{AirCorps, AirCorpsReport, AirDefenseReport};

use crate::context::{RunContext, SnapshotArgs};
use crate::output::{air_corps_table, air_defense_text, emit};

/// Handle the `air-power` subcommand: one line per air corps, optionally
/// limited to one area.
pub fn handle_air_power(ctx: &RunContext, args: &SnapshotArgs, area: Option<AreaId>) -> Result<()> {
    let (snapshot, inventory) = args.load()?;
    let corps: Vec<&AirCorps> = match area {
        Some(area) => snapshot
            .area(area)
            .with_context(|| format!("cannot evaluate area {area}"))?,
        None => snapshot.airbase.corps().collect(),
    };

    let reports: Vec<AirCorpsReport> = corps
        .iter()
        .map(|c| AirCorpsReport::from_corps(&inventory, c, &ctx.settings))
        .collect();
    emit(ctx.format, reports.as_slice(), air_corps_table)
}

/// Handle the `air-defense` subcommand for one area.
pub fn handle_air_defense(ctx: &RunContext, args: &SnapshotArgs, area: AreaId) -> Result<()> {
    let (snapshot, inventory) = args.load()?;
    let corps = snapshot
        .area(area)
        .with_context(|| format!("cannot evaluate air defense of area {area}"))?;
    let report = AirDefenseReport::from_area(&inventory, area, &corps, &ctx.settings);
    emit(ctx.format, &report, air_defense_text)
}
