//! Detection, sortie and night reconnaissance commands.

use anyhow::{Context, Result};

use fleetlog_lib::detection::{sortie_detection, Detection, NightRecon};
use fleetlog_lib::{DetectionReport, Fleet, NightReconReport, SortieReport};

use crate::context::{RunContext, SnapshotArgs};
use crate::output::{detection_text, emit, night_recon_text, sortie_text};

fn fleet_label(number: usize, fleet: &Fleet) -> String {
    match &fleet.name {
        Some(name) => format!("Fleet {number} ({name})"),
        None => format!("Fleet {number}"),
    }
}

/// Handle the `detection` subcommand: a whole fleet, or one ship of it.
pub fn handle_detection(
    ctx: &RunContext,
    args: &SnapshotArgs,
    fleet_number: usize,
    ship_position: Option<usize>,
) -> Result<()> {
    let (snapshot, inventory) = args.load()?;
    let fleet = snapshot.fleet(fleet_number).context("cannot evaluate detection")?;

    let (label, detection) = match ship_position {
        Some(position) => {
            let ship = snapshot
                .ship(fleet_number, position)
                .context("cannot evaluate detection")?;
            (ship.display_name(), Detection::for_ship(&inventory, ship))
        }
        None => (
            fleet_label(fleet_number, fleet),
            Detection::for_fleet(&inventory, &fleet.ships, snapshot.hq_level),
        ),
    };

    let report = DetectionReport::from_detection(&detection, &ctx.settings);
    emit(ctx.format, &report, |r| detection_text(&label, r))
}

/// Handle the `sortie` subcommand: main fleet plus optional escort fleet.
pub fn handle_sortie(
    ctx: &RunContext,
    args: &SnapshotArgs,
    fleet_number: usize,
    escort_number: Option<usize>,
) -> Result<()> {
    let (snapshot, inventory) = args.load()?;
    let main = snapshot.fleet(fleet_number).context("cannot evaluate sortie")?;
    let escort = escort_number
        .map(|n| snapshot.fleet(n))
        .transpose()
        .context("cannot evaluate sortie escort")?;

    let sortie = sortie_detection(&inventory, main, escort, snapshot.hq_level);
    let report = SortieReport::from_sortie(&sortie, &ctx.settings);
    let label = match escort_number {
        Some(escort) => format!("Sortie detection (fleet {fleet_number} + escort fleet {escort})"),
        None => format!("Sortie detection (fleet {fleet_number})"),
    };
    emit(ctx.format, &report, |r| sortie_text(&label, r))
}

/// Handle the `night-recon` subcommand.
pub fn handle_night_recon(ctx: &RunContext, args: &SnapshotArgs, fleet_number: usize) -> Result<()> {
    let (snapshot, inventory) = args.load()?;
    let fleet = snapshot
        .fleet(fleet_number)
        .context("cannot evaluate night reconnaissance")?;

    let recon = NightRecon::for_ships(&inventory, &fleet.ships);
    let report = NightReconReport::from(&recon);
    let label = format!("Night recon of {}", fleet_label(fleet_number, fleet));
    emit(ctx.format, &report, |r| night_recon_text(&label, r))
}
