use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use fleetlog_cli::commands::{air_power, detection, equipment};
use fleetlog_cli::context::{GlobalOptions, RunContext, SnapshotArgs};

#[derive(Parser, Debug)]
#[command(author, version, about = "Fleet logbook combat value calculator")]
struct Cli {
    #[command(flatten)]
    global: GlobalOptions,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Air power of every land-based air corps.
    AirPower {
        #[command(flatten)]
        snapshot: SnapshotArgs,
        /// Only list air corps of this area.
        #[arg(long)]
        area: Option<u32>,
    },
    /// Combined high-altitude interception value of one area.
    AirDefense {
        #[command(flatten)]
        snapshot: SnapshotArgs,
        /// Map area to evaluate.
        #[arg(long)]
        area: u32,
    },
    /// Detection score of a fleet or one of its ships.
    Detection {
        #[command(flatten)]
        snapshot: SnapshotArgs,
        /// Fleet number, starting at 1.
        #[arg(long)]
        fleet: usize,
        /// Ship position within the fleet, starting at 1.
        #[arg(long)]
        ship: Option<usize>,
    },
    /// Detection totals of a sortie for coefficients 1 to 5.
    Sortie {
        #[command(flatten)]
        snapshot: SnapshotArgs,
        /// Main fleet number, starting at 1.
        #[arg(long)]
        fleet: usize,
        /// Escort fleet number for a combined fleet.
        #[arg(long)]
        escort: Option<usize>,
    },
    /// Night reconnaissance estimate of a fleet.
    NightRecon {
        #[command(flatten)]
        snapshot: SnapshotArgs,
        /// Fleet number, starting at 1.
        #[arg(long)]
        fleet: usize,
    },
    /// List the equipment master catalog.
    Equipment {
        /// Equipment master catalog (CSV).
        #[arg(long)]
        catalog: PathBuf,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let ctx = RunContext {
        settings: cli.global.settings()?,
        format: cli.global.format,
    };

    match &cli.command {
        Command::AirPower { snapshot, area } => air_power::handle_air_power(&ctx, snapshot, *area),
        Command::AirDefense { snapshot, area } => {
            air_power::handle_air_defense(&ctx, snapshot, *area)
        }
        Command::Detection {
            snapshot,
            fleet,
            ship,
        } => detection::handle_detection(&ctx, snapshot, *fleet, *ship),
        Command::Sortie {
            snapshot,
            fleet,
            escort,
        } => detection::handle_sortie(&ctx, snapshot, *fleet, *escort),
        Command::NightRecon { snapshot, fleet } => {
            detection::handle_night_recon(&ctx, snapshot, *fleet)
        }
        Command::Equipment { catalog } => equipment::handle_list_equipment(&ctx, catalog),
    }
}

/// Log to stderr so stdout carries only command output.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
