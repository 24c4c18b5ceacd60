//! OGame formulas - Development Tools

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use ogame_core::prelude::*;
use ogame_tools::evaluate::{self, FlightQuery};
use ogame_tools::validate::{self, Result};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ogame-tools")]
#[command(about = "Development tools for the OGame formula engine")]
struct Cli {
    /// Catalog file to use instead of the built-in one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Universe ruleset (RON)
    #[arg(long, global = true)]
    ruleset: Option<PathBuf>,

    /// Player traits (RON)
    #[arg(long, global = true)]
    traits: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate catalog files
    Validate {
        /// Catalog file or directory of catalogs
        path: PathBuf,
    },
    /// Print the catalog as RON
    Dump,
    /// Price and construction time of a level or a unit batch
    Price {
        /// Entity identifier
        id: u32,
        /// Level for buildings and technologies, quantity for units
        #[arg(default_value_t = 1)]
        amount: u32,
        /// Building and research levels, e.g. `14=10,15=2,31=8`
        #[arg(long, default_value = "")]
        levels: String,
        /// Build on a moon
        #[arg(long)]
        moon: bool,
    },
    /// Duration and fuel of a flight
    Flight {
        /// Start coordinate, e.g. `[P:1:100:8]`
        from: String,
        /// Target coordinate
        to: String,
        /// Ships sent, e.g. `--ship 202=10 --ship 203=2`
        #[arg(long = "ship", required = true)]
        ships: Vec<String>,
        /// Research levels, e.g. `115=10,117=8,118=6`
        #[arg(long, default_value = "")]
        research: String,
        /// Speed fraction in (0, 1]
        #[arg(long, default_value_t = 1.0)]
        speed: f64,
        /// Hours held at the target
        #[arg(long, default_value_t = 0)]
        holding: u32,
    },
}

fn load_or_default<T: serde::de::DeserializeOwned + Default>(path: Option<&Path>) -> Result<T> {
    path.map_or_else(|| Ok(T::default()), validate::load_ron)
}

fn print<T: Serialize + std::fmt::Debug>(value: &T, json: bool) {
    if json {
        match serde_json::to_string_pretty(value) {
            Ok(text) => println!("{text}"),
            Err(e) => tracing::error!("Failed to serialize result: {e}"),
        }
    } else {
        println!("{value:#?}");
    }
}

fn run(cli: Cli) -> Result<()> {
    let rules: Ruleset = load_or_default(cli.ruleset.as_deref())?;
    rules.validate()?;
    let traits: Traits = load_or_default(cli.traits.as_deref())?;

    match cli.command {
        Commands::Validate { path } => {
            tracing::info!("Validating catalogs in: {}", path.display());
            let files = validate::validate_data_path(&path)?;
            tracing::info!(files, "Validation passed");
            Ok(())
        }
        Commands::Dump => {
            let catalog = validate::load_catalog(cli.catalog.as_deref())?;
            println!("{}", catalog.to_ron()?);
            Ok(())
        }
        Commands::Price {
            id,
            amount,
            levels,
            moon,
        } => {
            let catalog = validate::load_catalog(cli.catalog.as_deref())?;
            let celestial = if moon {
                CelestialType::Moon
            } else {
                CelestialType::Planet
            };
            let state = evaluate::parse_levels(&levels)?
                .iter()
                .fold(StateSnapshot::new(celestial), |state, (id, level)| {
                    state.with_level(id, level)
                });
            let id = EntityId::new(id);
            let report = evaluate::price_report(&catalog, id, amount, &rules, &state, &traits)?;
            print(&report, cli.json);
            Ok(())
        }
        Commands::Flight {
            from,
            to,
            ships,
            research,
            speed,
            holding,
        } => {
            let catalog = validate::load_catalog(cli.catalog.as_deref())?;
            let fleet = ships
                .iter()
                .map(|ship| evaluate::parse_ship(ship))
                .collect::<Result<Fleet>>()?;
            let query = FlightQuery {
                from: from.parse()?,
                to: to.parse()?,
                fleet,
                speed,
                holding_hours: holding,
            };
            let researches = evaluate::parse_levels(&research)?;
            let report = evaluate::flight_report(&catalog, &query, &researches, &rules, &traits)?;
            print(&report, cli.json);
            Ok(())
        }
    }
}

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
