//! totem - build overlay totems from the command line
//!
//! Usage:
//!   totem encode 740:25,725,pin,736 --direction l --name "my totem"
//!   totem decode --effects 5AIAAA --pin 1
//!   totem generate --query "direction=r&name=x&pin=1&effects=5AIAAA"
//!   totem groups --filter Guardian --search might

mod commands;
mod items;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use totem_core::share::ShareState;
use totem_core::{Catalog, ForgeConfig, TemplateSet};
use totem_types::Direction;
use tracing_subscriber::filter::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Build overlay totems from effect lists")]
struct Cli {
    /// Catalog directory (effects.json, professions.json, specializations.json)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Template asset directory containing templates.json
    #[arg(long, global = true)]
    templates: Option<PathBuf>,

    /// Log more detail (-v debug, -vv trace); RUST_LOG still takes precedence
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a list into share link parameters
    Encode {
        /// Comma separated `pin` or `id[:stacks[:target]]` entries
        items: String,
        #[arg(short, long)]
        direction: Option<String>,
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Decode a share token into a list
    Decode {
        #[arg(short, long)]
        effects: String,
        #[arg(short, long, default_value_t = 0)]
        pin: usize,
    },
    /// Generate the overlay pack JSON
    Generate {
        /// Full share query string; other flags override its values
        #[arg(short, long)]
        query: Option<String>,
        #[arg(short, long)]
        effects: Option<String>,
        #[arg(short, long)]
        pin: Option<usize>,
        #[arg(short, long)]
        direction: Option<String>,
        #[arg(short, long)]
        name: Option<String>,
    },
    /// List library groups
    Groups {
        #[arg(short, long, default_value = "")]
        filter: String,
        #[arg(short, long, default_value = "")]
        search: String,
    },
}

/// Default log level for a `-v` count
fn verbosity_level(verbose: u8) -> tracing::Level {
    match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    }
}

/// Initialize logging, writing to TOTEM_LOG_PATH if set, otherwise stderr.
fn init_logging(verbose: u8) {
    let filter = EnvFilter::builder()
        .with_default_directive(verbosity_level(verbose).into())
        .from_env_lossy();

    if let Ok(path) = std::env::var("TOTEM_LOG_PATH") {
        if let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
        {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_ansi(false)
                .with_writer(file)
                .init();
            return;
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), String> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = ForgeConfig::load();

    let catalog_dir = cli
        .catalog
        .or_else(|| config.catalog_dir())
        .ok_or("error: no catalog directory configured")?;
    let catalog = Catalog::load(&catalog_dir).map_err(|e| e.to_string())?;

    let templates = match &cli.templates {
        Some(dir) => TemplateSet::load(dir),
        None => config.templates(),
    }
    .map_err(|e| e.to_string())?;

    match cli.command {
        Commands::Encode { items, direction, name } => {
            let list = items::parse_items(&items)?;
            let direction =
                parse_direction(direction.as_deref())?.unwrap_or(config.default_direction);
            let name = name.unwrap_or_else(|| config.default_name.clone());
            commands::encode(&list, direction, &name, &catalog)
        }
        Commands::Decode { effects, pin } => {
            let state = ShareState {
                effects,
                pin,
                ..ShareState::default()
            };
            commands::decode(&state, &catalog)
        }
        Commands::Generate { query, effects, pin, direction, name } => {
            let mut state = match query {
                Some(query) => ShareState::from_query(&query),
                None => ShareState {
                    direction: config.default_direction,
                    name: config.default_name.clone(),
                    ..ShareState::default()
                },
            };
            if let Some(effects) = effects {
                state.effects = effects;
            }
            if let Some(pin) = pin {
                state.pin = pin;
            }
            if let Some(direction) = parse_direction(direction.as_deref())? {
                state.direction = direction;
            }
            if let Some(name) = name {
                state.name = name;
            }
            commands::generate(&state, &catalog, &templates)
        }
        Commands::Groups { filter, search } => commands::groups(&catalog, &filter, &search),
    }
}

fn parse_direction(code: Option<&str>) -> Result<Option<Direction>, String> {
    match code {
        None => Ok(None),
        Some(code) => Direction::from_code(code)
            .map(Some)
            .ok_or_else(|| format!("error: direction must be one of r, d, l, u (got '{code}')")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_flag_raises_default_level() {
        let cli = Cli::parse_from(["totem", "-vv", "groups"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(verbosity_level(cli.verbose), tracing::Level::TRACE);

        let cli = Cli::parse_from(["totem", "groups", "--verbose"]);
        assert_eq!(verbosity_level(cli.verbose), tracing::Level::DEBUG);

        let cli = Cli::parse_from(["totem", "decode", "-e", "5AIAAA"]);
        assert_eq!(verbosity_level(cli.verbose), tracing::Level::INFO);
    }

    #[test]
    fn test_parse_direction() {
        assert_eq!(parse_direction(None), Ok(None));
        assert_eq!(parse_direction(Some("u")), Ok(Some(Direction::Up)));
        assert!(parse_direction(Some("x")).is_err());
    }
}
