//! awtheme - inspect, edit and publish site themes from the command line

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::AwConfig;

#[derive(Parser)]
#[command(name = "awtheme")]
#[command(about = "Theme resolution and CSS variable projection for aw sites")]
#[command(version)]
struct Cli {
    /// Path to awtheme.toml (defaults to ./awtheme.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Storage directory, overrides [storage] dir
    #[arg(long, global = true)]
    storage: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered themes
    List,

    /// Print a theme record as JSON
    Show {
        /// Theme key
        key: String,
    },

    /// Print a theme as a CSS rule of custom properties
    Css {
        /// Theme key
        key: String,

        /// Selector for the rule
        #[arg(short, long, default_value = ":root")]
        selector: String,

        /// Include design token scales
        #[arg(long)]
        tokens: bool,
    },

    /// Print the modifier classes a theme applies
    Classes {
        /// Theme key
        key: String,
    },

    /// Print editor control descriptors as JSON
    Controls {
        /// Theme key
        key: String,
    },

    /// Show the active theme
    Current,

    /// Switch the active theme
    Use {
        /// Theme key
        key: String,
    },

    /// Patch the active theme, e.g. `set accentPri=#ff0000 gridColumns=4`
    Set {
        /// `field=value` pairs
        #[arg(required = true)]
        assignments: Vec<String>,

        /// Also store the result as the custom theme
        #[arg(long)]
        custom: bool,
    },

    /// Send the active theme to the remote save endpoint
    Save {
        /// Site origin, overrides [remote] endpoint
        #[arg(long)]
        endpoint: Option<String>,
    },

    /// Write a default awtheme.toml
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn load_config(cli: &Cli) -> Result<AwConfig> {
    let mut config = match &cli.config {
        Some(path) => AwConfig::load_file(path)?,
        None => AwConfig::load_from_dir(&std::env::current_dir()?)?,
    };
    if let Some(dir) = &cli.storage {
        config.storage.dir = dir.clone();
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::List => commands::list(&config),
        Commands::Show { key } => commands::show(&config, &key),
        Commands::Css {
            key,
            selector,
            tokens,
        } => commands::css(&config, &key, &selector, tokens),
        Commands::Classes { key } => commands::classes(&config, &key),
        Commands::Controls { key } => commands::controls(&config, &key),
        Commands::Current => commands::current(&config),
        Commands::Use { key } => commands::use_theme(&config, &key),
        Commands::Set {
            assignments,
            custom,
        } => commands::set(&config, &assignments, custom),
        Commands::Save { endpoint } => commands::save(&config, endpoint).await,
        Commands::Init { force } => commands::init(&std::env::current_dir()?, force),
    }
}
