use anyhow::Result;
use business_hours_diff::commands;
use business_hours_diff::commands::diff::HoursArgs;
use business_hours_diff::config;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bhdiff")]
#[command(about = "Elapsed time between two instants, counting business hours only")]
#[command(version)]
struct Cli {
    #[arg(
        long,
        global = true,
        help = "Config file (defaults to ~/.business-hours-diff/config.toml)"
    )]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Business time between two instants
    Diff {
        #[arg(help = "Start instant (e.g. 2026-01-08T14:00:00)")]
        start: String,
        #[arg(help = "End instant")]
        end: String,
        #[command(flatten)]
        hours: HoursArgs,
    },
    /// Per-day breakdown of the business time between two instants
    Days {
        #[arg(help = "Start instant (e.g. 2026-01-08T14:00:00)")]
        start: String,
        #[arg(help = "End instant")]
        end: String,
        #[command(flatten)]
        hours: HoursArgs,
    },
    /// Show or edit configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    List,
    Get { key: String },
    Set { key: String, value: String },
    /// Print the config file location
    Path,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Diff { start, end, hours } => {
            let config = config::load(cli.config.as_deref())?;
            commands::diff::diff(&config, start, end, hours)?;
        }
        Commands::Days { start, end, hours } => {
            let config = config::load(cli.config.as_deref())?;
            commands::diff::days(&config, start, end, hours)?;
        }
        Commands::Config { action } => {
            let path = match &cli.config {
                Some(path) => path.clone(),
                None => config::default_path()?,
            };
            match action {
                ConfigAction::List => {
                    commands::config::list(&config::load(cli.config.as_deref())?)?
                }
                ConfigAction::Get { key } => {
                    commands::config::get(key, &config::load(cli.config.as_deref())?)?
                }
                ConfigAction::Set { key, value } => commands::config::set(&path, key, value)?,
                ConfigAction::Path => println!("{}", path.display()),
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("BHDIFF_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
