mod commands;
pub mod error;
mod utils;


use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ToolkitConfig;
use commands::list::ListArgs;

pub use error::{CliError, CliResult};

#[derive(Parser)]
#[command(name = "hfx")]
#[command(author, version, about = "List state toolkit CLI", long_about = None)]
pub struct Cli {
    /// Config file (default: HFX_CONFIG env or built-in defaults)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search, sort and paginate a JSON array the way a list page does
    List(ListArgs),
    /// Show how a <column>_<direction> sort token is parsed
    SortToken {
        /// Token such as created_at_desc
        token: String,
    },
}

/// Initialize tracing subscriber with env filter, logging to stderr
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hireflux=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

pub fn run() -> miette::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::List(args)) => {
            let config = ToolkitConfig::load(cli.config.as_deref()).map_err(CliError::from)?;
            println!("{}", commands::list::list_items(&args, &config)?);
        }
        Some(Commands::SortToken { token }) => {
            println!("{}", commands::sort_token::describe_sort_token(&token)?);
        }
        None => {
            // Show help when no command provided
            let _ = Cli::parse_from(["hfx", "--help"]);
        }
    }
    Ok(())
}
