use anyhow::Result;
use brentwatch::core::log::init_logging;
use chrono::NaiveDate;
use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Display the dashboard from the analysis backend
    Show {
        /// Inspection date for the nearby-event panel (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },
    /// Display the dashboard from the bundled sample data
    Demo {
        /// Inspection date for the nearby-event panel (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },
}

impl From<Commands> for brentwatch::AppCommand {
    fn from(cmd: Commands) -> brentwatch::AppCommand {
        match cmd {
            Commands::Show { date } => brentwatch::AppCommand::Show { date },
            Commands::Demo { date } => brentwatch::AppCommand::Demo { date },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => brentwatch::cli::setup::setup(),
        Some(cmd) => brentwatch::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
