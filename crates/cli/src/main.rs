//! Floor-plan prompt generator.
//!
//! ```bash
//! floorplan rotate "South wall" --road East
//! floorplan table --road North
//! floorplan generate --plan plot.toml --json
//! floorplan wizard --save plot.toml
//! ```

use std::io;

use anyhow::Result;
use clap::Parser;
use floorplan_cli::commands::{Generate, InitPlan, Options, Rotate, Summary, Table, Wizard};
use floorplan_cli::{CliConfig, CommandContext, logging};

/// Generate architectural floor-plan prompts with the road side at the bottom
#[derive(Parser)]
#[command(name = "floorplan")]
#[command(about = "Floor-plan prompt generator", long_about = None)]
#[command(version)]
struct Cli {
    /// Mirror log output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Rotate one placement so the road side becomes South
    Rotate(Rotate),

    /// Show where each compass direction lands for a road side
    Table(Table),

    /// Print the plan summary
    Summary(Summary),

    /// Generate the floor-plan prompt
    Generate(Generate),

    /// List placement choices from the catalog
    Options(Options),

    /// Write a starter plan file
    InitPlan(InitPlan),

    /// Fill in a plan interactively
    Wizard(Wizard),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for FLOORPLAN_* variables)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut config = CliConfig::from_env();
    config.logging.verbose = cli.verbose;
    let _log_guard = logging::setup_logging(&config.logging)?;

    tracing::debug!(?config, "configuration loaded");
    let ctx = CommandContext::new(config);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        Command::Rotate(cmd) => cmd.execute(&ctx, &mut out),
        Command::Table(cmd) => cmd.execute(&ctx, &mut out),
        Command::Summary(cmd) => cmd.execute(&ctx, &mut out),
        Command::Generate(cmd) => cmd.execute(&ctx, &mut out),
        Command::Options(cmd) => cmd.execute(&ctx, &mut out),
        Command::InitPlan(cmd) => cmd.execute(&ctx, &mut out),
        Command::Wizard(cmd) => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            cmd.execute(&ctx, &mut input, &mut out)
        }
    };

    if let Err(err) = &result {
        tracing::error!("command failed: {err:#}");
    }
    result
}
