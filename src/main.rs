//! Command-line entry point for the shift roster.

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};

use shift_roster::adapters::console::print_report;
use shift_roster::adapters::csv_export::save_roster;
use shift_roster::adapters::csv_import::load_employees;
use shift_roster::adapters::interactive::{Prompter, run_session};
use shift_roster::api::{AppState, create_router};
use shift_roster::config::ConfigLoader;
use shift_roster::error::EngineResult;
use shift_roster::logging::init_cli_logger;
use shift_roster::scheduling::Scheduler;

#[derive(Parser, Debug)]
#[command(name = "shift-roster")]
#[command(about = "Build a weekly shift roster from employee preferences")]
#[command(version)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the backfill pass (overrides the configuration)
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Menu-driven session on the terminal (default)
    Interactive,
    /// Schedule a roster CSV without prompting
    Schedule {
        /// Roster CSV to import
        #[arg(short, long)]
        input: PathBuf,
        /// Where to write the exported roster
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Serve the scheduling API over HTTP
    Serve {
        /// Listen address (overrides the configuration)
        #[arg(long)]
        addr: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    if let Err(err) = run(cli).await {
        error!(error = %err, "shift-roster failed");
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> EngineResult<()> {
    let config = match &cli.config {
        Some(path) => ConfigLoader::load(path)?,
        None => ConfigLoader::default(),
    };

    let seed = cli
        .seed
        .or(config.seed())
        .unwrap_or_else(rand::random::<u64>);

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            info!(seed, "Starting interactive session");
            let stdin = io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), io::stdout());
            run_session(&mut prompter, &config, seed)?;
        }
        Commands::Schedule { input, output } => {
            info!(seed, input = %input.display(), "Scheduling roster");
            let employees = load_employees(&input)?;
            let mut scheduler = Scheduler::with_policy(employees, config.policy());
            let report = scheduler.generate_seeded(seed)?;
            print_report(&report);

            if let Some(output) = output {
                save_roster(&output, scheduler.employees(), config.export_mode())?;
                println!("Schedule saved to {}", output.display());
            }
        }
        Commands::Serve { addr } => {
            let addr = addr.unwrap_or_else(|| config.server_addr().to_string());
            let listener = TcpListener::bind(&addr).await?;
            info!(addr = %addr, "Listening");
            axum::serve(listener, create_router(AppState::new(config))).await?;
        }
    }

    Ok(())
}
