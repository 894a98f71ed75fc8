//! Leadflow CLI - Track sales leads through the pipeline

use clap::Parser;
use leadflow::cli::{commands, Cli, Commands, Workspace};
use leadflow::errors::to_exit_code;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error [{}]: {}", e.code(), e);
            std::process::exit(to_exit_code(&e));
        }
    }
}

fn run(cli: Cli) -> leadflow::Result<()> {
    let command = match cli.command {
        Some(command) => command,
        None => {
            // Default to showing help - clap handles this
            println!("Use --help for usage information");
            return Ok(());
        }
    };

    let ws = Workspace::open(cli.cwd.as_deref(), cli.board.as_deref())?;
    match command {
        Commands::Stages => commands::stages::run(),
        Commands::Board => commands::board::run(&ws),
        Commands::List(args) => commands::list::run(&ws, &args),
        Commands::Show { id, json } => commands::show::run(&ws, &id, json),
        Commands::Add(args) => commands::add::run(&ws, args),
        Commands::Move {
            id,
            stage,
            note,
            attendant,
        } => commands::move_lead::run(&ws, &id, stage, note, attendant),
        Commands::Delete { id } => commands::delete::run(&ws, &id),
        Commands::Refs { json } => commands::refs::run(&ws, json),
    }
}
