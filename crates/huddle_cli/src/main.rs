//! Morning huddle operator CLI.
//!
//! # Responsibility
//! - Fetch one profile batch from the insights endpoint or a local file.
//! - Print the board, summary counts or one guest detail as text or JSON.

mod render;

use clap::{Args, Parser, Subcommand};
use huddle_core::{
    calculate_kitchen_stats, calculate_stats, core_version, default_log_level,
    fetch_reservations, guest_detail, init_logging, init_stderr_logging, ping, CommitOutcome,
    DashboardState, FileProfileSource, FilterType, HttpProfileSource, HuddleConfig,
    ProfileSource, Reservation, ViewMode,
};
use serde_json::json;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "huddle")]
#[command(about = "Morning huddle reservation board")]
struct Cli {
    /// Print machine-readable JSON instead of text.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
    /// Log level (`trace|debug|info|warn|error`); logs go to stderr unless
    /// `--log-dir` is given.
    #[arg(long, global = true)]
    log_level: Option<String>,
    /// Absolute directory for rotating log files.
    #[arg(long, global = true)]
    log_dir: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct SourceArgs {
    /// Insights endpoint; overrides `HUDDLE_ENDPOINT`.
    #[arg(long, conflicts_with = "file")]
    endpoint: Option<String>,
    /// Read the insights envelope from a local JSON file instead.
    #[arg(long)]
    file: Option<PathBuf>,
    /// Request timeout in seconds; overrides `HUDDLE_TIMEOUT_SECS`.
    #[arg(long)]
    timeout_secs: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check core linkage.
    Ping,
    /// Print the reservation board.
    Board {
        #[command(flatten)]
        source: SourceArgs,
        /// `front-of-house|back-of-house` (or `front|back`).
        #[arg(long, default_value = "front-of-house")]
        view: String,
        /// `all|vip|dietary|celebrations`; unknown values show everything.
        #[arg(long, default_value = "all")]
        filter: String,
    },
    /// Print summary counts.
    Stats {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Print detail for one guest by board id.
    Guest {
        #[command(flatten)]
        source: SourceArgs,
        id: u32,
        #[arg(long, default_value = "front-of-house")]
        view: String,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    match (cli.log_dir.as_deref(), cli.log_level.as_deref()) {
        (Some(dir), level) => init_logging(level.unwrap_or(default_log_level()), dir)?,
        (None, Some(level)) => init_stderr_logging(level)?,
        (None, None) => {}
    }

    match cli.command {
        Commands::Ping => {
            if cli.json {
                print_json(&json!({ "ping": ping(), "version": core_version() }))
            } else {
                println!("huddle_core ping={}", ping());
                println!("huddle_core version={}", core_version());
                Ok(())
            }
        }
        Commands::Board {
            source,
            view,
            filter,
        } => {
            let view_mode = ViewMode::parse(&view).map_err(|err| err.to_string())?;
            let filter = FilterType::parse_lenient(&filter);
            let mut state = DashboardState::new(view_mode);
            let source = open_source(&source)?;
            let ticket = state.begin_refresh();
            if let CommitOutcome::Failed { message } =
                state.complete_refresh(ticket, fetch_reservations(source.as_ref()))
            {
                return Err(message);
            }
            if filter != FilterType::All {
                state.toggle_filter(filter);
            }

            if cli.json {
                print_json(&state.snapshot())
            } else {
                print!(
                    "{}",
                    render::board(
                        &state.filtered(),
                        state.reservations().len(),
                        view_mode,
                        filter
                    )
                );
                Ok(())
            }
        }
        Commands::Stats { source } => {
            let reservations = load(&source)?;
            let stats = calculate_stats(&reservations);
            let kitchen = calculate_kitchen_stats(&reservations);
            if cli.json {
                print_json(&json!({ "stats": stats, "kitchenStats": kitchen }))
            } else {
                print!("{}", render::stats(&stats, &kitchen));
                Ok(())
            }
        }
        Commands::Guest { source, id, view } => {
            let view_mode = ViewMode::parse(&view).map_err(|err| err.to_string())?;
            let reservations = load(&source)?;
            let reservation = reservations
                .iter()
                .find(|r| r.id == id)
                .ok_or_else(|| format!("no reservation with id {id}"))?;
            let detail = guest_detail(reservation, view_mode);
            if cli.json {
                print_json(&detail)
            } else {
                print!("{}", render::detail(&detail));
                Ok(())
            }
        }
    }
}

fn open_source(args: &SourceArgs) -> Result<Box<dyn ProfileSource>, String> {
    let source: Box<dyn ProfileSource> = match &args.file {
        Some(path) => Box::new(FileProfileSource::new(path)),
        None => {
            let config = resolve_config(args)?;
            Box::new(HttpProfileSource::from_config(&config).map_err(|err| err.to_string())?)
        }
    };
    log::debug!("event=cli_source module=cli source={}", source.describe());
    Ok(source)
}

fn load(args: &SourceArgs) -> Result<Vec<Reservation>, String> {
    let source = open_source(args)?;
    fetch_reservations(source.as_ref()).map_err(|err| err.to_string())
}

fn resolve_config(args: &SourceArgs) -> Result<HuddleConfig, String> {
    let mut config = HuddleConfig::from_env().map_err(|err| err.to_string())?;
    if let Some(endpoint) = &args.endpoint {
        config = config.with_endpoint(endpoint.as_str());
    }
    if let Some(secs) = args.timeout_secs {
        config = config.with_timeout_secs(secs);
    }
    config.validate().map_err(|err| err.to_string())?;
    Ok(config)
}

fn print_json(value: &impl serde::Serialize) -> Result<(), String> {
    let text = serde_json::to_string_pretty(value).map_err(|err| err.to_string())?;
    println!("{text}");
    Ok(())
}
