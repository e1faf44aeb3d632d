use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use engine::{Snapshot, StreamingService};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

mod render;
mod script;

use script::Event;

/// ReelStream - Streaming service catalog and activity engine
#[derive(Parser)]
#[command(name = "reel-stream")]
#[command(about = "Replays streaming-service event scripts against the in-memory engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay an event script
    Run {
        /// Path to the event script
        script: PathBuf,

        /// Write a JSON snapshot of the final state to this file
        #[arg(long)]
        snapshot: Option<PathBuf>,

        /// Suppress per-event echo output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Parse an event script without executing it
    Check {
        /// Path to the event script
        script: PathBuf,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            script,
            snapshot,
            quiet,
        } => handle_run(&script, snapshot.as_deref(), quiet),
        Commands::Check { script } => handle_check(&script),
    }
}

/// Handle the 'run' command
fn handle_run(script: &Path, snapshot: Option<&Path>, quiet: bool) -> Result<()> {
    let text = fs::read_to_string(script)
        .with_context(|| format!("Failed to read event script {}", script.display()))?;

    let mut service = StreamingService::new();
    for (i, raw) in text.lines().enumerate() {
        match script::parse_line(raw, i + 1) {
            Ok(Some(event)) => apply_event(&mut service, event, quiet),
            Ok(None) => {}
            Err(err) => {
                // A malformed line is skipped; processing continues
                // with the next event.
                warn!(%err, "skipping malformed script line");
                eprintln!("{}", err.to_string().red());
            }
        }
    }

    if let Some(path) = snapshot {
        let json = serde_json::to_string_pretty(&Snapshot::capture(&service))
            .context("Failed to serialize snapshot")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write snapshot {}", path.display()))?;
        println!("{} Snapshot written to {}", "✓".green(), path.display());
    }
    Ok(())
}

/// Handle the 'check' command
fn handle_check(script: &Path) -> Result<()> {
    let text = fs::read_to_string(script)
        .with_context(|| format!("Failed to read event script {}", script.display()))?;

    let mut events = 0usize;
    let mut errors = 0usize;
    for (i, raw) in text.lines().enumerate() {
        match script::parse_line(raw, i + 1) {
            Ok(Some(_)) => events += 1,
            Ok(None) => {}
            Err(err) => {
                errors += 1;
                eprintln!("{}", err.to_string().red());
            }
        }
    }

    if errors == 0 {
        println!("{} {} events, no errors", "✓".green(), events);
        Ok(())
    } else {
        anyhow::bail!("{events} events, {errors} malformed lines");
    }
}

/// Execute one event and echo its outcome.
///
/// Failed operations are reported and the run continues; only I/O
/// problems abort a replay.
fn apply_event(service: &mut StreamingService, event: Event, quiet: bool) {
    let echo = |line: &str| {
        if !quiet {
            println!("{line}");
        }
    };

    match event {
        Event::Register { uid } => {
            echo(&format!("R <{uid}>"));
            match service.register_user(uid) {
                Ok(()) => echo(&format!("  {}", render::user_line(service))),
                Err(err) => report(err),
            }
        }
        Event::Unregister { uid } => {
            echo(&format!("U <{uid}>"));
            match service.unregister_user(uid) {
                Ok(()) => echo(&format!("  {}", render::user_line(service))),
                Err(err) => report(err),
            }
        }
        Event::AddMovie { id, category, year } => {
            echo(&format!("A <{id}> <{category}> <{year}>"));
            match service.add_movie(id, category, year) {
                Ok(()) => echo(&format!("  {}", render::intake_line(service))),
                Err(err) => report(err),
            }
        }
        Event::Distribute => {
            echo("D");
            service.distribute_movies();
            echo("Categorized Movies:");
            if !quiet {
                print!("{}", render::category_table(service));
            }
        }
        Event::Watch { uid, id } => {
            echo(&format!("W <{uid}> <{id}>"));
            match service.watch_movie(uid, id) {
                Ok(_) => echo(&format!(
                    "  User <{uid}> {}",
                    render::watch_history_line(service, uid)
                )),
                Err(err) => report(err),
            }
        }
        Event::Suggest { uid } => {
            echo(&format!("S <{uid}>"));
            match service.suggest_movies(uid) {
                Ok(_) => echo(&format!(
                    "  User <{uid}> {}",
                    render::suggestions_line(service, uid)
                )),
                Err(err) => report(err),
            }
        }
        Event::FilteredSearch {
            uid,
            category1,
            category2,
            min_year,
        } => {
            echo(&format!(
                "F <{uid}> <{category1}> <{category2}> <{min_year}>"
            ));
            match service.filtered_search(uid, category1, category2, min_year) {
                Ok(_) => echo(&format!(
                    "  User <{uid}> {}",
                    render::suggestions_line(service, uid)
                )),
                Err(err) => report(err),
            }
        }
        Event::TakeOff { id } => {
            echo(&format!("T <{id}>"));
            let outcome = service.take_off_movie(id);
            for uid in &outcome.removed_for {
                echo(&format!("  <{id}> removed from <{uid}> suggested list."));
            }
            match outcome.removed_from {
                Some(category) => echo(&format!("  Removed from the {category} category.")),
                None => echo(&format!("  <{id}> was not in the catalog.")),
            }
        }
        Event::PrintMovies => {
            echo("M");
            echo("Categorized Movies:");
            if !quiet {
                print!("{}", render::category_table(service));
            }
        }
        Event::PrintUsers => {
            echo("P");
            echo("Users:");
            if !quiet {
                print!("{}", render::users_block(service));
            }
        }
    }
    echo("DONE");
}

fn report(err: engine::EngineError) {
    warn!(%err, "event failed");
    eprintln!("{}", err.to_string().red());
}
