//! Binary entrypoint: read one JSON object from stdin (or a file), write the
//! telemetry response to stdout as JSON or as a text deck.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use chrono::Utc;
use clap::{Parser, ValueEnum};
use sprint_risk_engine::{
  logging, present, telemetry, Config, Engine, ProviderConfig, SprintSnapshot, TelemetryResponse,
  TrackerSearch,
};
use tracing::warn;

#[derive(Parser, Debug)]
#[command(name = "sprint-risk", version, about = "Sprint commitment risk simulator")]
struct Cli {
  /// Read input from this file instead of stdin.
  #[arg(long)]
  input: Option<PathBuf>,
  /// Input is a normalized sprint snapshot rather than a tracker search payload.
  #[arg(long, default_value_t = false)]
  snapshot: bool,
  /// Fixed seed; defaults to one derived from the snapshot.
  #[arg(long)]
  seed: Option<u64>,
  /// Monte Carlo trials per run.
  #[arg(long)]
  trials: Option<u32>,
  #[arg(long, value_enum, default_value_t = Format::Json)]
  format: Format,
  /// Render the simulated dataset without reading any input.
  #[arg(long, default_value_t = false)]
  demo: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
  Json,
  Text,
}

fn main() {
  logging::init_tracing();
  let cli = Cli::parse();
  if let Err(e) = run_binary(&cli) {
    let _ = writeln!(io::stderr(), "sprint-risk error: {}", e);
    std::process::exit(1);
  }
}

fn run_binary(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
  let mut config = Config::default();
  if let Some(trials) = cli.trials {
    config.trial_count = trials;
  }
  let engine = Engine::try_new(config)?;

  let resp = if cli.demo {
    present::demo_response()
  } else {
    match read_input(cli).and_then(|raw| respond(cli, &engine, &raw)) {
      Ok(resp) => resp,
      // The deck always shows something: fall back to the labeled demo data.
      Err(e) if cli.format == Format::Text => {
        warn!(error = %e, "input unavailable; showing simulated dataset");
        present::demo_response()
      }
      Err(e) => return Err(e),
    }
  };

  let mut stdout = io::stdout().lock();
  match cli.format {
    Format::Json => {
      serde_json::to_writer(&mut stdout, &resp)?;
      writeln!(stdout)?;
    }
    Format::Text => {
      stdout.write_all(present::render(&resp, engine.config().trial_count).as_bytes())?;
    }
  }
  stdout.flush()?;
  Ok(())
}

fn read_input(cli: &Cli) -> Result<String, Box<dyn std::error::Error>> {
  let raw = match &cli.input {
    Some(path) => fs::read_to_string(path)?,
    None => {
      let mut raw = String::new();
      io::stdin().lock().read_to_string(&mut raw)?;
      raw
    }
  };
  if raw.trim().is_empty() {
    return Err("empty input".into());
  }
  Ok(raw)
}

fn respond(cli: &Cli, engine: &Engine, raw: &str) -> Result<TelemetryResponse, Box<dyn std::error::Error>> {
  if cli.snapshot {
    let snapshot: SprintSnapshot = serde_json::from_str(raw)?;
    Ok(telemetry::handle_snapshot(engine, &snapshot, cli.seed))
  } else {
    let payload: TrackerSearch = serde_json::from_str(raw)?;
    Ok(telemetry::handle(
      engine,
      &ProviderConfig::default(),
      &payload,
      Utc::now(),
      cli.seed,
    ))
  }
}
