mod replay;
mod script;

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use clap::Parser;
use viewport::{ConfigError, ViewportConfig, ViewportController};

use crate::replay::{FrameRecord, Replay};

/// Viewport used when neither a config file nor a size flag is given.
const DEFAULT_WIDTH: f64 = 375.0;
const DEFAULT_HEIGHT: f64 = 667.0;

#[derive(Debug, thiserror::Error)]
enum ReplayError {
    #[error("failed to open {path}: {source}")]
    Open { path: String, source: io::Error },
    #[error("failed to read script: {0}")]
    Read(io::Error),
    #[error("script line {line}: {source}")]
    Parse { line: usize, source: serde_json::Error },
    #[error("invalid viewport config: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to encode frame: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to write frame: {0}")]
    Write(#[from] io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "overscroll", about = "Replay a gesture script through the elastic viewport controller")]
struct Cli {
    /// JSONL gesture script, or `-` for stdin.
    #[arg(default_value = "-")]
    script: String,

    /// JSON viewport config (size, anchor, zoom range, world height).
    #[arg(long, env = "OVERSCROLL_CONFIG")]
    config: Option<PathBuf>,

    /// Viewport width in points; overrides the config file.
    #[arg(long, env = "OVERSCROLL_WIDTH")]
    width: Option<f64>,

    /// Viewport height in points; overrides the config file.
    #[arg(long, env = "OVERSCROLL_HEIGHT")]
    height: Option<f64>,

    /// Extra frames to render after the script ends.
    #[arg(long, default_value_t = 0)]
    settle: u32,

    /// Print only the last frame instead of every frame.
    #[arg(long)]
    final_only: bool,
}

fn main() -> Result<(), ReplayError> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    tracing::info!(
        width = config.viewport.width,
        height = config.viewport.height,
        top_of_world = config.top_of_world,
        "replaying gesture script"
    );

    let mut replay = Replay::new(ViewportController::new(config)?);
    let reader = open_script(&cli.script)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut last = None;
    let mut events = 0_usize;
    let mut skipped = 0_usize;
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(ReplayError::Read)?;
        let event = script::parse_line(&line).map_err(|source| ReplayError::Parse { line: index + 1, source })?;
        let Some(event) = event else {
            skipped = skipped.saturating_add(1);
            continue;
        };
        events = events.saturating_add(1);

        for record in replay.apply(event) {
            if !cli.final_only {
                write_record(&mut out, &record)?;
            }
            last = Some(record);
        }
    }

    for _ in 0..cli.settle {
        let record = replay.tick();
        if !cli.final_only {
            write_record(&mut out, &record)?;
        }
        last = Some(record);
    }

    if cli.final_only {
        if let Some(record) = last {
            write_record(&mut out, &record)?;
        }
    }
    out.flush()?;

    tracing::info!(
        frames = replay.frames(),
        events,
        skipped,
        still_dragging = replay.controller().is_dragging(),
        "replay complete"
    );
    Ok(())
}

fn load_config(cli: &Cli) -> Result<ViewportConfig, ReplayError> {
    let mut config = match &cli.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|source| ReplayError::Open { path: path.display().to_string(), source })?;
            ViewportConfig::from_json_str(&raw)?
        }
        None => ViewportConfig::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
    };
    if let Some(width) = cli.width {
        config.viewport.width = width;
    }
    if let Some(height) = cli.height {
        config.viewport.height = height;
    }
    config.validate()?;
    Ok(config)
}

fn open_script(path: &str) -> Result<Box<dyn BufRead>, ReplayError> {
    if path == "-" {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    let file = File::open(path).map_err(|source| ReplayError::Open { path: path.to_owned(), source })?;
    Ok(Box::new(BufReader::new(file)))
}

fn write_record(out: &mut impl Write, record: &FrameRecord) -> Result<(), ReplayError> {
    serde_json::to_writer(&mut *out, record)?;
    writeln!(out)?;
    Ok(())
}
