//! Parse a TJA file and print its storage record and audio manifest as JSON.
//!
//! Usage:
//!   cargo run --example `tja_to_record` -- <`file_path`> [--id <`song_id`>]
//!
//! Example:
//!   cargo run --example `tja_to_record` -- `tests/tja/files/dan.tja` --id 42

use std::{
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

use clap::Parser;
use tja_rs::{diagnostics::emit_tja_warnings, tja::parse_tja};

/// Configuration parameters
#[derive(Parser, Debug)]
#[command(name = "tja_to_record")]
#[command(about = "Converts a TJA chart into a song record", long_about = None)]
struct Config {
    /// Chart file path
    #[arg(value_name = "FILE")]
    chart_path: PathBuf,

    /// Song id written into the record, defaults to the file stem
    #[arg(long, value_name = "SONG_ID")]
    id: Option<String>,
}

/// Reads the chart as UTF-8, or as Shift_JIS if it is not valid UTF-8.
fn load_source(path: &Path) -> Result<String, String> {
    let bytes = std::fs::read(path).map_err(|e| format!("Failed to read file: {e}"))?;
    if let Ok(text) = std::str::from_utf8(&bytes) {
        return Ok(text.trim_start_matches('\u{feff}').to_string());
    }
    Ok(encoding_rs::SHIFT_JIS.decode(&bytes).0.into_owned())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    let source = load_source(&config.chart_path)?;
    let name = config.chart_path.display().to_string();

    let output = parse_tja(&source);
    emit_tja_warnings(&name, &source, &output.warnings);

    let song_id = config.id.unwrap_or_else(|| {
        config
            .chart_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    });
    let created_ns = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default();

    let record = output.document.to_record(&song_id, created_ns);
    let printed = serde_json::json!({
        "record": record.to_json()?,
        "audio_files": output.document.audio_manifest(),
    });
    println!("{}", serde_json::to_string_pretty(&printed)?);
    Ok(())
}
