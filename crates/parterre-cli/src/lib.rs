//! Parterre CLI library.
//!
//! Reads a seatmap layout from a JSON file, renders it, and writes the
//! resulting SVG document to a file.

mod args;

pub use args::Args;

use std::{fs, fs::File, io::Write};

use log::{debug, error, info};
use thiserror::Error;

use parterre::{SeatmapBuilder, SeatmapError, config::RenderConfig, data::SeatmapLayoutData};

/// Errors surfaced by the CLI front end.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid layout data: {0}")]
    Layout(#[from] serde_json::Error),

    #[error("invalid configuration file: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Render(#[from] SeatmapError),
}

/// Runs the renderer with the given arguments.
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(input = args.input; "Reading seatmap layout");
    let source = fs::read_to_string(&args.input)?;
    let data: SeatmapLayoutData = serde_json::from_str(&source)?;

    let config = load_config(args.config.as_deref())?;

    let rendered = SeatmapBuilder::new(config).render(&data)?;
    debug!("Seatmap rendered");

    write_svg(&args.output, &rendered.to_svg_string())
}

fn load_config(path: Option<&str>) -> Result<RenderConfig, CliError> {
    match path {
        Some(path) => {
            debug!(path = path; "Loading configuration file");
            let source = fs::read_to_string(path)?;
            Ok(toml::from_str(&source)?)
        }
        None => Ok(RenderConfig::default()),
    }
}

fn write_svg(file_name: &str, content: &str) -> Result<(), CliError> {
    info!(file_name = file_name; "Creating SVG file");
    let mut f = match File::create(file_name) {
        Ok(file) => file,
        Err(err) => {
            error!(file_name = file_name, err:err; "Failed to create SVG file");
            return Err(CliError::Io(err));
        }
    };

    if let Err(err) = f.write_all(content.as_bytes()) {
        error!(file_name = file_name, err:err; "Failed to write SVG content");
        return Err(CliError::Io(err));
    }

    Ok(())
}
