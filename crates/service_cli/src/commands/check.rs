//! Check command implementation
//!
//! Validates a point file without interpolating: every record that would be
//! read must decode, and enough of them must be present.

use std::io::Write;
use std::path::Path;

use adapter_loader::{load_document, PointDocument};
use tracing::info;

use crate::{CliError, Result};

/// Run the check command
pub fn run<W: Write>(input: &Path, points: usize, out: &mut W) -> Result<PointDocument> {
    info!("Checking {}", input.display());

    let document = load_document(input, points)?;

    if let Some(header) = document.header {
        writeln!(out, "Header: n={}, k={}", header.n, header.k)?;
    }

    let loaded = document.points.len();
    if loaded < points {
        return Err(CliError::TooFewPoints {
            path: input.display().to_string(),
            got: loaded,
            need: points,
        });
    }

    writeln!(out, "OK: {} readable points in {}", loaded, input.display())?;
    Ok(document)
}
