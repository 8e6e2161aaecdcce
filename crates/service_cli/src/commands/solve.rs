//! Solve command implementation
//!
//! Loads a point file and prints the constant term of the interpolating
//! polynomial through its leading points.

use std::io::Write;
use std::path::Path;

use adapter_loader::load_document;
use interp_core::math::decimal::to_decimal_string;
use interp_core::math::interpolators::{Interpolator, LagrangeInterpolator, QuadraticInterpolator};
use interp_core::types::{BigRational, InterpolationError, PointSet};
use tracing::{debug, info, warn, Level};

use crate::config::MIN_POINTS;
use crate::{CliError, Result};

/// Options for a solve run
#[derive(Debug, Clone, Copy)]
pub struct SolveOptions<'a> {
    /// Point file to read
    pub input: &'a Path,
    /// Number of leading points to interpolate
    pub points: usize,
    /// Fractional digits shown for a non-integral constant
    pub precision: u32,
}

/// Outcome of a successful solve run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReport {
    /// Points read from the file
    pub points: PointSet,
    /// Exact constant term
    pub constant: BigRational,
}

/// Run the solve command
pub fn run<W: Write>(options: &SolveOptions<'_>, out: &mut W) -> Result<SolveReport> {
    info!("Starting interpolation...");
    info!("  Input: {}", options.input.display());
    info!("  Points: {}", options.points);

    if options.points < MIN_POINTS {
        return Err(CliError::InvalidArgument(format!(
            "points must be at least {}, got {}",
            MIN_POINTS, options.points
        )));
    }

    let document = load_document(options.input, options.points)?;

    if let Some(header) = document.header {
        let degree = usize::try_from(header.degree()).unwrap_or(usize::MAX);
        if degree >= options.points {
            warn!(
                "File declares a degree {} polynomial (k={}) but only {} points will be used",
                degree, header.k, options.points
            );
        }
    }

    writeln!(out, "Loaded {} points:", document.points.len())?;
    for point in &document.points {
        writeln!(out, "  - {}", point)?;
    }

    let constant = constant_term(&document.points, options.points)?;

    if tracing::enabled!(Level::DEBUG) {
        debug!("Interpolating polynomial, lowest power first:");
        for (power, coeff) in coefficients(&document.points, options.points)?
            .iter()
            .enumerate()
        {
            debug!("  x^{}: {}", power, coeff);
        }
    }

    if !constant.is_integer() {
        warn!(
            "Constant term {} is not an integer (~{}); printing its integer part",
            constant,
            to_decimal_string(&constant, options.precision)
        );
    }

    writeln!(out, "Constant term C: {}", constant.to_integer())?;
    info!("Interpolation complete");

    Ok(SolveReport {
        points: document.points,
        constant,
    })
}

/// Constant term through the first `count` points.
///
/// Three points use the closed-form quadratic; more use general Lagrange.
fn constant_term(
    points: &PointSet,
    count: usize,
) -> std::result::Result<BigRational, InterpolationError> {
    if count == MIN_POINTS {
        return Ok(QuadraticInterpolator::new(points.as_slice())?.constant_term());
    }

    let leading = points.leading(count);
    if leading.len() < count {
        return Err(InterpolationError::InsufficientData {
            got: leading.len(),
            need: count,
        });
    }

    Ok(LagrangeInterpolator::new(leading)?.constant_term())
}

/// Monomial coefficients of the polynomial through the first `count` points.
fn coefficients(
    points: &PointSet,
    count: usize,
) -> std::result::Result<Vec<BigRational>, InterpolationError> {
    Ok(LagrangeInterpolator::new(points.leading(count))?.coefficients())
}
