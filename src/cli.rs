//! Input and output for the command line tool

use confidence_core::{Error, Result};
use std::io::BufRead;

/// Environment variable holding the `tracing` filter directives
pub const LOG_ENV: &str = "NORMAL_CONFIDENCE_LOG";

// Significant digits of a C++ iostream float
const SIGNIFICANT_DIGITS: i32 = 6;

/// Read the first whitespace-delimited token from `reader` as an observation
///
/// Blank lines are skipped; anything after the first token is ignored.
pub fn read_observation<R: BufRead>(mut reader: R) -> Result<f32> {
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(Error::InvalidInput("no observation on input".to_string()));
        }
        if let Some(token) = line.split_whitespace().next() {
            return parse_observation(token);
        }
    }
}

pub fn parse_observation(token: &str) -> Result<f32> {
    token
        .parse::<f32>()
        .map_err(|e| Error::InvalidInput(format!("observation {token:?} is not a number: {e}")))
}

/// Format a score with six significant digits and no trailing zeros
///
/// Matches `printf("%g")`, apart from the exponent of very small values
/// being printed without padding (`1.5e-8`).
pub fn format_score(score: f32) -> String {
    if score == 0.0 || !score.is_finite() {
        return score.to_string();
    }

    let value = score as f64;
    let scientific = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS {
        format!("{}e{}", trim_fraction(mantissa), exponent)
    } else {
        let decimals = (SIGNIFICANT_DIGITS - 1 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
