//! Report writers for plain-text and JSON output.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Per-leg line of a report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegRecord {
    pub index: usize,
    pub distance_m: f64,
}

/// Everything a report needs from one planning run.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary<'a> {
    pub scenario: &'a str,
    pub total_distance_m: f64,
    pub optimal_velocity_m_s: f64,
    pub optimal_altitude_m: f64,
    pub energy_per_unit_distance: f64,
    pub total_energy: f64,
    pub legs: Vec<LegRecord>,
}

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod number {
    /// Format with `digits` significant digits and trailing zeros trimmed,
    /// switching to exponent notation for very large or small magnitudes.
    pub fn significant(value: f64, digits: usize) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        if value == 0.0 {
            return "0".to_string();
        }
        let digits = digits.max(1);

        // Rounding can carry into the next decade (999999.7 -> 1e6), so take the
        // exponent from the rounded scientific form.
        let scientific = format!("{:.*e}", digits - 1, value);
        let (mantissa, exponent) = match scientific.split_once('e') {
            Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
            None => (scientific.as_str(), 0),
        };

        if exponent < -4 || exponent >= digits as i32 {
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", trim_zeros(mantissa), sign, exponent.abs())
        } else {
            let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
            trim_zeros(&format!("{:.*}", decimals, value)).to_string()
        }
    }

    fn trim_zeros(s: &str) -> &str {
        if s.contains('.') {
            s.trim_end_matches('0').trim_end_matches('.')
        } else {
            s
        }
    }
}

pub mod text {
    use std::io::{self, Write};

    use super::Summary;
    use super::number::significant;

    const DIGITS: usize = 6;

    /// Write the four-line console report.
    pub fn write_report(writer: &mut dyn Write, summary: &Summary<'_>) -> io::Result<()> {
        writeln!(
            writer,
            "Total Distance: {} meters",
            significant(summary.total_distance_m, DIGITS)
        )?;
        writeln!(
            writer,
            "Optimal Velocity: {} m/s",
            significant(summary.optimal_velocity_m_s, DIGITS)
        )?;
        writeln!(
            writer,
            "Optimal Altitude: {} meters",
            significant(summary.optimal_altitude_m, DIGITS)
        )?;
        writeln!(
            writer,
            "Estimated Total Energy: {} units",
            significant(summary.total_energy, DIGITS)
        )
    }
}

pub mod json {
    use chrono::{SecondsFormat, Utc};
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::io::{self, Write};

    use super::Summary;

    #[derive(Debug, Serialize)]
    struct Leg {
        index: usize,
        distance_m: f64,
    }

    #[derive(Debug, Serialize)]
    struct Report<'a> {
        scenario: &'a str,
        generated_at: String,
        total_distance_m: f64,
        optimal_velocity_m_s: f64,
        optimal_altitude_m: f64,
        energy_per_unit_distance: f64,
        total_energy: f64,
        legs: Vec<Leg>,
    }

    /// Write the summary as a pretty-printed JSON document followed by a newline.
    pub fn write_report(writer: &mut dyn Write, summary: &Summary<'_>) -> io::Result<()> {
        let report = Report {
            scenario: summary.scenario,
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            total_distance_m: summary.total_distance_m,
            optimal_velocity_m_s: summary.optimal_velocity_m_s,
            optimal_altitude_m: summary.optimal_altitude_m,
            energy_per_unit_distance: summary.energy_per_unit_distance,
            total_energy: summary.total_energy,
            legs: summary
                .legs
                .iter()
                .map(|leg| Leg {
                    index: leg.index,
                    distance_m: leg.distance_m,
                })
                .collect(),
        };
        to_writer_pretty(&mut *writer, &report).map_err(io::Error::other)?;
        writeln!(writer)
    }
}
