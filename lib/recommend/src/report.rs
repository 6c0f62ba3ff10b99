//! Human-readable and JSON renderings of a recommendation list

use crate::result::{NeighborResult, RecommendationResponse};
use std::fmt::Write;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}' (expected text or json)", other)),
        }
    }
}

/// Render `results` for `query` in the requested format
pub fn render(query: &str, results: &[NeighborResult], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(format_text(query, results)),
        OutputFormat::Json => RecommendationResponse::new(query, results.to_vec()).to_json(),
    }
}

/// Numbered listing with two decimals for score and four for distance
pub fn format_text(query: &str, results: &[NeighborResult]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Similar anime to '{}':", query);
    for (i, rec) in results.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, rec.name);
        let _ = writeln!(out, "   Score: {}", fixed(rec.score, 2));
        let _ = writeln!(out, "   Rank: {}", plain(rec.rank));
        let _ = writeln!(out, "   Popularity: {}", plain(rec.popularity));
        let _ = writeln!(out, "   Members: {}", plain(rec.members));
        let _ = writeln!(out, "   Similarity Distance: {:.4}", rec.distance);
        let _ = writeln!(out);
    }
    out
}

fn fixed(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", decimals, v),
        None => "N/A".to_string(),
    }
}

/// Integral values print without a fractional part
fn plain(value: Option<f64>) -> String {
    match value {
        Some(v) if v.fract() == 0.0 && v.abs() < 1e15 => format!("{}", v as i64),
        Some(v) => format!("{}", v),
        None => "N/A".to_string(),
    }
}
