use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::PathBuf;

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::error::{DrillError, DrillResult};

static OPEN_RANGES_JSON: &str = include_str!("../data/open_ranges.json");

/// The on-disk range resource: a top-level object mapping lowercase
/// position codes to arrays of canonical hand notations.
#[derive(Deserialize, Debug, Clone)]
#[serde(transparent)]
struct RangeTable(HashMap<String, HashSet<String>>);

static BUILTIN_RANGES: Lazy<RangeTable> = Lazy::new(|| {
    serde_json::from_str(OPEN_RANGES_JSON).expect("Failed to parse builtin open ranges")
});

/// Table positions the trainer deals from, in seating order.
pub const POSITIONS: &[&str] = &["SB", "UTG", "UTG+1", "MP1", "LJ", "HJ", "CO", "BU"];

pub fn validate_position(pos: &str) -> Result<String, String> {
    let pos = pos.to_uppercase();
    if POSITIONS.contains(&pos.as_str()) {
        Ok(pos)
    } else {
        Err(format!(
            "Invalid position '{}'. Valid: {}",
            pos,
            POSITIONS.join(", ")
        ))
    }
}

pub fn explain_position(pos: &str) -> &'static str {
    match pos {
        "SB" => "Small Blind \u{2014} worst postflop position, open tight",
        "UTG" => "Under the Gun \u{2014} first to act, play tight",
        "UTG+1" => "UTG+1 \u{2014} early position, play tight",
        "MP1" => "Middle Position \u{2014} slightly wider than early positions",
        "LJ" => "Lojack \u{2014} late-middle position, opening up",
        "HJ" => "Hijack \u{2014} one before the Cutoff, opening wider",
        "CO" => "Cutoff \u{2014} strong position, wide opening range",
        "BU" => "Button \u{2014} best seat, widest opening range",
        _ => "Unknown position",
    }
}

/// Where the per-position open ranges come from. The builtin table ships
/// with the binary; an external file is re-read on every lookup so edits
/// between rounds take effect immediately.
#[derive(Debug, Clone)]
pub enum RangeSource {
    Builtin,
    File(PathBuf),
}

impl RangeSource {
    /// The set of openable notations for `position`. Lookup is
    /// case-insensitive: the query is lowercased, never the table. A
    /// position missing from the table is a data error, surfaced as
    /// `PositionNotFound` rather than treated as fold.
    pub fn ranges_for(&self, position: &str) -> DrillResult<HashSet<String>> {
        let key = position.to_lowercase();
        match self {
            RangeSource::Builtin => BUILTIN_RANGES
                .0
                .get(&key)
                .cloned()
                .ok_or_else(|| DrillError::PositionNotFound(position.to_string())),
            RangeSource::File(path) => {
                let text = fs::read_to_string(path)?;
                let mut table: RangeTable = serde_json::from_str(&text)?;
                table
                    .0
                    .remove(&key)
                    .ok_or_else(|| DrillError::PositionNotFound(position.to_string()))
            }
        }
    }
}

pub fn combo_count(notation: &str) -> u32 {
    let chars: Vec<char> = notation.chars().collect();
    if chars.len() == 2 && chars[0] == chars[1] {
        return 6;
    }
    if chars.len() == 3 {
        if chars[2] == 's' {
            return 4;
        }
        if chars[2] == 'o' {
            return 12;
        }
    }
    0
}

pub fn total_combos<S: AsRef<str>>(hands: impl IntoIterator<Item = S>) -> u32 {
    hands.into_iter().map(|h| combo_count(h.as_ref())).sum()
}

pub fn range_pct<S: AsRef<str>>(hands: impl IntoIterator<Item = S>) -> f64 {
    total_combos(hands) as f64 / 1326.0 * 100.0
}
