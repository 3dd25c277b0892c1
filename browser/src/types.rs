//! Report row model and per-tag display tones.
//!
//! These types define the data behind the browser table. They're designed
//! to be:
//!
//! - **Serializable** - JSON import/export via serde
//! - **Clone-friendly** - UI layers can share rows without borrowing issues
//! - **Typed** - dates are [`NaiveDate`], never strings, so an invalid
//!   calendar value cannot reach a comparison

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single phishing-simulation report row.
///
/// Seed rows are compiled in at startup; new rows are appended by the
/// report-creation form and edited in place by the Edit action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Unique row identity (numeric string, continues past the seed).
    pub key: String,
    /// Campaign name shown in the first column.
    pub name: String,
    /// Categorical labels; insertion order is display order and duplicates
    /// are not prevented.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Payload descriptor, e.g. "Link" or "Attachment".
    pub contain: String,
    /// Severity label, e.g. "Low", "Normal", "High".
    pub level: String,
    /// Calendar date of the campaign.
    pub date: NaiveDate,
    /// Simulation scenario the report was generated from.
    #[serde(default)]
    pub scenario: String,
}

/// Display tone for a tag chip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagTone {
    /// Executive-fraud campaigns ("BEC").
    Amber,
    /// Privacy-sensitive campaigns ("Data Protection").
    Violet,
    /// Everything else.
    Blue,
}

/// Tone used when rendering `tag` as a chip in the table.
pub fn tag_tone(tag: &str) -> TagTone {
    match tag {
        "BEC" => TagTone::Amber,
        "Data Protection" => TagTone::Violet,
        _ => TagTone::Blue,
    }
}
