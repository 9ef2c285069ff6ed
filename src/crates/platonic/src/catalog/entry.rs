//! Catalog record types

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Highest confidence a record can carry
pub const MAX_CONFIDENCE: u8 = 5;

/// One pre-authored registry record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: &'static str,
    pub category: &'static str,
    pub status: CategoryStatus,
    pub model: Option<&'static str>,
    pub price: Option<&'static str>,
    pub form_definition: &'static str,
    pub core_reasoning: &'static str,
    pub key_disqualifiers: &'static str,
    pub maintenance: Maintenance,
    pub lifespan: &'static str,
    /// Editorial confidence, `1..=5`
    pub confidence: u8,
    /// ISO date of the last review
    pub last_reviewed: &'static str,
}

impl CatalogEntry {
    /// Date of the last review, if the stored text is a valid ISO date
    pub fn reviewed_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.last_reviewed, "%Y-%m-%d").ok()
    }

    /// Model name, or the placeholder shown for categories without one
    pub fn model_or_placeholder(&self) -> &'static str {
        self.model.unwrap_or("Under Review")
    }

    /// Confidence as filled and empty pips, e.g. `●●●●○`
    pub fn confidence_pips(&self) -> String {
        let filled = self.confidence.min(MAX_CONFIDENCE) as usize;
        let empty = MAX_CONFIDENCE as usize - filled;
        format!("{}{}", "●".repeat(filled), "○".repeat(empty))
    }
}

/// Lifecycle status of a category in the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CategoryStatus {
    Declared,
    Empty,
    Candidate,
    Deprecated,
    SplitRequired,
    Rejected,
}

impl CategoryStatus {
    pub const ALL: [CategoryStatus; 6] = [
        CategoryStatus::Declared,
        CategoryStatus::Empty,
        CategoryStatus::Candidate,
        CategoryStatus::Deprecated,
        CategoryStatus::SplitRequired,
        CategoryStatus::Rejected,
    ];

    /// Wire spelling, e.g. `SPLIT_REQUIRED`
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryStatus::Declared => "DECLARED",
            CategoryStatus::Empty => "EMPTY",
            CategoryStatus::Candidate => "CANDIDATE",
            CategoryStatus::Deprecated => "DEPRECATED",
            CategoryStatus::SplitRequired => "SPLIT_REQUIRED",
            CategoryStatus::Rejected => "REJECTED",
        }
    }

    /// Short badge label
    pub fn label(&self) -> &'static str {
        match self {
            CategoryStatus::Declared => "Declared",
            CategoryStatus::Empty => "Empty",
            CategoryStatus::Candidate => "Candidate",
            CategoryStatus::Deprecated => "Deprecated",
            CategoryStatus::SplitRequired => "Split Req",
            CategoryStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for CategoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace(['-', ' '], "_");
        CategoryStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| format!("Invalid status: {}", s))
    }
}

/// How an owner keeps the object alive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Maintenance {
    Repairable,
    Disposable,
    Durable,
    Obsolete,
    Consumable,
    Warranty,
    Unknown,
    Empty,
}

impl Maintenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Maintenance::Repairable => "REPAIRABLE",
            Maintenance::Disposable => "DISPOSABLE",
            Maintenance::Durable => "DURABLE",
            Maintenance::Obsolete => "OBSOLETE",
            Maintenance::Consumable => "CONSUMABLE",
            Maintenance::Warranty => "WARRANTY",
            Maintenance::Unknown => "UNKNOWN",
            Maintenance::Empty => "EMPTY",
        }
    }
}

impl fmt::Display for Maintenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
