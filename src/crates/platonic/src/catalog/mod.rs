//! Catalog store
//!
//! The registry is a fixed list of records compiled into the binary. It is
//! initialised once per process and only ever read.

mod data;
mod entry;

pub use entry::{CatalogEntry, CategoryStatus, Maintenance, MAX_CONFIDENCE};

use oracle::ChallengeTarget;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Read-only view over the registry records
#[derive(Debug)]
pub struct Catalog {
    entries: &'static [CatalogEntry],
}

/// Status filter used by the ledger view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(CategoryStatus),
}

impl StatusFilter {
    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => entry.status == *status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(StatusFilter::All)
        } else {
            s.parse().map(StatusFilter::Only)
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("ALL"),
            StatusFilter::Only(status) => write!(f, "{}", status),
        }
    }
}

/// Headline counts shown on the home view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub declared: usize,
    pub empty: usize,
    pub candidate: usize,
    pub deprecated: usize,
    pub total: usize,
}

impl Catalog {
    /// Create a catalog over the given records
    pub fn new(entries: &'static [CatalogEntry]) -> Self {
        Self { entries }
    }

    /// The built-in registry
    pub fn builtin() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(|| Catalog::new(data::ENTRIES))
    }

    pub fn entries(&self) -> &'static [CatalogEntry] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a record by id
    pub fn get(&self, id: &str) -> Option<&'static CatalogEntry> {
        let id = id.trim();
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Records with exactly this status, in registry order
    pub fn with_status(&self, status: CategoryStatus) -> Vec<&'static CatalogEntry> {
        self.filter(StatusFilter::Only(status))
    }

    pub fn filter(&self, filter: StatusFilter) -> Vec<&'static CatalogEntry> {
        self.entries
            .iter()
            .filter(|entry| filter.matches(entry))
            .collect()
    }

    /// Case-insensitive substring match on category and model
    pub fn search(&self, text: &str) -> Vec<&'static CatalogEntry> {
        let needle = text.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.entries
            .iter()
            .filter(|entry| {
                entry.category.to_lowercase().contains(&needle)
                    || entry
                        .model
                        .map(|m| m.to_lowercase().contains(&needle))
                        .unwrap_or(false)
            })
            .collect()
    }

    pub fn stats(&self) -> CatalogStats {
        let count = |status| self.entries.iter().filter(|e| e.status == status).count();
        CatalogStats {
            declared: count(CategoryStatus::Declared),
            empty: count(CategoryStatus::Empty),
            candidate: count(CategoryStatus::Candidate),
            deprecated: count(CategoryStatus::Deprecated),
            total: self.entries.len(),
        }
    }
}

impl From<&CatalogEntry> for ChallengeTarget {
    fn from(entry: &CatalogEntry) -> Self {
        ChallengeTarget::new(entry.category, entry.model.map(str::to_string))
    }
}
