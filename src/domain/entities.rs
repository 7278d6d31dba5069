//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/JSON-wire types here; adapters map into these.

use serde::{Deserialize, Serialize};

/// Exposure count for a single port, as reported by the data feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortEntry {
    /// Port label as text (e.g. "443"). Not validated as a number.
    pub label: String,
    pub count: u64,
}

impl PortEntry {
    pub fn new(label: impl Into<String>, count: u64) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// All port entries for one locale, in the order the feed returned them.
///
/// Created once per run and never mutated; duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExposureDataset {
    pub locale: String,
    ports: Vec<PortEntry>,
}

impl ExposureDataset {
    pub fn new(locale: impl Into<String>, ports: Vec<PortEntry>) -> Self {
        Self {
            locale: locale.into(),
            ports,
        }
    }

    pub fn ports(&self) -> &[PortEntry] {
        &self.ports
    }

    pub fn len(&self) -> usize {
        self.ports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }
}

/// Aggregate over a dataset's counts. Always computed from a non-empty dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortStatistics {
    pub min_count: u64,
    pub max_count: u64,
    pub total_count: u64,
}

/// Powers of ten matching the scale of the smallest and largest counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrdersOfMagnitude {
    pub min: u64,
    pub max: u64,
}

/// Outcome of one reporting run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub locale: String,
    pub stats: PortStatistics,
    pub magnitudes: OrdersOfMagnitude,
    pub title: String,
    pub report: String,
    pub published: bool,
}
