//! Rejection class histogram

use serde::{Deserialize, Serialize};

use domain_claims::{Claim, RejectionClass};

/// Number of claims carrying one rejection class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistogramEntry {
    pub label: RejectionClass,
    pub count: u64,
}

/// Claim counts per rejection class, in first-occurrence order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RejectionHistogram {
    entries: Vec<HistogramEntry>,
}

impl RejectionHistogram {
    /// Counts the rejection class of every claim
    pub fn from_claims(claims: &[Claim]) -> Self {
        let mut histogram = Self::default();
        for claim in claims {
            histogram.increment(claim.rejection_class);
        }
        histogram
    }

    fn increment(&mut self, label: RejectionClass) {
        // at most six labels, a scan keeps insertion order for free
        match self.entries.iter_mut().find(|entry| entry.label == label) {
            Some(entry) => entry.count += 1,
            None => self.entries.push(HistogramEntry { label, count: 1 }),
        }
    }

    /// Entries in first-occurrence order
    pub fn entries(&self) -> &[HistogramEntry] {
        &self.entries
    }

    /// Count for a label, zero when never seen
    pub fn count(&self, label: RejectionClass) -> u64 {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map_or(0, |entry| entry.count)
    }

    /// Total number of claims counted
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|entry| entry.count).sum()
    }
}
