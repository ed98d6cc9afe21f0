pub mod analyzer;
pub mod cli;
pub mod config;
pub mod dict;
pub mod source;

pub use analyzer::analyze;
pub use config::Config;
pub use dict::{Dictionary, SpellingPair};

use serde::{Deserialize, Serialize};

/// Result of analyzing one body of text against the spelling dictionary.
///
/// Built fresh on every call to [`analyze`] and owned by the caller;
/// nothing is cached between analyses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub british_count: usize,
    pub american_count: usize,
    pub total_found: usize,
    pub british_percentage: f64,
    pub american_percentage: f64,
    pub word_summary: Vec<SummaryEntry>,
}

/// Per-pair breakdown of matches, ranked by total occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryEntry {
    pub british_spelling: String,
    pub american_spelling: String,
    pub british_count: usize,
    pub american_count: usize,
}

impl SummaryEntry {
    pub fn total(&self) -> usize {
        self.british_count + self.american_count
    }
}
