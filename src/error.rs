use thiserror::Error;

use crate::sequence::MIN_SEQUENCE_LENGTH;

/// The only way [`crate::classifier::HeuristicClassifier::analyze`] can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("sequence too short (min {} bp)", MIN_SEQUENCE_LENGTH)]
    TooShort,
}

impl AnalysisError {
    /// Fixed reason string, without the minimum length.
    pub fn reason(&self) -> &'static str {
        match self {
            AnalysisError::TooShort => "sequence too short",
        }
    }
}

/// Errors from reading input and writing output around the classifier.
#[derive(Debug, Error)]
pub enum SplicescanError {
    #[error("invalid characters detected: {0} (use only A, C, G, T, N)")]
    InvalidCharacters(String),
    #[error("unknown sample '{0}'")]
    UnknownSample(String),
    #[error("no sequence data in input")]
    Empty,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Serde(#[from] serde_json::Error),
}
