use lazy_static::lazy_static;
use samples::Samples;

pub mod about;
pub mod classifier;
pub mod codons;
pub mod composition;
pub mod error;
pub mod export;
pub mod input;
pub mod samples;
pub mod sequence;
pub mod splice_sites;

pub use classifier::HeuristicClassifier;
pub use error::{AnalysisError, SplicescanError};
pub use splicescan_protocol as protocol;

lazy_static! {
    // Bundled sample sequences
    pub static ref SAMPLES: Samples = Samples::load();
}
