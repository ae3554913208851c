//! Deterministic exon/intron/splice-site classifier.
//!
//! The classifier is a fixed decision list over GC content, codon presence
//! and GT/AG motif counts. Nothing is learned; [`HeuristicClassifier::train`]
//! exists only so callers written against a trainable model keep working.

use log::{debug, info};
use splicescan_protocol::{
    AnalysisResult, ClassProbabilities, ModelStatus, Prediction, SpliceJunctions,
    TrainingMetrics,
};

use crate::codons::{has_start_codon, has_stop_codon};
use crate::composition::Composition;
use crate::error::AnalysisError;
use crate::sequence::{MIN_SEQUENCE_LENGTH, normalize, preview};
use crate::splice_sites::{SiteKind, find_sites, intron_boundaries};

const EXON_MIN_GC: f64 = 50.0;
const INTRON_MAX_GC: f64 = 40.0;

const EXON_CONFIDENCE: f64 = 85.0;
const SPLICE_SITE_CONFIDENCE: f64 = 75.0;
const INTRON_CONFIDENCE: f64 = 70.0;
const UNKNOWN_CONFIDENCE: f64 = 50.0;

/// Number of donor and acceptor sites listed in a result.
pub const REPORTED_SITES: usize = 10;
/// Number of intron boundary candidates listed in a result.
pub const REPORTED_BOUNDARIES: usize = 5;

/// Inputs of the decision list, computed once per sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SequenceFeatures {
    pub gc_content: f64,
    pub has_start: bool,
    pub has_stop: bool,
    pub donor_count: usize,
    pub acceptor_count: usize,
}

impl SequenceFeatures {
    /// First matching rule wins.
    pub fn classify(&self) -> (Prediction, f64) {
        if self.gc_content > EXON_MIN_GC && self.has_start && self.has_stop {
            (Prediction::Exon, EXON_CONFIDENCE)
        } else if self.donor_count > 0 || self.acceptor_count > 0 {
            // Ties go to the acceptor
            if self.donor_count > self.acceptor_count {
                (Prediction::DonorSite, SPLICE_SITE_CONFIDENCE)
            } else {
                (Prediction::AcceptorSite, SPLICE_SITE_CONFIDENCE)
            }
        } else if self.gc_content < INTRON_MAX_GC {
            (Prediction::Intron, INTRON_CONFIDENCE)
        } else {
            (Prediction::Unknown, UNKNOWN_CONFIDENCE)
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicClassifier;

impl HeuristicClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify `raw` after normalizing it to uppercase ACGT.
    pub fn analyze(&self, raw: &str) -> Result<AnalysisResult, AnalysisError> {
        let sequence = normalize(raw);
        if sequence.len() < MIN_SEQUENCE_LENGTH {
            debug!(
                "Rejecting sequence of {} bases after normalization",
                sequence.len()
            );
            return Err(AnalysisError::TooShort);
        }
        let bases = sequence.as_bytes();

        let composition = Composition::new_from_sequence(bases);
        let mut donor_sites = find_sites(bases, SiteKind::Donor);
        let mut acceptor_sites = find_sites(bases, SiteKind::Acceptor);
        let mut boundaries = intron_boundaries(&donor_sites, &acceptor_sites);

        let features = SequenceFeatures {
            gc_content: composition.gc_content(),
            has_start: has_start_codon(bases),
            has_stop: has_stop_codon(bases),
            donor_count: donor_sites.len(),
            acceptor_count: acceptor_sites.len(),
        };
        let (prediction, confidence) = features.classify();
        debug!(
            "{} bases, GC {:.2}%, {} donors, {} acceptors -> {} ({})",
            sequence.len(),
            features.gc_content,
            features.donor_count,
            features.acceptor_count,
            prediction,
            confidence
        );

        donor_sites.truncate(REPORTED_SITES);
        acceptor_sites.truncate(REPORTED_SITES);
        boundaries.truncate(REPORTED_BOUNDARIES);

        Ok(AnalysisResult {
            sequence: preview(&sequence),
            length: sequence.len(),
            overall_prediction: prediction,
            overall_confidence: confidence,
            class_probabilities: ClassProbabilities::with_winner(prediction, confidence),
            gc_content: features.gc_content,
            base_composition: composition.base_percentages(),
            splice_junctions: SpliceJunctions {
                donor_sites,
                acceptor_sites,
                intron_boundaries: boundaries,
                total_donors: features.donor_count,
                total_acceptors: features.acceptor_count,
            },
            has_start_codon: features.has_start as u8,
            has_stop_codon: features.has_stop as u8,
            donor_site_count: features.donor_count,
            acceptor_site_count: features.acceptor_count,
            exon_count: (prediction == Prediction::Exon) as usize,
            intron_count: (prediction == Prediction::Intron) as usize,
        })
    }

    /// No-op training; always reports the same metrics.
    pub fn train(&self) -> TrainingMetrics {
        info!("Heuristic classifier does not need training");
        TrainingMetrics {
            train_accuracy: 0.85,
            test_accuracy: 0.80,
            feature_count: 10,
            status: ModelStatus::Ready,
        }
    }
}
