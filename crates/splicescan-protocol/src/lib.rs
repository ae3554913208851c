//! Machine-readable contracts produced by the splicescan classifier.
//!
//! The JSON shape (key names, nesting, 0/1 codon flags) is kept stable so
//! that front ends can render a result without depending on the analysis
//! crate itself.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse functional category assigned to a sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Prediction {
    Exon,
    Intron,
    DonorSite,
    AcceptorSite,
    Unknown,
}

impl Prediction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Prediction::Exon => "exon",
            Prediction::Intron => "intron",
            Prediction::DonorSite => "donor_site",
            Prediction::AcceptorSite => "acceptor_site",
            Prediction::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-class scores. These are not a normalized distribution: every class
/// starts at [`ClassProbabilities::BASELINE`] and only the winner is
/// replaced by the confidence.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassProbabilities {
    pub exon: f64,
    pub intron: f64,
    pub donor_site: f64,
    pub acceptor_site: f64,
}

impl Default for ClassProbabilities {
    fn default() -> Self {
        Self {
            exon: Self::BASELINE,
            intron: Self::BASELINE,
            donor_site: Self::BASELINE,
            acceptor_site: Self::BASELINE,
        }
    }
}

impl ClassProbabilities {
    pub const BASELINE: f64 = 25.0;

    /// Baseline map with the entry of `winner` overwritten. `Unknown` has
    /// no entry, so the baseline is returned unchanged.
    pub fn with_winner(winner: Prediction, confidence: f64) -> Self {
        let mut ret = Self::default();
        match winner {
            Prediction::Exon => ret.exon = confidence,
            Prediction::Intron => ret.intron = confidence,
            Prediction::DonorSite => ret.donor_site = confidence,
            Prediction::AcceptorSite => ret.acceptor_site = confidence,
            Prediction::Unknown => {}
        }
        ret
    }

    pub fn get(&self, class: Prediction) -> Option<f64> {
        match class {
            Prediction::Exon => Some(self.exon),
            Prediction::Intron => Some(self.intron),
            Prediction::DonorSite => Some(self.donor_site),
            Prediction::AcceptorSite => Some(self.acceptor_site),
            Prediction::Unknown => None,
        }
    }

    pub fn entries(&self) -> [(Prediction, f64); 4] {
        [
            (Prediction::Exon, self.exon),
            (Prediction::Intron, self.intron),
            (Prediction::DonorSite, self.donor_site),
            (Prediction::AcceptorSite, self.acceptor_site),
        ]
    }
}

/// A GT (donor) or AG (acceptor) motif occurrence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpliceSite {
    pub position: usize,
    pub context: String,
}

/// A donor/acceptor pair that could delimit an intron.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntronBoundary {
    #[serde(rename = "donor")]
    pub donor_position: usize,
    #[serde(rename = "acceptor")]
    pub acceptor_position: usize,
    pub distance: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SpliceJunctions {
    pub donor_sites: Vec<SpliceSite>,
    pub acceptor_sites: Vec<SpliceSite>,
    pub intron_boundaries: Vec<IntronBoundary>,
    pub total_donors: usize,
    pub total_acceptors: usize,
}

/// Percentage of each base in the analyzed sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseComposition {
    #[serde(rename = "A")]
    pub a: f64,
    #[serde(rename = "C")]
    pub c: f64,
    #[serde(rename = "G")]
    pub g: f64,
    #[serde(rename = "T")]
    pub t: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// The analyzed sequence, cut to 100 bases plus "..." when longer.
    pub sequence: String,
    pub length: usize,
    pub overall_prediction: Prediction,
    pub overall_confidence: f64,
    pub class_probabilities: ClassProbabilities,
    pub gc_content: f64,
    pub base_composition: BaseComposition,
    pub splice_junctions: SpliceJunctions,
    pub has_start_codon: u8,
    pub has_stop_codon: u8,
    pub donor_site_count: usize,
    pub acceptor_site_count: usize,
    pub exon_count: usize,
    pub intron_count: usize,
}

impl AnalysisResult {
    #[inline(always)]
    pub fn has_start(&self) -> bool {
        self.has_start_codon != 0
    }

    #[inline(always)]
    pub fn has_stop(&self) -> bool {
        self.has_stop_codon != 0
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelStatus {
    Ready,
}

/// Fixed metrics reported by the training stub.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainingMetrics {
    pub train_accuracy: f64,
    pub test_accuracy: f64,
    pub feature_count: usize,
    pub status: ModelStatus,
}

/// Flattened subset of [`AnalysisResult`] used for CSV export. Field order
/// is the column order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub sequence_length: usize,
    pub prediction: Prediction,
    pub confidence: f64,
    pub gc_content: f64,
    pub donor_sites: usize,
    pub acceptor_sites: usize,
    pub has_start_codon: u8,
    pub has_stop_codon: u8,
}

impl From<&AnalysisResult> for SummaryRow {
    fn from(result: &AnalysisResult) -> Self {
        Self {
            sequence_length: result.length,
            prediction: result.overall_prediction,
            confidence: result.overall_confidence,
            gc_content: result.gc_content,
            donor_sites: result.donor_site_count,
            acceptor_sites: result.acceptor_site_count,
            has_start_codon: result.has_start_codon,
            has_stop_codon: result.has_stop_codon,
        }
    }
}
