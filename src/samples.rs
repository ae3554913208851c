//! Bundled sample sequences.

use serde::Deserialize;

use crate::error::SplicescanError;

const BUILTIN_SAMPLES_JSON: &str = include_str!("../assets/sample_sequences.json");

#[derive(Debug, Clone, Deserialize)]
struct SampleSnapshot {
    schema: String,
    samples: Vec<Sample>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Sample {
    pub name: String,
    pub sequence: String,
}

#[derive(Debug, Clone, Default)]
pub struct Samples {
    samples: Vec<Sample>,
}

impl Samples {
    pub fn load() -> Self {
        let snapshot: SampleSnapshot =
            serde_json::from_str(BUILTIN_SAMPLES_JSON).expect("Invalid sample JSON");
        log::debug!(
            "Loaded {} samples ({})",
            snapshot.samples.len(),
            snapshot.schema
        );
        Self {
            samples: snapshot.samples,
        }
    }

    #[inline(always)]
    pub fn all(&self) -> &[Sample] {
        &self.samples
    }

    /// Case-insensitive lookup by name.
    pub fn get(&self, name: &str) -> Option<&Sample> {
        let name = name.trim();
        self.samples
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
    }

    pub fn sequence(&self, name: &str) -> Result<&str, SplicescanError> {
        self.get(name)
            .map(|s| s.sequence.as_str())
            .ok_or_else(|| SplicescanError::UnknownSample(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use crate::{SAMPLES, classifier::HeuristicClassifier};
    use splicescan_protocol::Prediction;

    #[test]
    fn test_builtin_samples() {
        let names: Vec<&str> = SAMPLES.all().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Human BRCA1 Exon",
                "Mouse Insulin Intron",
                "HIV-1 Donor Site",
                "E. coli Promoter"
            ]
        );
        assert_eq!(SAMPLES.get("e. COLI promoter").unwrap().sequence.len(), 303);
        assert!(SAMPLES.sequence("Yeast").is_err());
    }

    #[test]
    fn test_sample_classification() {
        let classifier = HeuristicClassifier::new();
        let expect = [
            ("Human BRCA1 Exon", Prediction::AcceptorSite, 36, 51),
            ("Mouse Insulin Intron", Prediction::Exon, 15, 24),
            ("HIV-1 Donor Site", Prediction::AcceptorSite, 17, 62),
            ("E. coli Promoter", Prediction::Exon, 13, 15),
        ];
        for (name, prediction, donors, acceptors) in expect {
            let result = classifier.analyze(SAMPLES.sequence(name).unwrap()).unwrap();
            assert_eq!(result.overall_prediction, prediction, "{name}");
            assert_eq!(result.donor_site_count, donors, "{name}");
            assert_eq!(result.acceptor_site_count, acceptors, "{name}");
        }
    }

    #[test]
    fn test_brca1_junctions() {
        let result = HeuristicClassifier::new()
            .analyze(SAMPLES.sequence("Human BRCA1 Exon").unwrap())
            .unwrap();
        let junctions = &result.splice_junctions;
        assert_eq!(junctions.donor_sites[0].position, 21);
        assert_eq!(junctions.donor_sites[0].context, "CGCGTTGA");
        assert_eq!(junctions.donor_sites[1].context, "GAAGTACA");
        assert_eq!(junctions.intron_boundaries[0].donor_position, 21);
        assert_eq!(junctions.intron_boundaries[0].acceptor_position, 55);
        assert_eq!(junctions.intron_boundaries[1].distance, 44);
        assert!((result.gc_content - 39.77110157367668).abs() < 1e-9);
    }
}
