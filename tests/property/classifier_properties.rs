use proptest::prelude::*;
use splicescan::protocol::Prediction;
use splicescan::sequence::normalize;
use splicescan::{AnalysisError, HeuristicClassifier};

fn motif_positions(seq: &[u8], motif: &[u8]) -> Vec<usize> {
    seq.windows(2)
        .enumerate()
        .filter(|(_, w)| *w == motif)
        .map(|(i, _)| i)
        .collect()
}

proptest! {
    #[test]
    fn short_input_is_rejected(seq in "[ACGT]{0,49}", noise in "[Nn \n0-9]{0,40}") {
        let raw = format!("{seq}{noise}");
        prop_assert_eq!(
            HeuristicClassifier::new().analyze(&raw),
            Err(AnalysisError::TooShort)
        );
    }

    #[test]
    fn gc_content_matches_counts(seq in "[ACGT]{50,300}") {
        let result = HeuristicClassifier::new().analyze(&seq).unwrap();
        let gc = seq.bytes().filter(|&b| b == b'G' || b == b'C').count();
        let expected = gc as f64 / seq.len() as f64 * 100.0;
        prop_assert!((0.0..=100.0).contains(&result.gc_content));
        prop_assert_eq!(result.gc_content, expected);
        prop_assert_eq!(result.length, seq.len());
    }

    #[test]
    fn sites_are_every_motif_start(seq in "[ACGT]{50,300}") {
        let result = HeuristicClassifier::new().analyze(&seq).unwrap();
        let junctions = &result.splice_junctions;
        let donors = motif_positions(seq.as_bytes(), b"GT");
        let acceptors = motif_positions(seq.as_bytes(), b"AG");
        prop_assert_eq!(junctions.total_donors, donors.len());
        prop_assert_eq!(junctions.total_acceptors, acceptors.len());
        let listed: Vec<usize> = junctions.donor_sites.iter().map(|s| s.position).collect();
        prop_assert_eq!(&listed[..], &donors[..donors.len().min(10)]);
        let listed: Vec<usize> = junctions.acceptor_sites.iter().map(|s| s.position).collect();
        prop_assert_eq!(&listed[..], &acceptors[..acceptors.len().min(10)]);
        for site in junctions.donor_sites.iter().chain(junctions.acceptor_sites.iter()) {
            prop_assert!(site.context.len() <= 8);
            let from = site.position.saturating_sub(3);
            prop_assert_eq!(&seq[from..from + site.context.len()], site.context.as_str());
        }
    }

    #[test]
    fn boundaries_respect_pairing_rules(seq in "[ACGT]{50,300}") {
        let result = HeuristicClassifier::new().analyze(&seq).unwrap();
        let junctions = &result.splice_junctions;
        let donors = motif_positions(seq.as_bytes(), b"GT");
        let acceptors = motif_positions(seq.as_bytes(), b"AG");
        prop_assert!(junctions.intron_boundaries.len() <= 5);
        for b in &junctions.intron_boundaries {
            prop_assert_eq!(b.distance, b.acceptor_position - b.donor_position);
            prop_assert!(b.acceptor_position > b.donor_position + 10);
            prop_assert!(donors.iter().take(10).any(|&d| d == b.donor_position));
            prop_assert!(acceptors.iter().take(10).any(|&a| a == b.acceptor_position));
        }
    }

    #[test]
    fn probabilities_keep_baseline(seq in "[ACGT]{50,200}") {
        let result = HeuristicClassifier::new().analyze(&seq).unwrap();
        for (class, value) in result.class_probabilities.entries() {
            if class == result.overall_prediction {
                prop_assert_eq!(value, result.overall_confidence);
            } else {
                prop_assert_eq!(value, 25.0);
            }
        }
        prop_assert_eq!(result.exon_count, (result.overall_prediction == Prediction::Exon) as usize);
        prop_assert_eq!(result.intron_count, (result.overall_prediction == Prediction::Intron) as usize);
    }

    #[test]
    fn analysis_is_deterministic_and_case_blind(seq in "[ACGTacgtn \n]{50,200}") {
        let classifier = HeuristicClassifier::new();
        let first = classifier.analyze(&seq);
        prop_assert_eq!(&first, &classifier.analyze(&seq));
        prop_assert_eq!(&first, &classifier.analyze(&normalize(&seq)));
    }
}
