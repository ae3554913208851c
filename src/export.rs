//! JSON, CSV and plain-text renderings of an [`AnalysisResult`].

use splicescan_protocol::{AnalysisResult, SpliceSite, SummaryRow};
use std::fmt::Write as _;
use std::io;

use crate::error::SplicescanError;

pub fn to_json(result: &AnalysisResult) -> Result<String, SplicescanError> {
    Ok(result.to_json()?)
}

/// Write the one-row summary table, header included.
pub fn write_summary_csv<W: io::Write>(
    result: &AnalysisResult,
    writer: W,
) -> Result<(), SplicescanError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.serialize(SummaryRow::from(result))?;
    csv_writer.flush()?;
    Ok(())
}

pub fn summary_csv(result: &AnalysisResult) -> Result<String, SplicescanError> {
    let mut buffer = Vec::new();
    write_summary_csv(result, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn push_sites(out: &mut String, title: &str, sites: &[SpliceSite], total: usize) {
    let _ = writeln!(out, "{title} ({total} total, showing {})", sites.len());
    for site in sites {
        let _ = writeln!(out, "  {:>6}  {}", site.position, site.context);
    }
}

/// Human-readable report for terminals.
pub fn render_text(result: &AnalysisResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Sequence:   {}", result.sequence);
    let _ = writeln!(out, "Length:     {} bp", result.length);
    let _ = writeln!(
        out,
        "Prediction: {} ({:.1}%)",
        result.overall_prediction, result.overall_confidence
    );
    let _ = writeln!(out, "GC content: {:.2}%", result.gc_content);
    let _ = writeln!(
        out,
        "Codons:     start {}, stop {}",
        if result.has_start() { "yes" } else { "no" },
        if result.has_stop() { "yes" } else { "no" }
    );

    let _ = writeln!(out, "\nClass probabilities");
    for (class, value) in result.class_probabilities.entries() {
        let _ = writeln!(out, "  {:<14}{:>6.1}", class.as_str(), value);
    }

    let composition = &result.base_composition;
    let _ = writeln!(
        out,
        "\nBase composition\n  A {:.1}%  C {:.1}%  G {:.1}%  T {:.1}%",
        composition.a, composition.c, composition.g, composition.t
    );

    let junctions = &result.splice_junctions;
    out.push('\n');
    push_sites(
        &mut out,
        "Donor sites (GT)",
        &junctions.donor_sites,
        junctions.total_donors,
    );
    push_sites(
        &mut out,
        "Acceptor sites (AG)",
        &junctions.acceptor_sites,
        junctions.total_acceptors,
    );

    let _ = writeln!(out, "Intron candidates");
    if junctions.intron_boundaries.is_empty() {
        let _ = writeln!(out, "  none");
    }
    for boundary in &junctions.intron_boundaries {
        let _ = writeln!(
            out,
            "  GT {:>6} .. AG {:>6}  ({} bp)",
            boundary.donor_position, boundary.acceptor_position, boundary.distance
        );
    }
    out
}
