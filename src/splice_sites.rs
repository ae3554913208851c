//! Donor (GT) and acceptor (AG) motif discovery and intron pairing.

use splicescan_protocol::{IntronBoundary, SpliceSite};

/// Bases of context kept on each side of a motif.
const SITE_CONTEXT_FLANK: usize = 3;
/// Only this many leading donors and acceptors take part in pairing.
pub const PAIRING_WINDOW: usize = 10;
/// An acceptor must lie strictly further than this past its donor.
pub const MIN_INTRON_DISTANCE: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SiteKind {
    Donor,
    Acceptor,
}

impl SiteKind {
    #[inline(always)]
    pub fn motif(&self) -> &'static [u8; 2] {
        match self {
            SiteKind::Donor => b"GT",
            SiteKind::Acceptor => b"AG",
        }
    }
}

/// Every position where the motif of `kind` starts, in ascending order.
pub fn find_sites(sequence: &[u8], kind: SiteKind) -> Vec<SpliceSite> {
    let motif = kind.motif();
    sequence
        .windows(motif.len())
        .enumerate()
        .filter(|(_, window)| *window == motif)
        .map(|(position, _)| SpliceSite {
            position,
            context: site_context(sequence, position, motif.len()),
        })
        .collect()
}

/// Flanked motif at `position`, clipped to the sequence bounds.
pub fn site_context(sequence: &[u8], position: usize, motif_len: usize) -> String {
    let from = position.saturating_sub(SITE_CONTEXT_FLANK).min(sequence.len());
    let to = sequence
        .len()
        .min(position.saturating_add(motif_len + SITE_CONTEXT_FLANK));
    String::from_utf8_lossy(&sequence[from..to.max(from)]).into_owned()
}

/// All donor/acceptor pairs among the first [`PAIRING_WINDOW`] of each list
/// where the acceptor lies more than [`MIN_INTRON_DISTANCE`] past the donor.
/// Donor order is outermost; no deduplication.
pub fn intron_boundaries(donors: &[SpliceSite], acceptors: &[SpliceSite]) -> Vec<IntronBoundary> {
    let mut ret = vec![];
    for donor in donors.iter().take(PAIRING_WINDOW) {
        for acceptor in acceptors.iter().take(PAIRING_WINDOW) {
            if acceptor.position > donor.position + MIN_INTRON_DISTANCE {
                ret.push(IntronBoundary {
                    donor_position: donor.position,
                    acceptor_position: acceptor.position,
                    distance: acceptor.position - donor.position,
                });
            }
        }
    }
    ret
}
