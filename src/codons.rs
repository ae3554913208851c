//! Presence-only codon checks. Reading frame and position are ignored.

const START_CODON: [u8; 3] = *b"ATG";
const STOP_CODONS: [[u8; 3]; 3] = [*b"TAA", *b"TAG", *b"TGA"];

#[inline(always)]
pub fn is_start_codon(codon: &[u8]) -> bool {
    codon == START_CODON
}

#[inline(always)]
pub fn is_stop_codon(codon: &[u8]) -> bool {
    STOP_CODONS.iter().any(|stop| codon == stop)
}

/// True if "ATG" occurs anywhere in `sequence`.
pub fn has_start_codon(sequence: &[u8]) -> bool {
    sequence.windows(3).any(is_start_codon)
}

/// True if any of "TAA", "TAG" or "TGA" occurs anywhere in `sequence`.
pub fn has_stop_codon(sequence: &[u8]) -> bool {
    sequence.windows(3).any(is_stop_codon)
}
