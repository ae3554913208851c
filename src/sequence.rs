//! Sequence cleanup and display helpers.

use std::collections::BTreeSet;

use crate::error::SplicescanError;

/// Shortest normalized sequence the classifier accepts.
pub const MIN_SEQUENCE_LENGTH: usize = 50;
pub const PREVIEW_LENGTH: usize = 100;
pub const DEFAULT_LINE_WIDTH: usize = 80;

/// Uppercase and keep only A, C, G and T. Everything else, including `N`
/// and whitespace, is dropped without complaint.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(|c| matches!(c, 'A' | 'C' | 'G' | 'T'))
        .collect()
}

#[inline(always)]
pub fn is_accepted_letter(letter: char) -> bool {
    matches!(letter, 'A' | 'C' | 'G' | 'T' | 'N')
}

/// Front-end style pre-check: uppercase, strip whitespace, and reject any
/// symbol outside A, C, G, T, N. Returns the cleaned string, which may
/// still contain `N`.
pub fn validate_alphabet(raw: &str) -> Result<String, SplicescanError> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect();
    let invalid: BTreeSet<char> = cleaned
        .chars()
        .filter(|&c| !is_accepted_letter(c))
        .collect();
    if !invalid.is_empty() {
        let listed: String = invalid.into_iter().collect();
        return Err(SplicescanError::InvalidCharacters(listed));
    }
    Ok(cleaned)
}

/// First [`PREVIEW_LENGTH`] bases, with "..." appended when cut.
pub fn preview(sequence: &str) -> String {
    match sequence.get(..PREVIEW_LENGTH) {
        Some(head) if sequence.len() > PREVIEW_LENGTH => format!("{head}..."),
        _ => sequence.to_string(),
    }
}

/// Split into rows of `width` bases, each prefixed by its 0-based offset.
pub fn format_sequence(sequence: &str, width: usize) -> String {
    let width = width.max(1);
    sequence
        .as_bytes()
        .chunks(width)
        .enumerate()
        .map(|(row, chunk)| {
            format!(
                "{:5}  {}",
                row * width,
                String::from_utf8_lossy(chunk)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
