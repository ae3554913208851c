//! Reading raw sequence text from files and streams.
//!
//! Plain text and FASTA are both accepted. Header (`>`) and comment (`;`)
//! lines are skipped so their letters never reach the classifier, and only
//! the first FASTA record is read.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::SplicescanError;

pub fn read_sequence<R: BufRead>(reader: R) -> Result<String, SplicescanError> {
    let mut ret = String::new();
    let mut seen_header = false;
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.starts_with('>') {
            if seen_header || !ret.is_empty() {
                break;
            }
            seen_header = true;
            continue;
        }
        if line.starts_with(';') {
            continue;
        }
        ret.push_str(line);
    }
    if ret.is_empty() {
        return Err(SplicescanError::Empty);
    }
    Ok(ret)
}

pub fn read_sequence_file<P: AsRef<Path>>(path: P) -> Result<String, SplicescanError> {
    let file = File::open(path)?;
    read_sequence(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn test_plain_lines_are_joined() {
        let text = "ACGT\nacgt \n\nGGCC\n";
        assert_eq!(read_sequence(Cursor::new(text)).unwrap(), "ACGTacgtGGCC");
    }

    #[test]
    fn test_fasta_first_record_only() {
        let text = ">seq1 TAG GATA\nACGT\n; a comment\nTTTT\n>seq2\nGGGG\n";
        assert_eq!(read_sequence(Cursor::new(text)).unwrap(), "ACGTTTTT");
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            read_sequence(Cursor::new(">only a header\n")),
            Err(SplicescanError::Empty)
        ));
        assert!(matches!(
            read_sequence(Cursor::new("")),
            Err(SplicescanError::Empty)
        ));
    }

    #[test]
    fn test_read_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, ">insulin").unwrap();
        writeln!(file, "{}", "GTAC".repeat(20)).unwrap();
        let seq = read_sequence_file(file.path()).unwrap();
        assert_eq!(seq.len(), 80);
        assert!(read_sequence_file("/nonexistent/splicescan.fa").is_err());
    }
}
