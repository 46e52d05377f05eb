//! Loading a [`DnaSet`] from FASTA/FASTQ or one-sequence-per-line text.
//!
//! FASTA and FASTQ input is parsed with needletail; anything that does not
//! start with a record header is read as plain text, one sequence per line.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use cyanea_core::{CyaneaError, Result};
use needletail::parse_fastx_reader;

use crate::dna::DnaSet;

/// Read sequences from `reader`.
///
/// Leading blank lines are skipped. If the first byte is `>` or `@` the
/// input is parsed as FASTA/FASTQ and each record becomes one sequence.
/// Otherwise every non-blank line is its own sequence, with surrounding
/// whitespace ignored.
///
/// # Errors
///
/// Returns an error on I/O failure, malformed FASTA/FASTQ, if no sequence is
/// found, or if a sequence is empty or contains a byte outside `ACGT`.
pub fn read_dna_set<R: BufRead + Send>(mut reader: R) -> Result<DnaSet> {
    let sequences = match first_byte(&mut reader)? {
        None => Vec::new(),
        Some(b'>') | Some(b'@') => read_fastx(reader)?,
        Some(_) => read_lines(reader)?,
    };

    if sequences.is_empty() {
        return Err(CyaneaError::Parse("no sequences found".into()));
    }
    DnaSet::new(sequences)
}

/// Read sequences from the file at `path`. See [`read_dna_set`].
pub fn read_dna_set_file(path: impl AsRef<Path>) -> Result<DnaSet> {
    let file = File::open(path.as_ref())?;
    read_dna_set(BufReader::new(file))
}

/// Skip leading whitespace and peek at the first byte left.
fn first_byte<R: BufRead>(reader: &mut R) -> Result<Option<u8>> {
    loop {
        let (skip, first) = {
            let buf = reader.fill_buf()?;
            if buf.is_empty() {
                return Ok(None);
            }
            let skip = buf.iter().take_while(|b| b.is_ascii_whitespace()).count();
            (skip, buf.get(skip).copied())
        };
        reader.consume(skip);
        if first.is_some() {
            return Ok(first);
        }
    }
}

fn read_fastx<R: BufRead + Send>(reader: R) -> Result<Vec<Vec<u8>>> {
    let mut fastx = parse_fastx_reader(reader).map_err(|e| CyaneaError::Parse(e.to_string()))?;
    let mut sequences = Vec::new();
    while let Some(record) = fastx.next() {
        let record = record.map_err(|e| CyaneaError::Parse(e.to_string()))?;
        sequences.push(record.seq().into_owned());
    }
    Ok(sequences)
}

fn read_lines<R: BufRead>(reader: R) -> Result<Vec<Vec<u8>>> {
    let mut sequences = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            sequences.push(line.as_bytes().to_vec());
        }
    }
    Ok(sequences)
}
