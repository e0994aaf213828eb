//! Transcript construction from tab-delimited database records.
//!
//! Record layout (tab-separated):
//!
//! | column | content                                  |
//! |--------|------------------------------------------|
//! | 0      | transcript identifier                    |
//! | 1      | gene symbol                              |
//! | 2, 3   | unused                                   |
//! | 4      | chromosome                               |
//! | 5      | strand (`1` or `-1`)                     |
//! | 6, 7   | transcript start (exclusive), end        |
//! | 8      | coding start offset within the cDNA      |
//! | 9, 10  | coding start and end (genomic)           |
//! | 11..   | exon start/end pairs in transcript order |

use std::str::FromStr;

use crate::error::Error;
use crate::strand::Strand;

use super::types::{Exon, Transcript};

/// Number of fixed columns preceding the exon coordinate pairs.
pub const LEADING_FIELDS: usize = 11;

/// Parse one database record into a transcript.
///
/// Any structural problem is an error: a transcript with missing exons would
/// produce wrong coordinates rather than no coordinates.
pub fn parse_record(line: &str) -> Result<Transcript, Error> {
    let line = line.trim_end_matches(['\n', '\r']);
    let fields: Vec<&str> = line.split('\t').collect();

    if fields.len() < LEADING_FIELDS {
        return Err(Error::Parse(format!(
            "expected at least {LEADING_FIELDS} tab-separated columns, got {}",
            fields.len()
        )));
    }

    let exon_fields = &fields[LEADING_FIELDS..];
    if exon_fields.is_empty() {
        return Err(Error::Parse(format!("transcript {} has no exons", fields[0])));
    }
    if exon_fields.len() % 2 != 0 {
        return Err(Error::Parse(format!(
            "transcript {} has an odd number of exon coordinates ({})",
            fields[0],
            exon_fields.len()
        )));
    }

    let strand: Strand = fields[5].parse()?;

    let exons = exon_fields
        .chunks_exact(2)
        .enumerate()
        .map(|(i, pair)| -> Result<Exon, Error> {
            Ok(Exon {
                index: u16::try_from(i + 1).map_err(|_| {
                    Error::Parse(format!("transcript {} has too many exons", fields[0]))
                })?,
                start: parse_coordinate(pair[0], "exon start")?,
                end: parse_coordinate(pair[1], "exon end")?,
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;

    let transcript = Transcript {
        id: fields[0].to_string(),
        gene_symbol: fields[1].to_string(),
        chromosome: fields[4].to_string(),
        strand,
        transcript_start: parse_coordinate(fields[6], "transcript start")?,
        transcript_end: parse_coordinate(fields[7], "transcript end")?,
        coding_start: parse_coordinate(fields[8], "coding start")?,
        coding_start_genomic: parse_coordinate(fields[9], "coding start (genomic)")?,
        coding_end_genomic: parse_coordinate(fields[10], "coding end (genomic)")?,
        exons,
    };

    validate(&transcript)?;
    Ok(transcript)
}

impl FromStr for Transcript {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_record(s)
    }
}

/// Check the exon invariants the classifiers rely on.
///
/// Exons must be non-empty intervals, indexed 1, 2, 3, ... and ordered 5' to
/// 3' in transcript orientation without overlapping.
pub fn validate(transcript: &Transcript) -> Result<(), Error> {
    let id = &transcript.id;

    match transcript.exons.first() {
        None => return Err(Error::Validation(format!("transcript {id} has no exons"))),
        Some(first) if first.index != 1 => {
            return Err(Error::Validation(format!(
                "transcript {id}: first exon has index {}, expected 1",
                first.index
            )));
        }
        Some(_) => {}
    }

    for exon in &transcript.exons {
        if exon.start >= exon.end {
            return Err(Error::Validation(format!(
                "transcript {id}: exon {} has start {} >= end {}",
                exon.index, exon.start, exon.end
            )));
        }
    }

    for pair in transcript.exons.windows(2) {
        let (prev, curr) = (&pair[0], &pair[1]);
        if curr.index != prev.index + 1 {
            return Err(Error::Validation(format!(
                "transcript {id}: exon index {} follows {}",
                curr.index, prev.index
            )));
        }
        let ordered = if transcript.strand.is_reverse() {
            curr.end <= prev.start
        } else {
            curr.start >= prev.end
        };
        if !ordered {
            return Err(Error::Validation(format!(
                "transcript {id}: exons {} and {} are not in transcript order for strand {}",
                prev.index, curr.index, transcript.strand
            )));
        }
    }

    Ok(())
}

fn parse_coordinate(field: &str, what: &str) -> Result<i32, Error> {
    field
        .trim()
        .parse()
        .map_err(|e| Error::Parse(format!("invalid {what} '{field}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_record() {
        let line = "ENST0001.1\tGENE1\tx\ty\t1\t1\t90\t400\t1\t101\t340\t100\t150\t300\t350\n";
        let t = parse_record(line).unwrap();

        assert_eq!(t.id, "ENST0001.1");
        assert_eq!(t.gene_symbol, "GENE1");
        assert_eq!(t.chromosome, "1");
        assert_eq!(t.strand, Strand::Forward);
        assert_eq!(t.transcript_start, 90);
        assert_eq!(t.transcript_end, 400);
        assert_eq!(t.coding_start, 1);
        assert_eq!(t.coding_start_genomic, 101);
        assert_eq!(t.coding_end_genomic, 340);
        assert_eq!(
            t.exons,
            vec![
                Exon { index: 1, start: 100, end: 150 },
                Exon { index: 2, start: 300, end: 350 },
            ]
        );
        assert_eq!(t.exons[1].length(), 50);
    }

    #[test]
    fn reverse_record_keeps_transcript_order() {
        let line = "ENST0002.1\tGENE2\tx\ty\tchr2\t-1\t90\t400\t1\t340\t101\t300\t350\t100\t150";
        let t: Transcript = line.parse().unwrap();

        assert_eq!(t.strand, Strand::Reverse);
        assert_eq!(t.exons[0], Exon { index: 1, start: 300, end: 350 });
        assert_eq!(t.exons[1], Exon { index: 2, start: 100, end: 150 });
    }

    #[test]
    fn too_few_fields() {
        let err = parse_record("ENST\tG\tx\ty\t1\t1\t90\t400").unwrap_err();
        assert!(err.to_string().contains("at least 11"));
    }

    #[test]
    fn no_exons() {
        let err = parse_record("ENST\tG\tx\ty\t1\t1\t90\t400\t1\t101\t340").unwrap_err();
        assert!(err.to_string().contains("no exons"));
    }

    #[test]
    fn odd_exon_list() {
        let err =
            parse_record("ENST\tG\tx\ty\t1\t1\t90\t400\t1\t101\t340\t100\t150\t300").unwrap_err();
        assert!(err.to_string().contains("odd number"));
    }

    #[test]
    fn non_numeric_coordinate() {
        let err =
            parse_record("ENST\tG\tx\ty\t1\t1\t90\t4x0\t1\t101\t340\t100\t150").unwrap_err();
        assert!(err.to_string().contains("transcript end"));
    }

    #[test]
    fn bad_strand() {
        assert!(parse_record("ENST\tG\tx\ty\t1\t+\t90\t400\t1\t101\t340\t100\t150").is_err());
    }

    #[test]
    fn exons_out_of_transcript_order() {
        // Forward strand listed descending
        let err = parse_record("ENST\tG\tx\ty\t1\t1\t90\t400\t1\t101\t340\t300\t350\t100\t150")
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));

        // Reverse strand listed ascending
        let err = parse_record("ENST\tG\tx\ty\t1\t-1\t90\t400\t1\t340\t101\t100\t150\t300\t350")
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn empty_exon_interval() {
        let err = parse_record("ENST\tG\tx\ty\t1\t1\t90\t400\t1\t101\t340\t150\t150").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn validate_rejects_bad_first_index() {
        let mut t = parse_record("ENST\tG\tx\ty\t1\t1\t90\t400\t1\t101\t340\t100\t150").unwrap();
        t.exons[0].index = 2;
        assert!(validate(&t).is_err());
    }
}
