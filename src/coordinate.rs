//! Genomic to CSN (c.) coordinate transformation.

use std::fmt;

use crate::error::Error;
use crate::transcript::Transcript;
use crate::variant::Variant;

/// Main part of a CSN coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodingPosition {
    /// Position relative to the coding start: positive in the coding region
    /// (and its introns), negative in the 5' UTR.
    Cds(i32),
    /// Distance past the coding end, rendered with a leading `*`.
    ThreePrimeUtr(i32),
}

impl fmt::Display for CodingPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cds(n) => write!(f, "{n}"),
            Self::ThreePrimeUtr(n) => write!(f, "*{n}"),
        }
    }
}

/// A CSN coordinate: main position plus a signed intronic offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsnCoordinate {
    pub main: CodingPosition,
    pub offset: i32,
}

impl CsnCoordinate {
    #[must_use]
    pub fn exonic(main: CodingPosition) -> Self {
        Self { main, offset: 0 }
    }

    fn fmt_body(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.main)?;
        match self.offset {
            0 => Ok(()),
            n if n > 0 => write!(f, "+{n}"),
            n => write!(f, "{n}"),
        }
    }
}

impl fmt::Display for CsnCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c.")?;
        self.fmt_body(f)
    }
}

/// Coordinates of a variant's two endpoints, 5' to 3' in transcript orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsnSpan {
    pub first: CsnCoordinate,
    pub second: CsnCoordinate,
}

impl fmt::Display for CsnSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first)?;
        if self.first != self.second {
            write!(f, "_")?;
            self.second.fmt_body(f)?;
        }
        Ok(())
    }
}

/// Map a genomic position to a CSN coordinate on `transcript`.
///
/// Intronic positions are anchored on the nearer flanking exon base. The
/// midpoint uses floor division; the first half of an intron, including the
/// midpoint itself on the forward strand, belongs to the upstream exon.
pub fn transform_to_csn(pos: i32, transcript: &Transcript) -> Result<CsnCoordinate, Error> {
    if transcript.is_in_utr(pos) {
        return Ok(utr_coordinate(pos, transcript));
    }

    let reverse = transcript.strand.is_reverse();
    let mut sum_of_exon_lengths = 1 - transcript.coding_start;
    // Last exonic base of the previous exon facing the current one
    let mut prev_exon_end: Option<i32> = None;

    for exon in &transcript.exons {
        if let Some(prev) = prev_exon_end {
            if !reverse && prev < pos && pos < exon.start + 1 {
                return if pos <= (exon.start + 1 - prev) / 2 + prev {
                    anchored(prev, pos - prev, transcript)
                } else {
                    anchored(exon.start + 1, pos - exon.start - 1, transcript)
                };
            }
            if reverse && exon.end < pos && pos < prev {
                return if pos >= (prev - exon.end + 1) / 2 + exon.end {
                    anchored(prev, prev - pos, transcript)
                } else {
                    anchored(exon.end, exon.end - pos, transcript)
                };
            }
        }

        if exon.contains(pos) {
            let main = if reverse {
                sum_of_exon_lengths + exon.end - pos + 1
            } else {
                sum_of_exon_lengths + pos - exon.start
            };
            return Ok(CsnCoordinate::exonic(CodingPosition::Cds(main)));
        }

        sum_of_exon_lengths += exon.length();
        prev_exon_end = Some(if reverse { exon.start + 1 } else { exon.end });
    }

    Err(Error::Unmapped(format!(
        "{}:{pos} lies in the coding span of {} but in no exon or intron",
        transcript.chromosome, transcript.id
    )))
}

/// CSN coordinates of both variant endpoints in transcript orientation.
pub fn transform_variant_to_csn(variant: &Variant, transcript: &Transcript) -> Result<CsnSpan, Error> {
    let (a, b) = variant.endpoints();
    let first = transform_to_csn(a, transcript)?;
    let second = transform_to_csn(b, transcript)?;
    Ok(if transcript.strand.is_reverse() {
        CsnSpan {
            first: second,
            second: first,
        }
    } else {
        CsnSpan { first, second }
    })
}

// Boundary bases are exonic, so this recurses at most once.
fn anchored(boundary: i32, offset: i32, transcript: &Transcript) -> Result<CsnCoordinate, Error> {
    let anchor = transform_to_csn(boundary, transcript)?;
    Ok(CsnCoordinate {
        main: anchor.main,
        offset,
    })
}

fn utr_coordinate(pos: i32, transcript: &Transcript) -> CsnCoordinate {
    let start = transcript.coding_start_genomic;
    let end = transcript.coding_end_genomic;
    let main = if transcript.strand.is_reverse() {
        if pos > start {
            CodingPosition::Cds(start - pos)
        } else {
            CodingPosition::ThreePrimeUtr(end - pos)
        }
    } else if pos < start {
        CodingPosition::Cds(pos - start)
    } else {
        CodingPosition::ThreePrimeUtr(pos - end)
    };
    CsnCoordinate::exonic(main)
}
