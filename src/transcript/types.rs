//! Transcript data model: one transcript record and its exons.

use crate::strand::Strand;

/// A single exon.
///
/// `start` is exclusive and `end` inclusive, so the exon covers the 1-based
/// bases `start + 1 ..= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exon {
    pub index: u16, // 1-based, in transcript order
    pub start: i32,
    pub end: i32,
}

impl Exon {
    #[must_use]
    pub fn length(&self) -> i32 {
        self.end - self.start
    }

    #[must_use]
    pub fn contains(&self, pos: i32) -> bool {
        self.start < pos && pos <= self.end
    }

    /// Boundary base facing the next exon in transcript order, as used by
    /// the region classifier: the last base on the forward strand, the base
    /// just before the exon on the reverse strand.
    #[must_use]
    pub(crate) fn downstream_boundary(&self, strand: Strand) -> i32 {
        if strand.is_reverse() {
            self.start
        } else {
            self.end
        }
    }
}

/// A transcript built from one database record.
///
/// Exons are kept in transcript order (5' to 3'), which is ascending genomic
/// order on the forward strand and descending on the reverse strand.
/// `coding_start_genomic` and `coding_end_genomic` are the 5' and 3' ends of
/// the coding region in transcript orientation, so on the reverse strand the
/// start is the larger coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub id: String,
    pub gene_symbol: String,
    pub chromosome: String,
    pub strand: Strand,
    pub transcript_start: i32,
    pub transcript_end: i32,
    pub coding_start: i32,
    pub coding_start_genomic: i32,
    pub coding_end_genomic: i32,
    pub exons: Vec<Exon>,
}

impl Transcript {
    /// Whether `pos` lies within the transcript bounds (`start < pos <= end`).
    #[must_use]
    pub fn contains(&self, pos: i32) -> bool {
        self.transcript_start < pos && pos <= self.transcript_end
    }
}
