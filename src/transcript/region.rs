//! Region classification: UTR, exon, or intron for a position or variant.

use std::fmt;

use crate::variant::Variant;

use super::types::Transcript;

/// Introns at most this long are labelled with the `fs` prefix.
pub const SHORT_INTRON_MAX: i32 = 5;

/// Structural location of a single genomic position within a transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    FivePrimeUtr,
    ThreePrimeUtr,
    Exon(u16),
    /// Intron following exon `upstream`. `short` marks introns of at most
    /// five bases, which are usually annotation artifacts.
    Intron { upstream: u16, short: bool },
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FivePrimeUtr => write!(f, "5UTR"),
            Self::ThreePrimeUtr => write!(f, "3UTR"),
            Self::Exon(index) => write!(f, "Ex{index}"),
            Self::Intron { upstream, short } => {
                let prefix = if *short { "fs" } else { "" };
                write!(f, "{prefix}In{upstream}/{}", upstream + 1)
            }
        }
    }
}

/// Location of a variant: one location, or the locations of its two
/// endpoints ordered 5' to 3' in transcript orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantLocation {
    Single(Location),
    Span(Location, Location),
}

impl fmt::Display for VariantLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(loc) => write!(f, "{loc}"),
            Self::Span(first, second) => write!(f, "{first}-{second}"),
        }
    }
}

impl Transcript {
    /// Whether `pos` lies before the coding start or after the coding end in
    /// transcript orientation.
    #[must_use]
    pub fn is_in_utr(&self, pos: i32) -> bool {
        if self.strand.is_reverse() {
            pos > self.coding_start_genomic || pos < self.coding_end_genomic
        } else {
            pos < self.coding_start_genomic || pos > self.coding_end_genomic
        }
    }

    /// Whether the whole variant lies outside the translated region.
    #[must_use]
    pub fn is_outside_translated_region(&self, variant: &Variant) -> bool {
        self.is_outside_coding(variant, 0)
    }

    /// Like [`Self::is_outside_translated_region`] with both coding boundaries
    /// pulled inwards by three bases.
    #[must_use]
    pub fn is_outside_translated_region_plus3(&self, variant: &Variant) -> bool {
        self.is_outside_coding(variant, 3)
    }

    // Insertions test the interbase point: `pos` against the low bound and
    // `pos - 1` against the high bound.
    fn is_outside_coding(&self, variant: &Variant, margin: i32) -> bool {
        let (low, high) = if self.strand.is_reverse() {
            (self.coding_end_genomic, self.coding_start_genomic)
        } else {
            (self.coding_start_genomic, self.coding_end_genomic)
        };

        if variant.is_insertion() {
            variant.pos <= low + margin || variant.pos - 1 >= high - margin
        } else {
            variant.last_ref_pos() < low + margin || variant.pos > high - margin
        }
    }

    /// Classify a genomic position.
    ///
    /// Returns `None` only for a position inside the coding span that falls
    /// outside every exon and intron, which consistent data never produces.
    #[must_use]
    pub fn where_is_this_position(&self, pos: i32) -> Option<Location> {
        let reverse = self.strand.is_reverse();

        if (!reverse && pos < self.coding_start_genomic)
            || (reverse && pos > self.coding_start_genomic)
        {
            return Some(Location::FivePrimeUtr);
        }
        if (!reverse && pos > self.coding_end_genomic)
            || (reverse && pos < self.coding_end_genomic)
        {
            return Some(Location::ThreePrimeUtr);
        }

        let mut prev_boundary: Option<i32> = None;
        for exon in &self.exons {
            if let Some(prev) = prev_boundary {
                let intronic = if reverse {
                    exon.end < pos && pos <= prev
                } else {
                    prev < pos && pos <= exon.start
                };
                if intronic {
                    let short = self
                        .intron_length(exon.index)
                        .is_some_and(|len| len <= SHORT_INTRON_MAX);
                    return Some(Location::Intron {
                        upstream: exon.index - 1,
                        short,
                    });
                }
            }
            if exon.contains(pos) {
                return Some(Location::Exon(exon.index));
            }
            prev_boundary = Some(exon.downstream_boundary(self.strand));
        }

        None
    }

    /// Classify a variant by the locations of its two endpoints.
    #[must_use]
    pub fn where_is_this_variant(&self, variant: &Variant) -> Option<VariantLocation> {
        let (a, b) = variant.endpoints();
        let first = self.where_is_this_position(a)?;
        let second = self.where_is_this_position(b)?;

        if first == second {
            return Some(VariantLocation::Single(first));
        }
        Some(if self.strand.is_reverse() {
            VariantLocation::Span(second, first)
        } else {
            VariantLocation::Span(first, second)
        })
    }

    /// Length of the intron preceding exon `index`.
    ///
    /// `None` for the first exon or an unknown index.
    #[must_use]
    pub fn intron_length(&self, index: u16) -> Option<i32> {
        let mut prev_boundary: Option<i32> = None;
        for exon in &self.exons {
            if exon.index == index {
                let prev = prev_boundary?;
                return Some(if self.strand.is_reverse() {
                    prev - exon.end
                } else {
                    exon.start - prev
                });
            }
            prev_boundary = Some(exon.downstream_boundary(self.strand));
        }
        None
    }
}
