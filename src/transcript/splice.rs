//! Splice-site classification of variants against a transcript's exons.
//!
//! Every check returns false for variants entirely outside the translated
//! region. Windows are expressed in genomic coordinates using the exon's
//! exclusive start and inclusive end.

use crate::variant::Variant;

use super::types::Transcript;

/// Default size of the extended splicing region on each side of an exon.
pub const DEFAULT_SPLICE_REGION_WINDOW: i32 = 8;

impl Transcript {
    /// Whether the variant overlaps `window` intronic bases on either side of
    /// any exon. The window is symmetric in genomic space.
    #[must_use]
    pub fn is_in_splicing_region(&self, variant: &Variant, window: i32) -> bool {
        if self.is_outside_translated_region(variant) {
            return false;
        }
        self.exons.iter().any(|exon| {
            variant.overlap(exon.end + 1, exon.end + window)
                || variant.overlap(exon.start - (window - 1), exon.start)
        })
    }

    /// Whether the variant touches one of the two canonical intronic bases
    /// flanking any exon.
    #[must_use]
    pub fn is_in_essential_splice_site(&self, variant: &Variant) -> bool {
        if self.is_outside_translated_region(variant) {
            return false;
        }
        self.exons.iter().any(|exon| {
            variant.overlap(exon.end + 1, exon.end + 2) || variant.overlap(exon.start - 1, exon.start)
        })
    }

    /// Whether the variant hits the +5 donor position.
    ///
    /// Within the first five intronic bases downstream of an exon (transcript
    /// orientation), SNPs only count at the fifth base. Other variants count
    /// anywhere in the window, except a two-base substitution starting at the
    /// third base.
    #[must_use]
    pub fn is_in_ss5_site(&self, variant: &Variant) -> bool {
        if self.is_outside_translated_region(variant) {
            return false;
        }

        let two_for_two = variant.ref_allele.len() == 2 && variant.alt_allele.len() == 2;
        self.exons.iter().any(|exon| {
            let (window_start, window_end, mnp_excluded_at, snp_at) = if self.strand.is_reverse() {
                (exon.start - 4, exon.start, exon.start - 3, exon.start - 4)
            } else {
                (exon.end + 1, exon.end + 5, exon.end + 3, exon.end + 5)
            };

            if !variant.overlap(window_start, window_end) {
                return false;
            }
            if variant.is_snp() {
                variant.pos == snp_at
            } else {
                !(variant.pos == mnp_excluded_at && two_for_two)
            }
        })
    }

    /// Whether the variant overlaps the first or last three bases of any exon.
    ///
    /// Gated on the translated region shrunk by three bases at each end.
    #[must_use]
    pub fn is_in_first_or_last_3_bases_of_exon(&self, variant: &Variant) -> bool {
        if self.is_outside_translated_region_plus3(variant) {
            return false;
        }
        self.exons.iter().any(|exon| {
            variant.overlap(exon.start + 1, exon.start + 3) || variant.overlap(exon.end - 2, exon.end)
        })
    }
}
