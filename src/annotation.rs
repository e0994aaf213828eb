//! Per-transcript annotation of a variant: location, CSN coordinates and
//! splice-site flags.

use crate::coordinate::{CsnSpan, transform_variant_to_csn};
use crate::database::TranscriptDatabase;
use crate::error::Error;
use crate::locator::find_transcripts;
use crate::strand::Strand;
use crate::transcript::{Transcript, VariantLocation};
use crate::variant::{Variant, VariantClass};

/// Column names of [`TranscriptAnnotation::to_tsv_fields`].
pub const TSV_HEADER: [&str; 10] = [
    "class",
    "transcript",
    "gene",
    "strand",
    "location",
    "csn",
    "essential_splice_site",
    "ss5",
    "splicing_region",
    "first_or_last_3_bases",
];

/// Annotation of one variant against one transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptAnnotation {
    pub variant_class: VariantClass,
    pub transcript_id: String,
    pub gene_symbol: String,
    pub strand: Strand,
    pub location: VariantLocation,
    pub coordinates: CsnSpan,
    pub essential_splice_site: bool,
    pub ss5: bool,
    pub splicing_region: bool,
    pub first_or_last_3_bases: bool,
}

impl TranscriptAnnotation {
    /// Annotate `variant` against a single transcript.
    pub fn new(
        transcript: &Transcript,
        variant: &Variant,
        splice_window: i32,
    ) -> Result<Self, Error> {
        let location = transcript.where_is_this_variant(variant).ok_or_else(|| {
            Error::Unmapped(format!(
                "variant {variant} has no location on {}",
                transcript.id
            ))
        })?;

        Ok(Self {
            variant_class: variant.class(),
            transcript_id: transcript.id.clone(),
            gene_symbol: transcript.gene_symbol.clone(),
            strand: transcript.strand,
            location,
            coordinates: transform_variant_to_csn(variant, transcript)?,
            essential_splice_site: transcript.is_in_essential_splice_site(variant),
            ss5: transcript.is_in_ss5_site(variant),
            splicing_region: transcript.is_in_splicing_region(variant, splice_window),
            first_or_last_3_bases: transcript.is_in_first_or_last_3_bases_of_exon(variant),
        })
    }

    #[must_use]
    pub fn to_tsv_fields(&self) -> Vec<String> {
        let flag = |b: bool| String::from(if b { "yes" } else { "no" });
        vec![
            self.variant_class.to_string(),
            self.transcript_id.clone(),
            self.gene_symbol.clone(),
            self.strand.to_string(),
            self.location.to_string(),
            self.coordinates.to_string(),
            flag(self.essential_splice_site),
            flag(self.ss5),
            flag(self.splicing_region),
            flag(self.first_or_last_3_bases),
        ]
    }
}

/// Annotate a variant against every transcript covering its position.
///
/// Transcripts are looked up at `variant.pos`, which for an insertion is the
/// base after the insertion point.
pub fn annotate_variant<D: TranscriptDatabase + ?Sized>(
    db: &D,
    chrom: &str,
    variant: &Variant,
    splice_window: i32,
) -> Result<Vec<TranscriptAnnotation>, Error> {
    find_transcripts(db, chrom, variant.pos)?
        .values()
        .map(|transcript| TranscriptAnnotation::new(transcript, variant, splice_window))
        .collect()
}
