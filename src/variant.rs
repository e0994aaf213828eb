//! Variant descriptors: 1-based position plus reference and alternate alleles.

use std::fmt;

use crate::error::Error;

/// Broad class of a variant, derived from its allele lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantClass {
    Snp,
    Mnp,
    Insertion,
    Deletion,
    Complex,
}

impl fmt::Display for VariantClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Snp => "SNP",
            Self::Mnp => "MNP",
            Self::Insertion => "INS",
            Self::Deletion => "DEL",
            Self::Complex => "COMPLEX",
        };
        write!(f, "{name}")
    }
}

/// A simple genomic variant.
///
/// `pos` is the 1-based position of the first affected base. An insertion has
/// an empty reference allele and sits between `pos - 1` and `pos`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    pub pos: i32,
    pub ref_allele: String,
    pub alt_allele: String,
}

impl Variant {
    /// Build a variant from already-trimmed alleles.
    ///
    /// `-` and `.` denote an empty allele. Alleles are uppercased and may use
    /// any IUPAC letter; symbolic alleles such as `<DEL>` or `*` are rejected.
    pub fn new(pos: i32, ref_allele: &str, alt_allele: &str) -> Result<Self, Error> {
        if pos < 1 {
            return Err(Error::Parse(format!("variant position must be >= 1, got {pos}")));
        }
        let ref_allele = normalize_allele(ref_allele)?;
        let alt_allele = normalize_allele(alt_allele)?;
        if ref_allele.is_empty() && alt_allele.is_empty() {
            return Err(Error::Parse(format!(
                "variant at {pos} has empty reference and alternate alleles"
            )));
        }
        Ok(Self {
            pos,
            ref_allele,
            alt_allele,
        })
    }

    /// Build a variant from VCF-style alleles, trimming shared bases.
    ///
    /// The common suffix is removed first, then the common prefix; each removed
    /// leading base advances the position.
    pub fn from_vcf(pos: i32, ref_allele: &str, alt_allele: &str) -> Result<Self, Error> {
        let mut r = normalize_allele(ref_allele)?.into_bytes();
        let mut a = normalize_allele(alt_allele)?.into_bytes();

        while let (Some(x), Some(y)) = (r.last().copied(), a.last().copied()) {
            if x != y {
                break;
            }
            r.pop();
            a.pop();
        }

        let shared = r.iter().zip(a.iter()).take_while(|(x, y)| x == y).count();
        let r = String::from_utf8_lossy(&r[shared..]).into_owned();
        let a = String::from_utf8_lossy(&a[shared..]).into_owned();

        Self::new(pos + shared as i32, &r, &a)
    }

    #[must_use]
    pub fn is_insertion(&self) -> bool {
        self.ref_allele.is_empty() && !self.alt_allele.is_empty()
    }

    #[must_use]
    pub fn is_deletion(&self) -> bool {
        self.alt_allele.is_empty() && !self.ref_allele.is_empty()
    }

    #[must_use]
    pub fn is_snp(&self) -> bool {
        self.ref_allele.len() == 1 && self.alt_allele.len() == 1
    }

    /// Multi-nucleotide substitution of equal-length alleles.
    #[must_use]
    pub fn is_mnp(&self) -> bool {
        self.ref_allele.len() > 1 && self.ref_allele.len() == self.alt_allele.len()
    }

    #[must_use]
    pub fn class(&self) -> VariantClass {
        if self.is_snp() {
            VariantClass::Snp
        } else if self.is_mnp() {
            VariantClass::Mnp
        } else if self.is_insertion() {
            VariantClass::Insertion
        } else if self.is_deletion() {
            VariantClass::Deletion
        } else {
            VariantClass::Complex
        }
    }

    /// Last reference base touched; equals `pos - 1` for insertions.
    #[must_use]
    pub fn last_ref_pos(&self) -> i32 {
        self.pos + self.ref_allele.len() as i32 - 1
    }

    /// The two genomic endpoints used for location lookups.
    ///
    /// Insertions report the flanking bases `(pos - 1, pos)`.
    #[must_use]
    pub fn endpoints(&self) -> (i32, i32) {
        if self.is_insertion() {
            (self.pos - 1, self.pos)
        } else {
            (self.pos, self.last_ref_pos())
        }
    }

    /// Whether the variant intersects the inclusive genomic interval `[start, end]`.
    ///
    /// An insertion only overlaps when both flanking bases lie inside the interval.
    #[must_use]
    pub fn overlap(&self, start: i32, end: i32) -> bool {
        if self.is_insertion() {
            start <= self.pos - 1 && self.pos <= end
        } else {
            self.last_ref_pos() >= start && self.pos <= end
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |s: &str| if s.is_empty() { "-".to_string() } else { s.to_string() };
        write!(
            f,
            "{}:{}>{}",
            self.pos,
            show(&self.ref_allele),
            show(&self.alt_allele)
        )
    }
}

fn normalize_allele(allele: &str) -> Result<String, Error> {
    let allele = allele.trim();
    if allele == "-" || allele == "." {
        return Ok(String::new());
    }
    let upper = allele.to_ascii_uppercase();
    if let Some(c) = upper.chars().find(|c| !c.is_ascii_alphabetic()) {
        return Err(Error::Parse(format!(
            "invalid base '{c}' in allele '{allele}'"
        )));
    }
    Ok(upper)
}
