//! Transcript model plus the region and splice-site classifiers built on it.

pub mod construction;
pub mod region;
pub mod splice;
pub mod types;

pub use construction::parse_record;
pub use region::{Location, VariantLocation};
pub use types::{Exon, Transcript};
