//! transcoord: strand-aware mapping of genomic positions and variants onto
//! transcript (CSN) coordinates, with exon/intron/UTR and splice-site
//! classification.

pub mod error;

pub mod annotation;
pub mod chromosome;
pub mod cli;
pub mod config;
pub mod coordinate;
pub mod database;
pub mod locator;
pub mod strand;
pub mod transcript;
pub mod variant;

pub use error::Error;
