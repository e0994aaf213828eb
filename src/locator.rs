//! Transcript lookup by genomic position.

use indexmap::IndexMap;

use crate::chromosome::resolve_contig;
use crate::coordinate::transform_to_csn;
use crate::database::{GenomicRegion, TranscriptDatabase};
use crate::error::Error;
use crate::transcript::{Transcript, parse_record};

/// Transcripts whose bounds contain `pos`, keyed by identifier in the order
/// the database returned them.
///
/// The chromosome name is tried literally, with a "chr" prefix, and without
/// one. An unknown chromosome yields an empty map.
pub fn find_transcripts<D: TranscriptDatabase + ?Sized>(
    db: &D,
    chrom: &str,
    pos: i32,
) -> Result<IndexMap<String, Transcript>, Error> {
    let mut found = IndexMap::new();

    let Some(contig) = resolve_contig(chrom, db.contigs()) else {
        return Ok(found);
    };

    for line in db.fetch(&GenomicRegion::point(contig, pos))? {
        let transcript = parse_record(&line)?;
        if !transcript.contains(pos) {
            continue;
        }
        found.insert(transcript.id.clone(), transcript);
    }

    Ok(found)
}

/// CSN coordinate strings (`c.45+3`, `c.-12`, `c.*7`) of `pos` on every
/// transcript covering it, in discovery order.
pub fn get_transcript_coordinates<D: TranscriptDatabase + ?Sized>(
    db: &D,
    chrom: &str,
    pos: i32,
) -> Result<IndexMap<String, String>, Error> {
    find_transcripts(db, chrom, pos)?
        .into_iter()
        .map(|(id, transcript)| -> Result<(String, String), Error> {
            Ok((id, transform_to_csn(pos, &transcript)?.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    /// Returns canned records per contig regardless of the queried range.
    struct FixedDatabase {
        contigs: HashSet<String>,
        records: HashMap<String, Vec<String>>,
    }

    impl FixedDatabase {
        fn new(contig: &str, records: &[&str]) -> Self {
            Self {
                contigs: [contig.to_string()].into_iter().collect(),
                records: [(
                    contig.to_string(),
                    records.iter().map(|r| r.to_string()).collect(),
                )]
                .into_iter()
                .collect(),
            }
        }
    }

    impl TranscriptDatabase for FixedDatabase {
        fn contigs(&self) -> &HashSet<String> {
            &self.contigs
        }

        fn fetch(&self, region: &GenomicRegion) -> Result<Vec<String>, Error> {
            Ok(self.records.get(&region.chrom).cloned().unwrap_or_default())
        }
    }

    const TX_B: &str = "ENSTB\tB\tx\ty\t7\t1\t90\t400\t1\t101\t340\t100\t150\t300\t350";
    const TX_A: &str = "ENSTA\tA\tx\ty\t7\t-1\t90\t400\t11\t340\t101\t300\t350\t100\t150";
    const TX_SHORT: &str = "ENSTC\tC\tx\ty\t7\t1\t90\t120\t1\t101\t110\t100\t120";

    #[test]
    fn chr_prefix_resolution() {
        for contig in ["7", "chr7"] {
            let db = FixedDatabase::new(contig, &[TX_B]);
            let found = find_transcripts(&db, "chr7", 120).unwrap();
            assert_eq!(found.len(), 1, "contig {contig}");
            assert!(found.contains_key("ENSTB"));
        }

        let db = FixedDatabase::new("chr7", &[TX_B]);
        assert_eq!(find_transcripts(&db, "7", 120).unwrap().len(), 1);
    }

    #[test]
    fn unknown_chromosome_is_empty() {
        let db = FixedDatabase::new("7", &[TX_B]);
        assert!(find_transcripts(&db, "8", 120).unwrap().is_empty());
        assert!(get_transcript_coordinates(&db, "chrX", 120).unwrap().is_empty());
    }

    #[test]
    fn bounds_filter() {
        let db = FixedDatabase::new("7", &[TX_B, TX_SHORT]);
        assert_eq!(find_transcripts(&db, "7", 120).unwrap().len(), 2);
        let found = find_transcripts(&db, "7", 121).unwrap();
        assert_eq!(found.keys().collect::<Vec<_>>(), vec!["ENSTB"]);

        // Transcript start is exclusive
        assert!(find_transcripts(&db, "7", 90).unwrap().is_empty());
        assert_eq!(find_transcripts(&db, "7", 91).unwrap().len(), 2);
    }

    #[test]
    fn coordinates_keep_discovery_order() {
        let db = FixedDatabase::new("7", &[TX_B, TX_A]);
        let coords = get_transcript_coordinates(&db, "7", 151).unwrap();
        let pairs: Vec<(&str, &str)> = coords.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(pairs, vec![("ENSTB", "c.50+1"), ("ENSTA", "c.41-1")]);
    }

    #[test]
    fn malformed_record_is_fatal() {
        let db = FixedDatabase::new("7", &[TX_B, "ENSTX\tX\tx\ty\t7\t1\t90"]);
        assert!(find_transcripts(&db, "7", 120).is_err());
    }
}
