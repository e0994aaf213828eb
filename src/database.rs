//! Transcript database access: region queries returning raw transcript records.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use flate2::read::MultiGzDecoder;

use crate::error::Error;

/// A 1-based inclusive genomic region, written `chrom:start-end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenomicRegion {
    pub chrom: String,
    pub start: i32,
    pub end: i32,
}

impl GenomicRegion {
    /// Single-base region at `pos`.
    #[must_use]
    pub fn point(chrom: &str, pos: i32) -> Self {
        Self {
            chrom: chrom.to_string(),
            start: pos,
            end: pos,
        }
    }

    /// The single position of a one-base region; wider regions are an error.
    pub fn as_position(&self) -> Result<i32, Error> {
        if self.start != self.end {
            return Err(Error::Parse(format!(
                "expected a single position, got range {self}"
            )));
        }
        Ok(self.start)
    }
}

impl FromStr for GenomicRegion {
    type Err = Error;

    /// Accepts `chrom:start-end` or `chrom:pos`. Commas in numbers are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (chrom, range) = s
            .rsplit_once(':')
            .ok_or_else(|| Error::Parse(format!("invalid region '{s}': expected chrom:start-end")))?;
        if chrom.is_empty() {
            return Err(Error::Parse(format!("invalid region '{s}': empty chromosome")));
        }

        let parse = |v: &str| -> Result<i32, Error> {
            v.replace(',', "")
                .parse()
                .map_err(|e| Error::Parse(format!("invalid region '{s}': {e}")))
        };
        let (start, end) = match range.split_once('-') {
            Some((a, b)) => (parse(a)?, parse(b)?),
            None => {
                let p = parse(range)?;
                (p, p)
            }
        };

        if start < 1 || end < start {
            return Err(Error::Parse(format!(
                "invalid region '{s}': need 1 <= start <= end"
            )));
        }

        Ok(Self {
            chrom: chrom.to_string(),
            start,
            end,
        })
    }
}

impl fmt::Display for GenomicRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.chrom, self.start, self.end)
    }
}

/// Positional lookup of raw transcript records.
pub trait TranscriptDatabase {
    /// Contig names the database knows.
    fn contigs(&self) -> &HashSet<String>;

    /// Raw records overlapping `region`.
    fn fetch(&self, region: &GenomicRegion) -> Result<Vec<String>, Error>;
}

#[derive(Debug)]
struct IndexedRecord {
    start: i32,
    end: i32,
    line: String,
}

/// A transcript database held fully in memory.
///
/// Records are grouped per contig (column 5) and kept sorted by transcript
/// start (column 7); lookups scan the records starting at or before the query end.
#[derive(Debug, Default)]
pub struct MemoryDatabase {
    contigs: HashSet<String>,
    records: HashMap<String, Vec<IndexedRecord>>,
}

impl MemoryDatabase {
    /// Load a database file. Paths ending in `.gz` are read as (b)gzip.
    pub fn open(path: &Path) -> Result<Self, Error> {
        let file = File::open(path)?;
        if path.extension().is_some_and(|ext| ext == "gz") {
            Self::from_reader(BufReader::new(MultiGzDecoder::new(file)))
        } else {
            Self::from_reader(BufReader::new(file))
        }
    }

    /// Build from a reader of tab-delimited records.
    ///
    /// Blank lines and `#` comments are skipped. Only the columns needed for
    /// indexing are checked here; full record parsing happens on lookup.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut db = Self::default();

        for (line_num, line) in reader.lines().enumerate() {
            let line_num = line_num + 1;
            let line = line?;
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }

            let (chrom, start, end) = {
                let fields: Vec<&str> = line.split('\t').collect();
                if fields.len() < 8 {
                    return Err(Error::Parse(format!(
                        "line {line_num}: expected at least 8 tab-separated columns, got {}",
                        fields.len()
                    )));
                }
                let coordinate = |idx: usize, what: &str| -> Result<i32, Error> {
                    fields[idx].trim().parse().map_err(|e| {
                        Error::Parse(format!(
                            "line {line_num}: invalid {what} '{}': {e}",
                            fields[idx]
                        ))
                    })
                };
                (
                    fields[4].to_string(),
                    coordinate(6, "transcript start")?,
                    coordinate(7, "transcript end")?,
                )
            };

            db.contigs.insert(chrom.clone());
            db.records.entry(chrom).or_default().push(IndexedRecord {
                start,
                end,
                line,
            });
        }

        for records in db.records.values_mut() {
            // Stable, so equal starts keep file order
            records.sort_by_key(|r| r.start);
        }

        Ok(db)
    }

    /// Total number of records across all contigs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TranscriptDatabase for MemoryDatabase {
    fn contigs(&self) -> &HashSet<String> {
        &self.contigs
    }

    fn fetch(&self, region: &GenomicRegion) -> Result<Vec<String>, Error> {
        let Some(records) = self.records.get(&region.chrom) else {
            return Ok(Vec::new());
        };

        let upper = records.partition_point(|r| r.start <= region.end);
        Ok(records[..upper]
            .iter()
            .filter(|r| r.end >= region.start)
            .map(|r| r.line.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    use flate2::Compression;
    use flate2::write::GzEncoder;
    use tempfile::NamedTempFile;

    const DB: &str = "\
# transcript database
ENST1\tA\tx\ty\t1\t1\t90\t400\t1\t101\t340\t100\t150\t300\t350
ENST2\tB\tx\ty\t1\t-1\t500\t900\t1\t800\t600\t700\t850\t550\t650

ENST3\tC\tx\ty\tchr2\t1\t10\t50\t1\t20\t40\t10\t50
";

    #[test]
    fn region_parse_and_display() {
        let r: GenomicRegion = "chr7:1,000-2,000".parse().unwrap();
        assert_eq!(r.chrom, "chr7");
        assert_eq!((r.start, r.end), (1000, 2000));
        assert_eq!(r.to_string(), "chr7:1000-2000");

        let p: GenomicRegion = "7:55".parse().unwrap();
        assert_eq!(p, GenomicRegion::point("7", 55));
        assert_eq!(p.to_string(), "7:55-55");
    }

    #[test]
    fn single_position_only() {
        let p: GenomicRegion = "chr7:1,500".parse().unwrap();
        assert_eq!(p.as_position().unwrap(), 1500);

        let r: GenomicRegion = "7:100-200".parse().unwrap();
        let err = r.as_position().unwrap_err();
        assert!(err.to_string().contains("7:100-200"));
    }

    #[test]
    fn region_parse_errors() {
        assert!("chr7".parse::<GenomicRegion>().is_err());
        assert!(":5-6".parse::<GenomicRegion>().is_err());
        assert!("1:9-3".parse::<GenomicRegion>().is_err());
        assert!("1:0".parse::<GenomicRegion>().is_err());
        assert!("1:a-b".parse::<GenomicRegion>().is_err());
    }

    #[test]
    fn load_and_fetch() {
        let db = MemoryDatabase::from_reader(Cursor::new(DB)).unwrap();
        assert_eq!(db.len(), 3);
        assert!(db.contigs().contains("1"));
        assert!(db.contigs().contains("chr2"));

        let hits = db.fetch(&GenomicRegion::point("1", 200)).unwrap();
        assert_eq!(hits.len(), 1);
        assert!(hits[0].starts_with("ENST1\t"));

        assert!(db.fetch(&GenomicRegion::point("1", 450)).unwrap().is_empty());
        assert!(db.fetch(&GenomicRegion::point("3", 200)).unwrap().is_empty());

        let wide = db
            .fetch(&GenomicRegion {
                chrom: "1".to_string(),
                start: 350,
                end: 550,
            })
            .unwrap();
        assert_eq!(wide.len(), 2);
    }

    #[test]
    fn fetch_is_inclusive_of_record_bounds() {
        let db = MemoryDatabase::from_reader(Cursor::new(DB)).unwrap();
        assert_eq!(db.fetch(&GenomicRegion::point("1", 90)).unwrap().len(), 1);
        assert_eq!(db.fetch(&GenomicRegion::point("1", 400)).unwrap().len(), 1);
    }

    #[test]
    fn malformed_line_reports_line_number() {
        let err = MemoryDatabase::from_reader(Cursor::new("ENST1\tA\tx\n")).unwrap_err();
        assert!(err.to_string().contains("line 1"));

        let err =
            MemoryDatabase::from_reader(Cursor::new("# c\nENST1\tA\tx\ty\t1\t1\tQ\t400\n")).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn open_plain_and_gzip() {
        let mut plain = NamedTempFile::new().unwrap();
        plain.write_all(DB.as_bytes()).unwrap();
        assert_eq!(MemoryDatabase::open(plain.path()).unwrap().len(), 3);

        let mut gz = tempfile::Builder::new().suffix(".gz").tempfile().unwrap();
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(DB.as_bytes()).unwrap();
        gz.write_all(&encoder.finish().unwrap()).unwrap();
        assert_eq!(MemoryDatabase::open(gz.path()).unwrap().len(), 3);
    }
}
