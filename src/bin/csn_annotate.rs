use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;

use transcoord::annotation::{TSV_HEADER, annotate_variant};
use transcoord::cli;
use transcoord::config::AnnotationConfig;
use transcoord::database::{GenomicRegion, MemoryDatabase, TranscriptDatabase};
use transcoord::locator::get_transcript_coordinates;
use transcoord::variant::Variant;

#[derive(Parser)]
#[command(
    name = "csn_annotate",
    about = "Map genomic positions and variants onto transcript (CSN) coordinates"
)]
struct Cli {
    /// Path to the JSON configuration file
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Transcript database file (overrides the config)
    #[arg(short = 'd', long = "db")]
    database: Option<PathBuf>,

    /// Genomic position as chrom:pos (repeatable; ranges are rejected)
    #[arg(short = 'p', long = "position")]
    positions: Vec<String>,

    /// Tab-separated variants file: chrom, pos, ref, alt. Alleles use IUPAC
    /// letters; symbolic alleles (<DEL>, *) are skipped with a warning.
    #[arg(short = 'v', long = "variants")]
    variants: Option<PathBuf>,
}

fn main() -> Result<()> {
    let start = Instant::now();
    let cli_args = Cli::parse();

    cli::banner("CSN Annotate");

    // ── Configuration ────────────────────────────────────
    cli::section("Configuration");

    let config = match (&cli_args.config, &cli_args.database) {
        (Some(path), db) => {
            let mut config = AnnotationConfig::from_file(path)?;
            if let Some(db) = db {
                config.database = db.clone();
            }
            cli::kv("Config", &path.display().to_string());
            config
        }
        (None, Some(db)) => AnnotationConfig::with_database(db.clone()),
        (None, None) => bail!("either --config or --db must be given"),
    };

    if cli_args.positions.is_empty() && cli_args.variants.is_none() {
        bail!("nothing to do: give --position and/or --variants");
    }

    cli::kv("Database", &config.database.display().to_string());
    cli::kv("Splice window", &config.splice_region_window.to_string());
    if !config.chromosomes.is_empty() {
        cli::kv("Chromosomes", &config.chromosomes.join(","));
    }
    eprintln!();

    // ── Database ─────────────────────────────────────────
    cli::section("Database");

    let db = MemoryDatabase::open(&config.database)
        .with_context(|| format!("failed to load database: {}", config.database.display()))?;
    cli::kv("Contigs", &db.contigs().len().to_string());
    cli::kv("Transcripts", &db.len().to_string());
    eprintln!();

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut annotated = 0;
    let mut skipped = 0;

    // ── Positions ────────────────────────────────────────
    if !cli_args.positions.is_empty() {
        cli::section("Positions");
        writeln!(out, "#position\ttranscript\tcsn")?;
        for text in &cli_args.positions {
            let region: GenomicRegion = text.parse()?;
            if !config.includes_chromosome(&region.chrom) {
                skipped += 1;
                continue;
            }
            let pos = region.as_position()?;
            let coords = get_transcript_coordinates(&db, &region.chrom, pos)?;
            if coords.is_empty() {
                cli::warning(&format!("no transcripts at {text}"));
                skipped += 1;
                continue;
            }
            for (id, csn) in &coords {
                writeln!(out, "{text}\t{id}\t{csn}")?;
            }
            annotated += 1;
        }
        cli::success(&format!("{} positions", cli_args.positions.len()));
        eprintln!();
    }

    // ── Variants ─────────────────────────────────────────
    if let Some(ref path) = cli_args.variants {
        cli::section("Variants");
        let (done, skip) = annotate_file(path, &db, &config, &mut out)?;
        annotated += done;
        skipped += skip;
        cli::success(&format!("{done} variants annotated"));
        eprintln!();
    }

    out.flush()?;
    cli::print_summary(start, annotated, skipped);
    Ok(())
}

fn annotate_file<D: TranscriptDatabase, W: Write>(
    path: &Path,
    db: &D,
    config: &AnnotationConfig,
    out: &mut W,
) -> Result<(usize, usize)> {
    let file = File::open(path)
        .with_context(|| format!("failed to open variants file: {}", path.display()))?;
    let reader = BufReader::new(file);

    writeln!(out, "#chrom\tpos\tref\talt\t{}", TSV_HEADER.join("\t"))?;

    let mut annotated = 0;
    let mut skipped = 0;
    for (line_num, line) in reader.lines().enumerate() {
        let line_num = line_num + 1;
        let line = line?;
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 4 {
            bail!(
                "{}:{line_num}: expected 4 tab-separated columns (chrom, pos, ref, alt), got {}",
                path.display(),
                fields.len()
            );
        }
        let (chrom, pos, ref_allele, alt_allele) = (fields[0], fields[1], fields[2], fields[3]);

        if !config.includes_chromosome(chrom) {
            skipped += 1;
            continue;
        }

        let pos: i32 = pos
            .trim()
            .parse()
            .with_context(|| format!("{}:{line_num}: invalid position '{pos}'", path.display()))?;
        // Symbolic or malformed alleles are reported and skipped
        let variant = match Variant::from_vcf(pos, ref_allele, alt_allele) {
            Ok(v) => v,
            Err(e) => {
                cli::warning(&format!("{}:{line_num}: {e}", path.display()));
                skipped += 1;
                continue;
            }
        };

        let annotations = annotate_variant(db, chrom, &variant, config.splice_region_window)?;
        if annotations.is_empty() {
            skipped += 1;
            continue;
        }
        for annotation in annotations {
            writeln!(
                out,
                "{chrom}\t{pos}\t{ref_allele}\t{alt_allele}\t{}",
                annotation.to_tsv_fields().join("\t")
            )?;
        }
        annotated += 1;
    }

    Ok((annotated, skipped))
}
