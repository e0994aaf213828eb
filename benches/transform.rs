use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use transcoord::coordinate::transform_to_csn;
use transcoord::transcript::{Transcript, parse_record};
use transcoord::variant::Variant;

/// Forward-strand transcript with 40 exons of 100 bp separated by 900 bp introns.
fn many_exon_transcript() -> Transcript {
    let mut fields = vec![
        "ENSTBENCH.1".to_string(),
        "BENCH".to_string(),
        ".".to_string(),
        ".".to_string(),
        "1".to_string(),
        "1".to_string(),
        "10000".to_string(),
        "50000".to_string(),
        "1".to_string(),
        "10001".to_string(),
        "49050".to_string(),
    ];
    for i in 0..40 {
        let start = 10_000 + i * 1_000;
        fields.push(start.to_string());
        fields.push((start + 100).to_string());
    }
    parse_record(&fields.join("\t")).unwrap()
}

fn bench_transform(c: &mut Criterion) {
    let transcript = many_exon_transcript();

    c.bench_function("transform_to_csn (exonic, exon 40)", |b| {
        b.iter(|| transform_to_csn(black_box(49_020), &transcript).unwrap());
    });

    c.bench_function("transform_to_csn (intronic, intron 20/21)", |b| {
        b.iter(|| transform_to_csn(black_box(29_400), &transcript).unwrap());
    });
}

fn bench_classify(c: &mut Criterion) {
    let transcript = many_exon_transcript();
    let variant = Variant::new(29_103, "AC", "").unwrap();

    c.bench_function("where_is_this_variant", |b| {
        b.iter(|| transcript.where_is_this_variant(black_box(&variant)));
    });

    c.bench_function("splice classifiers", |b| {
        b.iter(|| {
            let v = black_box(&variant);
            (
                transcript.is_in_essential_splice_site(v),
                transcript.is_in_ss5_site(v),
                transcript.is_in_splicing_region(v, 8),
                transcript.is_in_first_or_last_3_bases_of_exon(v),
            )
        });
    });
}

criterion_group!(benches, bench_transform, bench_classify);
criterion_main!(benches);
