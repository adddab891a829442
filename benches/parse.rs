// benches/parse.rs

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::fmt::Write;
use std::path::Path;
use variant_core::{BedReader, VcfReader};

const SIZES: &[usize] = &[1_000, 100_000];
const CHROMS: &[&str] = &["chr1", "chr2", "chr3", "chrX"];
const BASES: &[&str] = &["A", "C", "G", "T"];

fn write_bed(path: &Path, n: usize) -> std::io::Result<()> {
    let mut data = String::from("track name=bench\n");
    for i in 0..n {
        let start = i * 100;
        writeln!(
            data,
            "{}\t{}\t{}\tfeature{}\t0\t+",
            CHROMS[i % CHROMS.len()],
            start,
            start + 50,
            i
        )
        .unwrap();
    }
    std::fs::write(path, data)
}

fn write_vcf(path: &Path, n: usize) -> std::io::Result<()> {
    let mut data = String::from(
        "##fileformat=VCFv4.2\n#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tS1\tS2\n",
    );
    for i in 0..n {
        let alt = if i % 10 == 0 {
            "G,T"
        } else {
            BASES[(i + 1) % BASES.len()]
        };
        writeln!(
            data,
            "{}\t{}\trs{}\t{}\t{}\t{}.5\tPASS\tDP={};AF=0.5\tGT:DP\t0/1:12\t1/1:30",
            CHROMS[i % CHROMS.len()],
            i + 1,
            i,
            BASES[i % BASES.len()],
            alt,
            i % 60,
            i % 100
        )
        .unwrap();
    }
    std::fs::write(path, data)
}

fn bench_readers(c: &mut Criterion) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    let mut group = c.benchmark_group("read_records");
    group.sample_size(20);

    for &n in SIZES {
        let bed_path = dir.path().join(format!("bench_{}.bed", n));
        let vcf_path = dir.path().join(format!("bench_{}.vcf", n));
        write_bed(&bed_path, n).expect("Failed to write BED file");
        write_vcf(&vcf_path, n).expect("Failed to write VCF file");

        group.throughput(Throughput::Elements(n as u64));

        let reader = BedReader::new(&bed_path);
        group.bench_with_input(BenchmarkId::new("bed", n), &reader, |b, reader| {
            b.iter(|| reader.records().map(|r| r.unwrap()).count())
        });

        let reader = VcfReader::new(&vcf_path);
        group.bench_with_input(BenchmarkId::new("vcf", n), &reader, |b, reader| {
            b.iter(|| reader.records().map(|r| r.unwrap()).count())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_readers);
criterion_main!(benches);
