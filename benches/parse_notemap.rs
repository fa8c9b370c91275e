//! Benchmark for note map file parsing.

use criterion::{Criterion, Throughput};
use notemap_rs::notemap::parse_notemap;

struct NotemapFile {
    name: String,
    source: String,
}

fn scan_notemap_files() -> Vec<NotemapFile> {
    let dir = "tests/files";

    std::fs::read_dir(dir)
        .expect("Failed to read directory")
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.to_string_lossy().ends_with(".nmap"))
        .filter_map(|path| {
            let name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .map(String::from)?;

            let source = std::fs::read_to_string(&path).expect("Failed to load test file");

            Some(NotemapFile { name, source })
        })
        .collect()
}

fn bench_parse_notemap(c: &mut Criterion) {
    let files = scan_notemap_files();
    let mut group = c.benchmark_group("parse_notemap");

    for file in files.iter() {
        group.throughput(Throughput::Bytes(file.source.len() as u64));
        group.bench_function(&file.name, |b| {
            b.iter(|| parse_notemap(std::hint::black_box(&file.source)));
        });
    }

    group.finish();
}

fn main() {
    let mut criterion = Criterion::default();
    bench_parse_notemap(&mut criterion);
}
