//! Benchmarks for archive creation and extraction throughput.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use dirzip_core::CreationConfig;
use dirzip_core::ExtractionConfig;
use dirzip_core::Password;
use dirzip_core::create_archive;
use dirzip_core::extract_archive;
use dirzip_core::sanitize::NamePolicy;
use dirzip_core::sanitize::sanitize_with;
use std::fs;
use std::hint::black_box;
use std::path::PathBuf;
use tempfile::TempDir;

/// Creates a flat directory of 1 KB files.
fn create_test_directory(temp: &TempDir, file_count: usize) -> PathBuf {
    let dir = temp.path().join("bench_data");
    fs::create_dir_all(&dir).unwrap();

    let content = "x".repeat(1024);
    for i in 0..file_count {
        fs::write(dir.join(format!("file_{i:05}.txt")), &content).unwrap();
    }

    dir
}

fn password() -> Option<Password> {
    Some(Password::new("benchpass1").unwrap())
}

fn bench_create(c: &mut Criterion) {
    let mut group = c.benchmark_group("create");

    for file_count in [10, 100, 500] {
        let temp = TempDir::new().unwrap();
        let source = create_test_directory(&temp, file_count);
        group.throughput(Throughput::Bytes((file_count * 1024) as u64));

        for (label, config) in [
            ("plain", CreationConfig::default()),
            ("aes256", CreationConfig::default().with_password(password())),
        ] {
            group.bench_with_input(BenchmarkId::new(label, file_count), &file_count, |b, _| {
                let out = temp.path().join(format!("{label}.zip"));
                b.iter(|| create_archive(black_box(&source), &out, &config).unwrap());
            });
        }
    }

    group.finish();
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");

    for file_count in [10, 100, 500] {
        let temp = TempDir::new().unwrap();
        let source = create_test_directory(&temp, file_count);
        group.throughput(Throughput::Bytes((file_count * 1024) as u64));

        for (label, password) in [("plain", None), ("aes256", password())] {
            let archive = temp.path().join(format!("{label}.zip"));
            create_archive(
                &source,
                &archive,
                &CreationConfig::default().with_password(password.clone()),
            )
            .unwrap();
            let config = ExtractionConfig::default().with_password(password);

            group.bench_with_input(BenchmarkId::new(label, file_count), &file_count, |b, _| {
                b.iter(|| {
                    let dest = TempDir::new().unwrap();
                    extract_archive(black_box(&archive), dest.path().join("out"), &config)
                        .unwrap()
                });
            });
        }
    }

    group.finish();
}

fn bench_sanitize(c: &mut Criterion) {
    let names = [
        "docs/a.txt",
        "reports/2024: q1?/summary*.txt",
        "deeply/nested/path/with/many/segments/file.bin",
    ];

    c.bench_function("sanitize_portable", |b| {
        b.iter(|| {
            for name in &names {
                black_box(sanitize_with(black_box(name), NamePolicy::Portable));
            }
        });
    });
}

criterion_group!(benches, bench_create, bench_extract, bench_sanitize);
criterion_main!(benches);
