//! Benchmarks for segment time derivation and the editor fill workflow
//!
//! Tests that a full fill stays linear in the number of segments for:
//! - Raw derivation over dense and sparse split columns
//! - The editor fill, which also parses and formats every cell
//!
//! Platform: Cross-platform (pure computation, CI-safe)

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use runsplit::test_utils::{editor_with_splits, evenly_spaced_splits, sample_run};
use runsplit::{RunEditor, derive_segment_times, format_time};
use std::hint::black_box;

const SEGMENT_COUNTS: [usize; 3] = [10, 100, 1000];

fn bench_derive(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive_segment_times");

    for count in SEGMENT_COUNTS {
        let dense = evenly_spaced_splits(count, 61.25);
        let sparse: Vec<_> = dense
            .iter()
            .enumerate()
            .map(|(index, split)| if index % 3 == 1 { None } else { *split })
            .collect();

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("dense", count), &dense, |b, splits| {
            b.iter(|| black_box(derive_segment_times(black_box(splits))))
        });
        group.bench_with_input(BenchmarkId::new("sparse", count), &sparse, |b, splits| {
            b.iter(|| black_box(derive_segment_times(black_box(splits))))
        });
    }

    group.finish();
}

fn bench_editor_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("editor_fill");

    for count in SEGMENT_COUNTS {
        let texts: Vec<String> = evenly_spaced_splits(count, 61.25)
            .into_iter()
            .map(|split| split.map(format_time).unwrap_or_default())
            .collect();
        let text_refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let editor = editor_with_splits(&text_refs).expect("fixture rows are in range");

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &editor, |b, editor| {
            b.iter(|| {
                let mut editor = editor.clone();
                black_box(editor.fill_segment_times())
            })
        });
    }

    group.finish();
}

fn bench_reload_and_save(c: &mut Criterion) {
    let run = sample_run();

    c.bench_function("reload_and_save_sample_run", |b| {
        b.iter(|| {
            let editor = RunEditor::from_run(black_box(&run));
            black_box(editor.save().expect("sample run saves"))
        })
    });
}

criterion_group!(benches, bench_derive, bench_editor_fill, bench_reload_and_save);
criterion_main!(benches);
