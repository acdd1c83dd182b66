use std::hint::black_box;

use ansidoc_core::{parse, parse_into, Cell, Surface};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Minimal surface implementation for benchmarking the interpreter
/// without page allocation in the loop.
#[derive(Default)]
struct CountingSurface {
    rows: usize,
    writes: usize,
}

impl Surface for CountingSurface {
    fn width(&self) -> usize {
        80
    }
    fn rows(&self) -> usize {
        self.rows
    }
    fn put(&mut self, row: usize, _col: usize, _cell: Cell) -> bool {
        self.rows = self.rows.max(row + 1);
        self.writes += 1;
        true
    }
    fn reach(&mut self, row: usize) -> bool {
        self.rows = self.rows.max(row + 1);
        true
    }
}

fn bench_plain_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("plain_text");

    for size in [100, 1000, 10000] {
        let text = "a".repeat(size).into_bytes();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| parse(black_box(text), 80));
        });
    }
    group.finish();
}

fn bench_shaded_art(c: &mut Criterion) {
    let mut group = c.benchmark_group("shaded_art");

    // Shade and block glyphs dominate real art files.
    let mut line = Vec::new();
    for _ in 0..19 {
        line.extend_from_slice(&[0xB0, 0xB1, 0xB2, 0xDB]);
    }
    line.extend_from_slice(b"\r\n");

    for lines in [10, 100, 1000] {
        let art: Vec<u8> = line.repeat(lines);
        let size = art.len();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), &art, |b, art| {
            b.iter(|| parse(black_box(art), 80));
        });
    }
    group.finish();
}

fn bench_sgr_sequences(c: &mut Criterion) {
    let mut group = c.benchmark_group("sgr_sequences");

    let patterns: Vec<(&str, &[u8])> = vec![
        ("simple", b"\x1B[31mRed\x1B[0m"),
        ("combined", b"\x1B[1;37;44mBright white on blue\x1B[0m"),
        ("reverse", b"\x1B[7mSwapped\x1B[27m"),
        ("rapid", b"\x1B[31m\x1B[32m\x1B[33m\x1B[34m\x1B[35mx"),
    ];

    for (name, pattern) in patterns {
        let text = pattern.repeat(100);
        let size = text.len();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &text, |b, text| {
            b.iter(|| parse(black_box(text), 80));
        });
    }
    group.finish();
}

fn bench_cursor_movement(c: &mut Criterion) {
    let mut group = c.benchmark_group("cursor_movement");

    let patterns: Vec<(&str, &[u8])> = vec![
        ("relative", b"\x1B[2B\x1B[3Cx\x1B[A\x1B[Dy"),
        ("absolute", b"\x1B[10;20Hx"),
        ("save_restore", b"\x1B[sx\x1B[u"),
        ("erase", b"xxxx\x1B[2K\x1B[1;1H"),
    ];

    for (name, pattern) in patterns {
        let text = pattern.repeat(100);
        let size = text.len();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &text, |b, text| {
            b.iter(|| parse(black_box(text), 80));
        });
    }
    group.finish();
}

fn bench_mixed_art(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_art");

    // Realistic art material: colored runs, shade glyphs, line endings.
    let mut line = Vec::new();
    line.extend_from_slice(b"\x1B[0;34;40m");
    line.extend_from_slice(&[0xB0; 20]);
    line.extend_from_slice(b"\x1B[1;44m");
    line.extend_from_slice(&[0xB1; 20]);
    line.extend_from_slice(b"\x1B[0;37m plain tail\r\n");

    for count in [10, 100, 1000] {
        let text = line.repeat(count);
        let size = text.len();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &text, |b, text| {
            b.iter(|| parse(black_box(text), 80));
        });
    }
    group.finish();
}

fn bench_worst_case(c: &mut Criterion) {
    let mut group = c.benchmark_group("worst_case");

    let patterns: Vec<(&str, Vec<u8>)> = vec![
        (
            "many_params",
            b"\x1B[1;2;3;4;5;6;7;8;9;10m".to_vec(),
        ),
        ("huge_param", format!("\x1B[{}m", "9".repeat(100)).into_bytes()),
        ("malformed", b"\x1B[?25h\x1B(\x1B".to_vec()),
        ("semicolons", b"\x1B[;;;;;;;;;;;;;;;;m".to_vec()),
    ];

    for (name, pattern) in patterns {
        let text = pattern.repeat(100);
        let size = text.len();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &text, |b, text| {
            b.iter(|| parse(black_box(text), 80));
        });
    }
    group.finish();
}

fn bench_surface_sink(c: &mut Criterion) {
    c.bench_function("surface_sink", |b| {
        let text = b"\x1B[1;34mshade \x1B[44m\xB1\xB1\xB1\xB1\x1B[0m\r\n".repeat(100);

        b.iter(|| {
            let mut surface = CountingSurface::default();
            parse_into(black_box(&text), &mut surface);
            surface.writes
        });
    });
}

criterion_group!(
    benches,
    bench_plain_text,
    bench_shaded_art,
    bench_sgr_sequences,
    bench_cursor_movement,
    bench_mixed_art,
    bench_worst_case,
    bench_surface_sink,
);

criterion_main!(benches);
