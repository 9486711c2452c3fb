use criterion::{criterion_group, criterion_main, Criterion};
use griseo::{Brush, Level};

pub fn run_benchmarks(c: &mut Criterion) {
    let brush = Brush::new(Level::TrueColor);

    let mut group = c.benchmark_group("paint");

    let red = brush.chain().red();
    group.bench_function("named", |b| b.iter(|| red.paint("The quick brown fox")));

    let fancy = brush.chain().red().bg_green().underline().bold();
    group.bench_function("stacked", |b| b.iter(|| fancy.paint("The quick brown fox")));

    group.bench_function("chain-and-paint", |b| {
        b.iter(|| brush.chain().rgb(255, 105, 180).bold().paint("The quick brown fox"))
    });

    let multiline = "The quick\nbrown fox\njumps over\nthe lazy dog";
    group.bench_function("multiline", |b| b.iter(|| red.paint(multiline)));

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
