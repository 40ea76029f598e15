//! Lexer benchmarks for rotate.
//!
//! Measures tokenization throughput across input sizes and token mixes.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rot_lexer::lex;
use rot_lexer_core::SourceBuffer;

const SIMPLE_FUNCTION: &str = "fn add(a: int, b: int) int { return a + b; }";

const MIXED: &str = r#"
import io;

pub struct Point { x: float, y: float }

/* distance between two points */
fn dist(a: ref Point, b: ref Point) float {
    dx: float = a.x - b.x;
    dy: float = a.y - b.y;
    if dx >= 0.5 and dy != 1.25 { @println("far\n"); }
    c: char = '\n';
    return dx * dx + dy * dy; // squared
}
"#;

fn generate_n_functions(n: usize) -> String {
    (0..n)
        .map(|i| format!("fn func{i}(x: int) int {{ return x + {i}; }}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_lexer_simple(c: &mut Criterion) {
    let buf = SourceBuffer::new("bench.rot", SIMPLE_FUNCTION);
    c.bench_function("lexer/simple_function", |b| {
        b.iter(|| black_box(lex(black_box(&buf))));
    });
}

fn bench_lexer_mixed(c: &mut Criterion) {
    let buf = SourceBuffer::new("bench.rot", MIXED);
    c.bench_function("lexer/mixed", |b| {
        b.iter(|| black_box(lex(black_box(&buf))));
    });
}

fn bench_lexer_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer/scaling");
    for n in [10, 100, 1000, 5000] {
        let source = generate_n_functions(n);
        let buf = SourceBuffer::new("bench.rot", &source);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &buf, |b, buf| {
            b.iter(|| black_box(lex(black_box(buf))));
        });
    }
    group.finish();
}

fn bench_source_buffer(c: &mut Criterion) {
    let source = generate_n_functions(1000);
    c.bench_function("lexer/source_buffer_1000", |b| {
        b.iter(|| black_box(SourceBuffer::new("bench.rot", black_box(&source))));
    });
}

criterion_group!(
    benches,
    bench_lexer_simple,
    bench_lexer_mixed,
    bench_lexer_scaling,
    bench_source_buffer
);
criterion_main!(benches);
