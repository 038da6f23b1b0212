use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use doodle::{prn_str, read_str, tokenize, Namespace};

const SAMPLE: &str = r#"
    ; a small document
    (define config {:name "doodle" :sizes [1 2 3] :enabled true})
    (+ 1 (* 2 3) (- 10 4) (/ 8 2))
    [nil :keyword "string with \"quotes\"" -0.5 3e2]
"#;

fn tokenizer_benchmark(c: &mut Criterion) {
    c.bench_function("tokenize sample", |b| {
        b.iter(|| tokenize(black_box(SAMPLE)))
    });
}

fn reader_benchmark(c: &mut Criterion) {
    c.bench_function("read_str sample", |b| b.iter(|| read_str(black_box(SAMPLE))));

    let mut group = c.benchmark_group("read_str_nested");
    for depth in [10, 50, 100].iter() {
        let source = format!("{}1 2 3{}", "(".repeat(*depth), ")".repeat(*depth));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &source, |b, source| {
            b.iter(|| read_str(black_box(source)))
        });
    }
    group.finish();
}

fn printer_benchmark(c: &mut Criterion) {
    let forms = read_str(SAMPLE);

    c.bench_function("prn_str sample", |b| {
        b.iter(|| {
            for form in &forms {
                black_box(prn_str(form));
            }
        })
    });
}

fn namespace_benchmark(c: &mut Criterion) {
    let namespace = Namespace::new();
    let args = read_str("1 2 3 4 5 6 7 8 9 10");

    c.bench_function("call + with ten numbers", |b| {
        b.iter(|| namespace.call("+", black_box(&args)).unwrap())
    });
}

criterion_group!(
    benches,
    tokenizer_benchmark,
    reader_benchmark,
    printer_benchmark,
    namespace_benchmark
);
criterion_main!(benches);
