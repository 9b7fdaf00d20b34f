use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lwregex::{compile, regex_match, Atom, Capture, Regex, DEFAULT_ATOM_CAPACITY};
use std::hint::black_box;

const PATTERNS: &[(&str, &str)] = &[
    ("simple_literal", "Twain"),
    ("character_class", "[a-z]shing"),
    ("alternation", "Huck[a-zA-Z]+|Saw[a-zA-Z]+"),
    ("bounded_repeat", ".{2,4}(Tom|Sawyer)"),
    ("word_suffix", "[a-zA-Z]+ing"),
    ("digit_sequence", r"\d+"),
    ("date", r"(\d{1,2})/(\d{1,2})/(\d{4})"),
];

const TEXT: &str = "Tom said to Huckleberry Finn: I was born on 12/25/1990, and the \
                    fishing was good that year, said Twain.";

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("match", |b| {
        b.iter(|| regex_match(black_box(r"/\d+/g"), black_box("Price: $123")))
    });

    c.bench_function("complex match", |b| {
        b.iter(|| {
            regex_match(
                black_box(r"/(\d{1,2})\/(\d{1,2})\/(\d{4})/g"),
                black_box("Born on 12/25/1990 and graduated on 5/15/2012"),
            )
        })
    });

    let mut group = c.benchmark_group("compile");
    for (name, pattern) in PATTERNS {
        group.bench_with_input(BenchmarkId::from_parameter(name), pattern, |b, pattern| {
            b.iter(|| {
                let mut atoms = [Atom::EMPTY; DEFAULT_ATOM_CAPACITY];
                compile(pattern.as_bytes(), &mut atoms).map(|re| re.len())
            })
        });
    }
    group.finish();

    let mut group = c.benchmark_group("find");
    for (name, pattern) in PATTERNS {
        let mut atoms = [Atom::EMPTY; DEFAULT_ATOM_CAPACITY];
        let re = compile(pattern.as_bytes(), &mut atoms).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(name), &re, |b, re| {
            let mut caps = [Capture::default(); 4];
            b.iter(|| re.find(black_box(TEXT.as_bytes()), &mut caps))
        });
    }
    group.finish();

    c.bench_function("owned regex", |b| {
        let re = Regex::new(r"/[a-zA-Z]+ing/g").unwrap();
        b.iter(|| re.find(black_box(TEXT)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
