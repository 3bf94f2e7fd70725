use calclang::{Environment, Evaluator, Parser, Scanner};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn program_source() -> String {
    let mut source = String::from("x = 1\n");
    for i in 0..200 {
        source.push_str(&format!("x = (x * 3 + {}) / 2 - -{}\n", i, i % 7));
    }
    source.push_str("x\n");
    source
}

fn lexer_benchmark(c: &mut Criterion) {
    let source = program_source();

    c.bench_function("tokenize 200 statements", |b| {
        b.iter(|| Scanner::new(black_box(&source)).scan_tokens().unwrap())
    });
}

fn parser_benchmark(c: &mut Criterion) {
    let source = program_source();
    let tokens = Scanner::new(&source).scan_tokens().unwrap();

    c.bench_function("parse 200 statements", |b| {
        b.iter(|| Parser::from_tokens(black_box(tokens.clone())).parse().unwrap())
    });
}

fn evaluator_benchmark(c: &mut Criterion) {
    let source = program_source();
    let program = Parser::new(Scanner::new(&source)).parse().unwrap();

    c.bench_function("evaluate 200 statements", |b| {
        b.iter(|| {
            let mut env = Environment::new();
            Evaluator::new()
                .execute(black_box(&program), &mut env)
                .unwrap()
        })
    });
}

criterion_group!(benches, lexer_benchmark, parser_benchmark, evaluator_benchmark);
criterion_main!(benches);
