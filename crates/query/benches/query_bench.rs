//! Benchmarks for reading, compiling, and evaluating queries.
//!
//! Setup (environment seeding) is excluded from measurement with
//! iter_batched so the numbers reflect the compiler and the evaluator walk.

use std::rc::Rc;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use lispel_core::{Expression, Row};
use lispel_query::{compile, read, Environment};

const SIMPLE: &str = "(select (columns id name) (table users))";
const FILTERED: &str =
    "(select (columns id) (table users) (where (= name \"bob\") (< id 10)))";
const NESTED: &str =
    "(select (columns id name) (table (select (columns id) (table users))))";

fn seeded_env() -> Rc<Environment> {
    let env = Rc::new(Environment::new(None));
    let mut row = Row::new();
    row.insert("id", Expression::Number(1.0));
    row.insert("name", Expression::Str("bob".into()));
    env.set_table("users", vec![row]);
    env
}

fn bench_read(c: &mut Criterion) {
    c.bench_function("read_nested", |b| {
        b.iter(|| read(black_box(NESTED)).unwrap())
    });
}

fn bench_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile");
    for (name, query) in [("simple", SIMPLE), ("filtered", FILTERED), ("nested", NESTED)] {
        let expr = read(query).unwrap();
        group.bench_function(name, |b| {
            b.iter(|| compile(black_box(&expr)).unwrap())
        });
    }
    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    for (name, query) in [("simple", SIMPLE), ("nested", NESTED)] {
        let plan = compile(&read(query).unwrap()).unwrap().unwrap();
        group.bench_function(name, |b| {
            b.iter_batched(
                seeded_env,
                |env| plan.evaluate(black_box(&env)),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_read, bench_compile, bench_evaluate);
criterion_main!(benches);
