use passgen::{generate, Alphabet, Category, CategorySet, PasswordLength, SessionState};

use criterion::{criterion_group, criterion_main, Criterion};

fn criterion_benchmark_generate_16_chars(c: &mut Criterion) {
    let categories: CategorySet = Category::ALL.into_iter().collect();
    let alphabet = Alphabet::build(&categories);
    let length = PasswordLength::new(16).unwrap();

    c.bench_function("generate 16 chars all categories", |b| {
        b.iter(|| generate(length, &alphabet).unwrap())
    });
}

fn criterion_benchmark_session_cycle(c: &mut Criterion) {
    c.bench_function("session toggle generate reset", |b| {
        b.iter(|| {
            let mut session = SessionState::new();
            session.toggle(Category::Lowercase);
            session.toggle(Category::Numbers);
            session.generate("12").unwrap();
            session.reset();
        })
    });
}

criterion_group!(
    benches,
    criterion_benchmark_generate_16_chars,
    criterion_benchmark_session_cycle
);
criterion_main!(benches);
