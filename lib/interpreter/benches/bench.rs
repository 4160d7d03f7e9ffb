use criterion::{criterion_group, criterion_main, Criterion};
use interpreter::Interpreter;

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("arithmetic", |b| {
        b.iter(|| {
            let source = r#"
                (1 + 2) * 3 - 4 / 5 % 6;
                -(-(-(-1))) * (((((2)))));
                1 < 2 == !(3 >= 4) != false;
            "#;
            let mut output = Vec::new();
            Interpreter::new().run_source(source, &mut output).unwrap();
        })
    });

    c.bench_function("strings and conditionals", |b| {
        b.iter(|| {
            let source = r#"
                "a" + 1 + "b" + true + nil;
                1 == 1 ? "yes" + "!" : "no", 2 > 3 ? 1 : nil ? 2 : 3;
            "#;
            let mut output = Vec::new();
            Interpreter::new().run_source(source, &mut output).unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
