use criterion::{Criterion, black_box, criterion_group, criterion_main};
use java2js_rewrite::{Converter, EXAMPLE_JAVA};

fn bench_convert(c: &mut Criterion) {
    let converter = Converter::new();
    c.bench_function("convert_example", |b| {
        b.iter(|| converter.convert(black_box(EXAMPLE_JAVA)))
    });

    let large = EXAMPLE_JAVA.repeat(200);
    c.bench_function("convert_example_x200", |b| {
        b.iter(|| converter.convert(black_box(&large)))
    });

    c.bench_function("build_converter", |b| b.iter(Converter::new));
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);
