use anybase::{Alphabet, AlphabetRegistry, Conversion};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

fn get_alphabet(name: &str) -> Alphabet {
    let config = AlphabetRegistry::load_default().unwrap();
    config.alphabet(name).unwrap()
}

fn decimal_input(len: usize) -> String {
    (0..len).map(|i| char::from(b'1' + (i % 9) as u8)).collect()
}

fn bench_integer_decimal_to_base64(c: &mut Criterion) {
    let decimal = get_alphabet("decimal");
    let base64 = get_alphabet("base64");
    let mut group = c.benchmark_group("integer_decimal_to_base64");

    for size in [16, 64, 256, 1024].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        let input = decimal_input(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| {
                Conversion::new(black_box(input), &decimal)
                    .output_string(&base64, false)
                    .unwrap()
            });
        });
    }
    group.finish();
}

fn bench_fraction_decimal_to_binary(c: &mut Criterion) {
    let decimal = get_alphabet("decimal");
    let binary = get_alphabet("binary");
    let mut group = c.benchmark_group("fraction_decimal_to_binary");

    for precision in [10u32, 100, 1000].iter() {
        let mut conversion = Conversion::new("0.1", &decimal);
        conversion.set_precision(*precision).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(precision),
            &conversion,
            |b, conversion| {
                b.iter(|| conversion.output(black_box(&binary), false).unwrap());
            },
        );
    }
    group.finish();
}

fn bench_parse_only(c: &mut Criterion) {
    let hex = get_alphabet("hexadecimal");
    let input = format!(
        "{}.{}",
        "DEADBEEFCAFEBABE".repeat(8),
        "0123456789ABCDEF".repeat(8)
    );

    c.bench_function("parse_hex_folded", |b| {
        b.iter(|| anybase::parse::parse(black_box(&input), &hex).unwrap());
    });
}

criterion_group!(
    benches,
    bench_integer_decimal_to_base64,
    bench_fraction_decimal_to_binary,
    bench_parse_only
);
criterion_main!(benches);
