use radixbits::{BitExtractor, FieldSpec, Layout, Unit};
use criterion::{Criterion, criterion_group, criterion_main};

fn gen_digits(len: usize) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    // Deterministic but non-trivial pattern
    (0..len)
        .map(|i| DIGITS[(i * 31 + 7) % DIGITS.len()] as char)
        .collect()
}

fn gen_layout(field_count: usize) -> Layout {
    let fields = (0..field_count)
        .map(|i| FieldSpec::next(format!("f{}", i), 12, Unit::Bits))
        .collect();

    Layout::new(fields).unwrap()
}

fn bench_construct(c: &mut Criterion) {
    for &len in &[8usize, 64, 256, 1024] {
        let data = gen_digits(len);

        c.bench_function(&format!("construct_base36_{}_digits", len), |b| {
            b.iter(|| BitExtractor::new(&data, 36, 10).unwrap())
        });
    }
}

fn bench_shift(c: &mut Criterion) {
    let extractor = BitExtractor::new(&gen_digits(256), 36, 10).unwrap();

    for &width in &[1usize, 8, 24, 64] {
        c.bench_function(&format!("shift_bits_{}", width), |b| {
            b.iter(|| {
                let mut ex = extractor.clone();
                while ex.remaining_bits() > 0 {
                    let _ = ex.shift_bits(width);
                }
            })
        });
    }
}

fn bench_layout(c: &mut Criterion) {
    let extractor = BitExtractor::new(&gen_digits(256), 36, 10).unwrap();

    for &field_count in &[1usize, 10, 50, 100] {
        let layout = gen_layout(field_count);

        c.bench_function(&format!("extract_{}_fields", field_count), |b| {
            b.iter(|| layout.extract(&extractor))
        });
    }
}

criterion_group!(benches, bench_construct, bench_shift, bench_layout);
criterion_main!(benches);
