use criterion::{criterion_group, criterion_main, Criterion};

use parquet_codec::encoding::bitpacked;

fn add_benchmark(c: &mut Criterion) {
    (10..=20).step_by(2).for_each(|log2_size| {
        let size = 2usize.pow(log2_size);
        let bytes = (0..size).map(|x| (x % 255) as u8).collect::<Vec<_>>();

        c.bench_function(&format!("decode bitpacked 2^{}", log2_size), |b| {
            b.iter(|| bitpacked::Decoder::<u32>::new(&bytes, 1, size * 8).sum::<u32>())
        });
    });
}

criterion_group!(benches, add_benchmark);
criterion_main!(benches);
