//! Performance benchmarks for the block-streaming engine.
//!
//! Measures compression and decompression throughput over data patterns
//! with very different match densities, plus the cost of the descriptor
//! flow's budget accounting.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use lzstream::{BlockStream, compress, decompress};
use std::hint::black_box;
use std::io::Cursor;

/// Generate test data patterns for benchmarking
mod test_data {
    /// Uniform data - all bytes the same (best compression)
    pub fn uniform(size: usize) -> Vec<u8> {
        vec![0xAA; size]
    }

    /// Random data - no patterns (worst compression)
    pub fn random(size: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0x123456789ABCDEF0;
        for _ in 0..size {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            data.push((seed >> 32) as u8);
        }
        data
    }

    /// Text-like data - realistic scenario
    pub fn text_like(size: usize) -> Vec<u8> {
        b"The quick brown fox jumps over the lazy dog. \
          Pack my box with five dozen liquor jugs. "
            .iter()
            .copied()
            .cycle()
            .take(size)
            .collect()
    }
}

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress");
    let size = 1024 * 1024;
    group.throughput(Throughput::Bytes(size as u64));

    for (name, data) in [
        ("uniform", test_data::uniform(size)),
        ("random", test_data::random(size)),
        ("text", test_data::text_like(size)),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &data, |b, data| {
            b.iter(|| compress(black_box(data)).unwrap());
        });
    }
    group.finish();
}

fn bench_decompress(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompress");
    let size = 1024 * 1024;
    group.throughput(Throughput::Bytes(size as u64));

    for (name, data) in [
        ("uniform", test_data::uniform(size)),
        ("random", test_data::random(size)),
        ("text", test_data::text_like(size)),
    ] {
        let compressed = compress(&data).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(name), &compressed, |b, compressed| {
            b.iter(|| decompress(black_box(compressed)).unwrap());
        });
    }
    group.finish();
}

fn bench_descriptor_flow(c: &mut Criterion) {
    let size = 1024 * 1024;
    let data = test_data::text_like(size);
    let frames = compress(&data).unwrap();
    let budget = frames.len() as u64;

    let mut group = c.benchmark_group("descriptor");
    group.throughput(Throughput::Bytes(size as u64));
    group.bench_function("decompress_budgeted", |b| {
        b.iter(|| {
            let mut descriptor = Cursor::new(frames.as_slice());
            let mut stream = BlockStream::decompress_descriptor(&mut descriptor);
            stream.set_read_bytes(budget).unwrap();
            let mut total = 0usize;
            while let Some(block) = stream.next_block().unwrap() {
                total += block.len();
            }
            black_box(total)
        });
    });
    group.finish();
}

criterion_group!(benches, bench_compress, bench_decompress, bench_descriptor_flow);
criterion_main!(benches);
