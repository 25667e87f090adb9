use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use strassen_core::{Buffer, LinearMultiplier, Multiplier, StrassenConfig, StrassenMultiplier};

const INPUT_SIZES: &[(&str, usize)] = &[("n64", 64), ("n100", 100), ("n128", 128)];
const CUTOFFS: &[usize] = &[8, 16, 32, 64];

#[inline]
fn next_u64(state: &mut u64) -> u64 {
    let mut x = *state;
    x ^= x >> 12;
    x ^= x << 25;
    x ^= x >> 27;
    *state = x;
    x.wrapping_mul(0x2545_F491_4F6C_DD1D)
}

fn make_matrix(n: usize, seed: u64) -> Buffer {
    let mut state = seed;
    let data = (0..n * n).map(|_| (next_u64(&mut state) & 0x1) as i32).collect();
    Buffer::from_vec(n, data).expect("n*n entries")
}

fn bench_linear(c: &mut Criterion) {
    let mut group = c.benchmark_group("linear");
    for &(label, n) in INPUT_SIZES {
        group.throughput(Throughput::Elements((n as u64).pow(3)));
        let a = make_matrix(n, 0xC0FF_EE42_1234_5678u64 ^ n as u64);
        let b = make_matrix(n, 0xBADC_0FFE_EE11_D00Du64 ^ (n as u64).rotate_left(17));
        let m = LinearMultiplier::new();
        group.bench_function(BenchmarkId::new("random01", label), |bench| {
            bench.iter(|| black_box(m.multiply(black_box(&a), black_box(&b)).unwrap()));
        });
    }
    group.finish();
}

fn bench_strassen(c: &mut Criterion) {
    let mut group = c.benchmark_group("strassen");
    for &(label, n) in INPUT_SIZES {
        group.throughput(Throughput::Elements((n as u64).pow(3)));
        let a = make_matrix(n, 0xC0FF_EE42_1234_5678u64 ^ n as u64);
        let b = make_matrix(n, 0xBADC_0FFE_EE11_D00Du64 ^ (n as u64).rotate_left(17));
        for &cutoff in CUTOFFS {
            let m = StrassenMultiplier::new(StrassenConfig::new(cutoff).unwrap());
            let id = BenchmarkId::new(format!("cutoff{cutoff}"), label);
            group.bench_function(id, |bench| {
                bench.iter(|| black_box(m.multiply(black_box(&a), black_box(&b)).unwrap()));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_linear, bench_strassen);
criterion_main!(benches);
