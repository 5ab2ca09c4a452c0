use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use hsxcc::{hsl_to_rgb, hsl_to_rgb_int, hsv_to_rgb, hsv_to_rgb_int};
use hsxcc::{rgb_to_hsl, rgb_to_hsl_int, rgb_to_hsv, rgb_to_hsv_int, RgbInt};

pub fn run_benchmarks(c: &mut Criterion) {
    // Compare the high-resolution conversions with each other.
    let mut group = c.benchmark_group("float");

    group.bench_function("rgb-to-hsv", |b| {
        b.iter(|| rgb_to_hsv(black_box(1.0), black_box(0.5), black_box(0.0)))
    });
    group.bench_function("hsv-to-rgb", |b| {
        b.iter(|| hsv_to_rgb(black_box(30.0), black_box(1.0), black_box(1.0)))
    });
    group.bench_function("rgb-to-hsl", |b| {
        b.iter(|| rgb_to_hsl(black_box(1.0), black_box(0.5), black_box(0.0)))
    });
    group.bench_function("hsl-to-rgb", |b| {
        b.iter(|| hsl_to_rgb(black_box(30.0), black_box(1.0), black_box(0.5)))
    });

    group.finish();

    // The integer conversions add scaling, clamping, and rounding.
    let mut group = c.benchmark_group("int");

    group.bench_function("rgb-to-hsv", |b| {
        b.iter(|| rgb_to_hsv_int(black_box(255), black_box(128), black_box(0)))
    });
    group.bench_function("hsv-to-rgb", |b| {
        b.iter(|| hsv_to_rgb_int(black_box(30), black_box(100), black_box(100)))
    });
    group.bench_function("rgb-to-hsl", |b| {
        b.iter(|| rgb_to_hsl_int(black_box(255), black_box(128), black_box(0)))
    });
    group.bench_function("hsl-to-rgb", |b| {
        b.iter(|| hsl_to_rgb_int(black_box(30), black_box(100), black_box(50)))
    });

    group.finish();

    // Round trip a slice of the 24-bit RGB cube through HSL.
    let mut group = c.benchmark_group("round-trip");
    group.sample_size(10);

    group.bench_function("hsl-cube", |b| {
        b.iter_batched(
            || (0..=255).step_by(15).collect::<Vec<i32>>(),
            |levels| {
                let mut last = RgbInt::default();
                for &red in &levels {
                    for &green in &levels {
                        for &blue in &levels {
                            last = rgb_to_hsl_int(red, green, blue).to_rgb();
                        }
                    }
                }
                last
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
