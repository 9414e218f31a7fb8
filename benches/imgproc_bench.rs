use makespc::image::*;
use makespc::imgproc::{bitpack, dithering, DitheringMethod};

use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bitpack_bench(c: &mut Criterion) {
    c.bench_function("Pack spc, 720*256", |b| {
        let mut img = ImageBuffer::new(ImageFormat::Mono1Bpp, 720, 256, None);
        img.fill(0x5a);
        b.iter(|| black_box(bitpack::pack_spc(&img).unwrap()));
    });
}

fn dithering_bench(c: &mut Criterion) {
    c.bench_function("Floyd-Steinberg, 720*256", |b| {
        let mut img = ImageBuffer::new(ImageFormat::Mono8Bpp, 720, 256, None);
        img.fill(42);
        b.iter(|| black_box(dithering::dither(&img, DitheringMethod::FloydSteinberg)));
    });
}

criterion_group!(benches, bitpack_bench, dithering_bench);
criterion_main!(benches);
