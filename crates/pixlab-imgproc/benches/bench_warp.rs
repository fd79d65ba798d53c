use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use pixlab_image::{Color, Raster};
use pixlab_imgproc::{
    interpolation::InterpolationMode,
    warp::{get_scale_matrix2d, warp_affine},
};

fn bench_warp_scale(c: &mut Criterion) {
    let mut group = c.benchmark_group("WarpScale");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        // input raster
        let src = Raster::from_size_val([*width, *height].into(), Color::rgb(10, 20, 30)).unwrap();

        // output raster, twice as large
        let dst = Raster::from_size_val([*width * 2, *height * 2].into(), Color::WHITE).unwrap();
        let m = get_scale_matrix2d(2.0, 2.0);

        for mode in [InterpolationMode::Nearest, InterpolationMode::Bilinear] {
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", mode), &parameter_string),
                &(&src, &dst, m),
                |b, i| {
                    let (src, mut dst, m) = (i.0.clone(), i.1.clone(), i.2);
                    b.iter(|| {
                        warp_affine(
                            black_box(&src),
                            black_box(&mut dst),
                            black_box(&m),
                            black_box(mode),
                        )
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_warp_scale);
criterion_main!(benches);
