// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use extension_icons::icon_size::IconSize;
use extension_icons::{camera, svg};
use std::hint::black_box;
use std::path::PathBuf;

fn icon_rendering_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("icon_rendering");
    let size = IconSize::new(128).expect("128 is a valid size");

    let svg_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/icon.svg");
    let tree = svg::load_svg(&svg_path).expect("sample svg should parse");

    group.bench_function("rasterize_svg_128", |b| {
        b.iter(|| black_box(svg::render(&tree, size).expect("render should succeed")));
    });

    group.bench_function("draw_camera_128", |b| {
        b.iter(|| black_box(camera::render(size).expect("render should succeed")));
    });

    group.finish();
}

criterion_group!(benches, icon_rendering_benchmark);
criterion_main!(benches);
