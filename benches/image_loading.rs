// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced::Size;
use std::hint::black_box;
use tree_lens::media::{self, ImageData};
use tree_lens::ui::state::{RotationAngle, ViewTransform};
use tree_lens::ui::viewer::ViewSnapshot;

fn write_sample(dir: &std::path::Path) -> std::path::PathBuf {
    let (width, height) = (1024, 768);
    let pixels: Vec<u8> = (0..width * height)
        .flat_map(|i| {
            let v = (i % 251) as u8;
            [v, v.wrapping_mul(3), v.wrapping_mul(7), 255]
        })
        .collect();
    let snapshot = ViewSnapshot {
        transform: ViewTransform::IDENTITY,
        image: ImageData::from_rgba(width, height, pixels).expect("valid sample buffer"),
        rotation: RotationAngle::ZERO,
        viewport: Size::new(width as f32, height as f32),
    };
    let path = dir.join("sample.png");
    media::save_view(&snapshot, &path).expect("sample should encode");
    path
}

fn image_loading_benchmark(c: &mut Criterion) {
    let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
    let image_path = write_sample(temp_dir.path());

    let mut group = c.benchmark_group("image_loading");
    group.bench_function("load_sample_png", |b| {
        b.iter(|| {
            let _ = black_box(media::load_image(&image_path).expect("sample should decode"));
        });
    });
    group.finish();
}

criterion_group!(benches, image_loading_benchmark);
criterion_main!(benches);
