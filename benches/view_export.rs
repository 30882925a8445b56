// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced::Size;
use std::hint::black_box;
use tree_lens::media::{self, ImageData};
use tree_lens::ui::state::{RotationDirection, ZoomFactor};
use tree_lens::ui::viewer::Controller;

fn loaded_controller() -> Controller {
    let (width, height) = (800, 600);
    let pixels = [40, 80, 120, 255].repeat((width * height) as usize);
    let image = ImageData::from_rgba(width, height, pixels).expect("valid buffer");

    let mut controller = Controller::new(ZoomFactor::default());
    controller.set_viewport_size(Size::new(1280.0, 720.0));
    controller.load_image(image).expect("image should load");
    controller
}

fn view_export_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("view_export");

    let controller = loaded_controller();
    group.bench_function("rasterize_fitted", |b| {
        b.iter(|| {
            let snapshot = controller.export_view().expect("image displayed");
            black_box(media::rasterize(&snapshot));
        });
    });

    let mut rotated = loaded_controller();
    rotated
        .rotate(RotationDirection::Right)
        .expect("image displayed");
    group.bench_function("rasterize_rotated", |b| {
        b.iter(|| {
            let snapshot = rotated.export_view().expect("image displayed");
            black_box(media::rasterize(&snapshot));
        });
    });

    group.finish();
}

criterion_group!(benches, view_export_benchmark);
criterion_main!(benches);
