use funnel_rs::core::{FunnelLayout, FunnelStage, Slice, SliceBuilder, Viewport};
use funnel_rs::render::NullRenderer;
use funnel_rs::scene::{Scene, SyncParams};
use funnel_rs::{FunnelChart, FunnelSettings};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn stages(count: usize) -> Vec<FunnelStage> {
    (0..count)
        .map(|i| {
            FunnelStage::new(format!("stage-{i}"), format!("Stage {i}"), (count - i) as f64 * 10.0)
                .with_color("#1f77b4")
        })
        .collect()
}

fn slices(count: usize) -> Vec<Slice> {
    SliceBuilder::default()
        .build(&stages(count))
        .expect("valid stages")
}

fn bench_layout_2k(c: &mut Criterion) {
    let settings = FunnelSettings::new(Viewport::new(1600, 900)).with_depth(5.0, 3.0, false);
    let input = settings.layout_input();
    let slices = slices(2_000);

    c.bench_function("layout_2k", |b| {
        b.iter(|| {
            let _ = FunnelLayout::compute(black_box(&input), black_box(&slices));
        })
    });
}

fn bench_scene_resync_200(c: &mut Criterion) {
    let settings = FunnelSettings::new(Viewport::new(1600, 900));
    let slices = slices(200);
    let layout = FunnelLayout::compute(&settings.layout_input(), &slices);
    let params = SyncParams {
        layout: &layout,
        style: &settings.style,
        animation: settings.animation_duration(),
    };
    let mut scene = Scene::new();
    scene.sync(&slices, params);

    c.bench_function("scene_resync_200", |b| {
        b.iter(|| {
            let _ = scene.sync(black_box(&slices), params);
        })
    });
}

fn bench_chart_render_and_frame_200(c: &mut Criterion) {
    let settings = FunnelSettings::new(Viewport::new(1600, 900)).with_depth(5.0, 3.0, true);
    let mut chart =
        FunnelChart::new(NullRenderer::default(), settings.clone()).expect("chart init");
    let forward = slices(200);
    let mut backward = forward.clone();
    backward.reverse();

    c.bench_function("chart_render_and_frame_200", |b| {
        let mut flip = false;
        b.iter(|| {
            flip = !flip;
            let input = if flip { &forward } else { &backward };
            chart
                .render(black_box(input), settings.clone())
                .expect("render should succeed");
            chart.draw().expect("draw should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_layout_2k,
    bench_scene_resync_200,
    bench_chart_render_and_frame_200
);
criterion_main!(benches);
