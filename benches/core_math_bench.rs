use criterion::{Criterion, criterion_group, criterion_main};
use plotter::api::{InputEvent, PlotConfig, PlotEngine};
use plotter::core::{CoordinateMapper, PlotArea, Viewport, plan_ticks};
use plotter::interaction::MouseButton;
use plotter::render::NullRenderer;
use std::hint::black_box;

fn bench_mapper_round_trip(c: &mut Criterion) {
    let viewport = Viewport::new(-1_000.0, 9_000.0, -50.0, 2_500.0).expect("valid viewport");
    let plot_area = PlotArea::new(80.0, 1_840.0, 60.0, 1_020.0).expect("valid plot area");
    let mapper = CoordinateMapper::new(viewport, plot_area).expect("valid mapper");

    c.bench_function("mapper_round_trip", |b| {
        b.iter(|| {
            let (px, py) = mapper.data_to_pixel(black_box(4_321.123), black_box(1_234.5));
            let _ = mapper.pixel_to_data(px, py);
        })
    });
}

fn bench_plan_and_generate_ticks(c: &mut Criterion) {
    c.bench_function("plan_and_generate_ticks", |b| {
        b.iter(|| {
            let plan = plan_ticks(black_box(37_123.4), black_box(1_760.0), 60.0)
                .expect("plan should succeed");
            let _ = plan
                .ticks(black_box(-1_234.5), black_box(35_888.9))
                .expect("ticks should succeed");
        })
    });
}

fn bench_frame_build_10k_samples(c: &mut Criterion) {
    let config = PlotConfig::default();
    let mut engine = PlotEngine::new(NullRenderer::default(), config).expect("engine init");
    engine
        .plot_function(|x| (x * 0.01).sin() * x, -5_000.0, 5_000.0, 10_000)
        .expect("series");
    engine.fit_to_data().expect("fit");

    c.bench_function("frame_build_10k_samples", |b| {
        b.iter(|| {
            let _ = engine.build_frame().expect("frame should build");
        })
    });
}

fn bench_drag_step_frame(c: &mut Criterion) {
    let mut engine =
        PlotEngine::new(NullRenderer::default(), PlotConfig::default()).expect("engine init");
    engine
        .plot_function(f64::sin, -10.0, 10.0, 1_000)
        .expect("series");
    engine
        .step_frame(&[
            InputEvent::MouseMoved { x: 250.0, y: 250.0 },
            InputEvent::ButtonPressed(MouseButton::Primary),
        ])
        .expect("press");

    let mut offset = 0.0;
    c.bench_function("drag_step_frame", |b| {
        b.iter(|| {
            offset = if offset > 0.0 { 0.0 } else { 1.0 };
            let _ = engine
                .step_frame(&[InputEvent::MouseMoved {
                    x: 250.0 + offset,
                    y: 250.0,
                }])
                .expect("frame");
        })
    });
}

criterion_group!(
    benches,
    bench_mapper_round_trip,
    bench_plan_and_generate_ticks,
    bench_frame_build_10k_samples,
    bench_drag_step_frame
);
criterion_main!(benches);
