use std::thread;

use approx::assert_relative_eq;
use plotter::api::{
    EventSource, FramePacing, InputEvent, Key, PlotConfig, PlotEngine, PlotRunner, ScriptedEvents,
};
use plotter::core::Series;
use plotter::render::NullRenderer;
use plotter::PlotError;

fn unpaced_engine() -> PlotEngine<NullRenderer> {
    let config = PlotConfig::default().with_frame_pacing(FramePacing::DisplaySync);
    PlotEngine::new(NullRenderer::default(), config).expect("engine init")
}

/// Event source that never produces input.
struct Idle;

impl EventSource for Idle {
    fn poll_events(&mut self, _events: &mut Vec<InputEvent>) {}
}

#[test]
fn scripted_run_fits_data_then_closes() {
    let mut engine = unpaced_engine();
    engine
        .plot_function(|x| x * x, -1.0, 1.0, 21)
        .expect("series");

    let events = ScriptedEvents::new([
        vec![],
        vec![InputEvent::MouseMoved { x: 200.0, y: 200.0 }],
    ]);
    let mut runner = PlotRunner::new(engine, events);
    let summary = runner.run().expect("run");

    // Two scripted frames plus the frame that delivers `CloseRequested`.
    assert_eq!(summary.frames, 3);
    assert_eq!(summary.frames_rendered, 1);

    let engine = runner.into_engine();
    let (x_min, x_max) = engine.viewport().x_range();
    let (y_min, y_max) = engine.viewport().y_range();
    assert_relative_eq!(x_min, -1.4, max_relative = 1e-12);
    assert_relative_eq!(x_max, 1.4, max_relative = 1e-12);
    assert_relative_eq!(y_min, -0.2, max_relative = 1e-12);
    assert_relative_eq!(y_max, 1.2, max_relative = 1e-12);
    assert_eq!(engine.renderer().frames_rendered, 1);
}

#[test]
fn escape_ends_run_early() {
    let events = ScriptedEvents::new([
        vec![InputEvent::KeyPressed(Key::Escape)],
        vec![],
        vec![],
    ]);
    let mut runner = PlotRunner::new(unpaced_engine(), events);
    let summary = runner.run().expect("run");
    assert_eq!(summary.frames, 1);
}

#[test]
fn run_without_data_keeps_default_view() {
    let mut runner = PlotRunner::new(unpaced_engine(), ScriptedEvents::default());
    let summary = runner.run().expect("run");
    assert_eq!(summary.frames, 1);
    assert_eq!(runner.engine().viewport().x_range(), (-10.0, 10.0));
}

#[test]
fn fixed_pacing_still_terminates() {
    let config = PlotConfig::default().with_frame_pacing(FramePacing::Fixed { fps: 500.0 });
    let engine = PlotEngine::new(NullRenderer::default(), config).expect("engine init");
    let mut runner = PlotRunner::new(engine, ScriptedEvents::new([vec![], vec![]]));
    assert_eq!(runner.run().expect("run").frames, 3);
}

#[test]
fn series_handed_off_from_another_thread_are_plotted() {
    let engine = unpaced_engine();
    let sender = engine.series_sender();
    thread::spawn(move || {
        let series = Series::from_xy(&[0.0, 10.0], &[0.0, 5.0]).expect("series");
        sender.send(series)
    })
    .join()
    .expect("producer thread")
    .expect("send");

    let handle = PlotRunner::new(engine, ScriptedEvents::new([vec![]]))
        .spawn()
        .expect("spawn");
    let (summary, engine) = handle.join().expect("join");

    assert_eq!(summary.frames, 2);
    assert_eq!(engine.series().len(), 1);
    let (x_min, x_max) = engine.viewport().x_range();
    assert_relative_eq!(x_min, -2.0);
    assert_relative_eq!(x_max, 12.0);
}

#[test]
fn stop_token_ends_spawned_loop() {
    let runner = PlotRunner::new(unpaced_engine(), Idle);
    let token = runner.stop_token();
    let handle = runner.spawn().expect("spawn");
    token.request_stop();
    let (summary, engine) = handle.join().expect("join");
    assert!(engine.renderer().frames_rendered as u64 <= summary.frames);
    assert!(!engine.is_stop_requested());
}

#[test]
fn sender_fails_after_engine_is_dropped() {
    let engine = unpaced_engine();
    let sender = engine.series_sender();
    drop(engine);
    let series = Series::from_xy(&[0.0], &[0.0]).expect("series");
    assert!(matches!(sender.send(series), Err(PlotError::RenderLoop(_))));
}
