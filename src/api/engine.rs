use std::sync::mpsc::{Receiver, Sender, channel};

use tracing::{debug, trace};

use crate::core::{PlotArea, Series, SeriesStore, Viewport, WindowSize};
use crate::error::PlotResult;
use crate::interaction::InteractionState;
use crate::render::{LayerSurface, RenderFrame, Renderer};

use super::config::PlotConfig;
use super::font::FontAsset;
use super::frame_builder::{AxisTickPlans, FrameInputs, build_render_frame, plan_axis_ticks};
use super::input::InputEvent;
use super::invalidation::{Invalidation, InvalidationTopic};

/// Result of one `PlotEngine::step_frame` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameOutcome {
    pub rendered: bool,
    pub stop_requested: bool,
}

/// Main orchestration facade consumed by host applications.
///
/// `PlotEngine` owns the viewport, plot area, series store and interaction
/// state, applies input and hands finished frames to the renderer. All state is
/// touched from a single thread; other threads hand series over through
/// `series_sender`.
pub struct PlotEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: PlotConfig,
    pub(super) font: Option<FontAsset>,
    pub(super) window: WindowSize,
    pub(super) plot_area: PlotArea,
    pub(super) viewport: Viewport,
    pub(super) store: SeriesStore,
    pub(super) interaction: InteractionState,
    pub(super) tick_plans: AxisTickPlans,
    pub(super) surface: LayerSurface,
    pub(super) invalidation: Invalidation,
    pub(super) stop_requested: bool,
    pub(super) handoff_tx: Sender<Series>,
    pub(super) handoff_rx: Receiver<Series>,
}

impl<R: Renderer> PlotEngine<R> {
    /// Validates `config`, loads the configured font asset and derives the
    /// initial plot area. Any failure aborts construction.
    pub fn new(renderer: R, config: PlotConfig) -> PlotResult<Self> {
        config.validate()?;
        let font = config.font_path.as_deref().map(FontAsset::load).transpose()?;
        let window = config.window_size;
        let plot_area = PlotArea::from_window(window, config.plot_padding)?;
        let viewport = Viewport::default();
        let tick_plans = plan_axis_ticks(viewport, plot_area, &config);
        let (handoff_tx, handoff_rx) = channel();

        debug!(
            title = %config.title,
            width = window.width,
            height = window.height,
            "plot engine created"
        );
        Ok(Self {
            renderer,
            font,
            window,
            plot_area,
            viewport,
            store: SeriesStore::new(),
            interaction: InteractionState::default(),
            tick_plans,
            surface: LayerSurface::for_plot_area(plot_area, 0),
            invalidation: Invalidation::all(),
            stop_requested: false,
            handoff_tx,
            handoff_rx,
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    #[must_use]
    pub fn font(&self) -> Option<&FontAsset> {
        self.font.as_ref()
    }

    #[must_use]
    pub fn window_size(&self) -> WindowSize {
        self.window
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.plot_area
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn series(&self) -> &SeriesStore {
        &self.store
    }

    #[must_use]
    pub fn interaction(&self) -> InteractionState {
        self.interaction
    }

    /// Tick plans as of the last render, or construction.
    #[must_use]
    pub fn tick_plans(&self) -> AxisTickPlans {
        self.tick_plans
    }

    #[must_use]
    pub fn layer_surface(&self) -> LayerSurface {
        self.surface
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    #[must_use]
    pub fn is_stop_requested(&self) -> bool {
        self.stop_requested
    }

    #[must_use]
    pub fn pending_invalidation(&self) -> Invalidation {
        self.invalidation
    }

    #[must_use]
    pub fn has_pending_invalidation(&self) -> bool {
        self.invalidation.is_dirty()
    }

    pub fn request_redraw(&mut self) {
        self.invalidate(InvalidationTopic::General);
    }

    pub fn request_stop(&mut self) {
        self.stop_requested = true;
    }

    pub(super) fn invalidate(&mut self, topic: InvalidationTopic) {
        self.invalidation.insert(topic);
    }

    /// Builds the frame for the current state without drawing it.
    pub fn build_frame(&self) -> PlotResult<RenderFrame> {
        build_render_frame(FrameInputs {
            window: self.window,
            plot_area: self.plot_area,
            viewport: self.viewport,
            tick_plans: self.tick_plans,
            surface: self.surface,
            store: &self.store,
            config: &self.config,
        })
    }

    /// Re-plans ticks and draws unconditionally, then clears invalidation.
    pub fn render(&mut self) -> PlotResult<()> {
        self.tick_plans = plan_axis_ticks(self.viewport, self.plot_area, &self.config);
        let frame = self.build_frame()?;
        self.renderer.render(&frame)?;
        let cleared = self.invalidation.take();
        trace!(
            gridlines = frame.gridlines.len(),
            labels = frame.labels.len(),
            segments = frame.series_layer.segment_count(),
            viewport_changed = cleared.contains(InvalidationTopic::Viewport),
            "frame rendered"
        );
        Ok(())
    }

    /// Draws only when something changed since the last draw.
    pub fn render_if_invalidated(&mut self) -> PlotResult<bool> {
        if !self.invalidation.is_dirty() {
            return Ok(false);
        }
        self.render()?;
        Ok(true)
    }

    /// Runs one frame: takes handed-off series, applies the whole input
    /// batch, then re-plans and draws if anything changed.
    pub fn step_frame(&mut self, events: &[InputEvent]) -> PlotResult<FrameOutcome> {
        self.drain_series_handoff();
        for event in events {
            self.handle_event(*event);
        }
        let rendered = self.render_if_invalidated()?;
        Ok(FrameOutcome {
            rendered,
            stop_requested: self.stop_requested,
        })
    }
}
