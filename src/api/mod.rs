mod config;
mod data_controller;
mod engine;
mod font;
mod frame_builder;
mod input;
mod input_controller;
mod invalidation;
mod label_format;
mod runtime;
mod series_projection;
mod snapshot;
mod viewport_controller;

pub use config::{KeyBindings, PlotConfig, PlotStyle};
pub use data_controller::SeriesSender;
pub use engine::{FrameOutcome, PlotEngine};
pub use font::FontAsset;
pub use frame_builder::{AxisTickPlans, FrameInputs, build_render_frame, plan_axis_ticks};
pub use input::{EventSource, InputEvent, Key, ScriptedEvents};
pub use invalidation::{Invalidation, InvalidationTopic};
pub use label_format::{LabelFormat, MAX_LABEL_PRECISION, format_tick_label};
pub use runtime::{FramePacing, PlotHandle, PlotRunner, RunSummary, StopToken};
pub use series_projection::{project_series, project_series_store};
pub use snapshot::{EngineSnapshot, SeriesSummary};
