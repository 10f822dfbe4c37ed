//! plotter-rs: interactive 2D plotting core.
//!
//! The crate keeps viewport math, tick planning and input handling apart from
//! drawing: `PlotEngine` turns state into a deterministic `RenderFrame` and any
//! `Renderer` backend draws it.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{PlotConfig, PlotEngine, PlotRunner};
pub use error::{PlotError, PlotResult};
