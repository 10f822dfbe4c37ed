use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{DataBounds, PlotArea, SeriesStyle, Viewport, WindowSize};
use crate::error::{PlotError, PlotResult};
use crate::interaction::FocusRegion;
use crate::render::{LayerSurface, Renderer};

use super::engine::PlotEngine;
use super::frame_builder::AxisTickPlans;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub samples: usize,
    pub bounds: DataBounds,
    pub style: SeriesStyle,
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub title: String,
    pub window: WindowSize,
    pub plot_area: PlotArea,
    pub viewport: Viewport,
    pub tick_plans: AxisTickPlans,
    pub surface: LayerSurface,
    pub focus: FocusRegion,
    pub click_focus: FocusRegion,
    /// Keyed by series id, in insertion order.
    pub series: IndexMap<u64, SeriesSummary>,
}

impl<R: Renderer> PlotEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            title: self.config.title.clone(),
            window: self.window,
            plot_area: self.plot_area,
            viewport: self.viewport,
            tick_plans: self.tick_plans,
            surface: self.surface,
            focus: self.interaction.focus(),
            click_focus: self.interaction.click_focus(),
            series: self
                .store
                .iter()
                .map(|(id, series)| {
                    (
                        id.get(),
                        SeriesSummary {
                            samples: series.len(),
                            bounds: series.bounds(),
                            style: series.style(),
                        },
                    )
                })
                .collect(),
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| PlotError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
