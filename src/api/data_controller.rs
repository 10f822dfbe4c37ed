use std::sync::mpsc::{SendError, Sender};

use tracing::{debug, trace};

use crate::core::{Series, SeriesId};
use crate::error::{PlotError, PlotResult};
use crate::render::Renderer;

use super::engine::PlotEngine;
use super::invalidation::InvalidationTopic;

/// Hands series to an engine owned by another thread.
///
/// Series sent here are added at the start of the engine's next frame.
#[derive(Debug, Clone)]
pub struct SeriesSender {
    tx: Sender<Series>,
}

impl SeriesSender {
    /// Queues `series`. Fails once the engine has been dropped.
    pub fn send(&self, series: Series) -> PlotResult<()> {
        series.style().validate()?;
        self.tx.send(series).map_err(|SendError(_)| {
            PlotError::RenderLoop("plot engine is gone; series dropped".to_owned())
        })
    }
}

impl<R: Renderer> PlotEngine<R> {
    /// Adds a series with its own style.
    pub fn add_series(&mut self, series: Series) -> PlotResult<SeriesId> {
        series.style().validate()?;
        let id = self.store.push(series);
        self.invalidate(InvalidationTopic::Series);
        Ok(id)
    }

    /// Samples `function` at `samples` evenly spaced x in `[min, max]` and
    /// stores the result with the default series style.
    pub fn plot_function<F>(
        &mut self,
        function: F,
        min: f64,
        max: f64,
        samples: usize,
    ) -> PlotResult<SeriesId>
    where
        F: FnMut(f64) -> f64,
    {
        let series = Series::from_function(function, min, max, samples)?
            .with_style(self.config.default_series_style);
        self.add_series(series)
    }

    /// Stores paired x/y samples with the default series style.
    pub fn plot_xy(&mut self, xs: &[f64], ys: &[f64]) -> PlotResult<SeriesId> {
        let series = Series::from_xy(xs, ys)?.with_style(self.config.default_series_style);
        self.add_series(series)
    }

    pub fn clear_series(&mut self) {
        if self.store.is_empty() {
            return;
        }
        self.store.clear();
        debug!("series cleared");
        self.invalidate(InvalidationTopic::Series);
    }

    /// Sender for handing series over from other threads.
    #[must_use]
    pub fn series_sender(&self) -> SeriesSender {
        SeriesSender {
            tx: self.handoff_tx.clone(),
        }
    }

    /// Moves every queued hand-off series into the store. Returns how many.
    pub fn drain_series_handoff(&mut self) -> usize {
        let mut drained = 0;
        while let Ok(series) = self.handoff_rx.try_recv() {
            self.store.push(series);
            drained += 1;
        }
        if drained > 0 {
            trace!(drained, "series hand-off drained");
            self.invalidate(InvalidationTopic::Series);
        }
        drained
    }
}
