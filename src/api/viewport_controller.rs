use tracing::debug;

use crate::core::{AxisSelection, CoordinateMapper, SampleHit, Viewport};
use crate::error::PlotResult;
use crate::render::Renderer;

use super::engine::PlotEngine;
use super::invalidation::InvalidationTopic;

impl<R: Renderer> PlotEngine<R> {
    /// Frames all stored series with the configured margin.
    ///
    /// On error (no data, zero-span data) the viewport is left untouched.
    pub fn fit_to_data(&mut self) -> PlotResult<()> {
        self.viewport
            .fit_to_data(self.store.bounds(), self.config.fit_margin)?;
        debug!(viewport = ?self.viewport, "fit viewport to data");
        self.invalidate(InvalidationTopic::Viewport);
        Ok(())
    }

    /// Expands one axis so data units are square on screen.
    pub fn fit_aspect(&mut self) -> PlotResult<()> {
        self.viewport.fit_aspect(self.plot_area.aspect_ratio())?;
        debug!(viewport = ?self.viewport, "fit viewport aspect");
        self.invalidate(InvalidationTopic::Viewport);
        Ok(())
    }

    /// Pans by a pixel delta measured against the current plot area.
    pub fn pan_by_pixels(&mut self, dx_px: f64, dy_px: f64, axes: AxisSelection) -> PlotResult<()> {
        if dx_px == 0.0 && dy_px == 0.0 {
            return Ok(());
        }
        self.viewport.pan(dx_px, dy_px, self.plot_area, axes)?;
        self.invalidate(InvalidationTopic::Viewport);
        Ok(())
    }

    /// Scales the selected spans around the viewport center.
    pub fn zoom(&mut self, factor: f64, axes: AxisSelection) -> PlotResult<()> {
        self.viewport.zoom(factor, axes)?;
        self.invalidate(InvalidationTopic::Viewport);
        Ok(())
    }

    /// Replaces the viewport outright.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if self.viewport != viewport {
            self.viewport = viewport;
            self.invalidate(InvalidationTopic::Viewport);
        }
    }

    /// Mapper for the current viewport and plot area.
    pub fn mapper(&self) -> PlotResult<CoordinateMapper> {
        CoordinateMapper::new(self.viewport, self.plot_area)
    }

    pub fn data_to_pixel(&self, x: f64, y: f64) -> PlotResult<(f64, f64)> {
        Ok(self.mapper()?.data_to_pixel(x, y))
    }

    pub fn pixel_to_data(&self, px: f64, py: f64) -> PlotResult<(f64, f64)> {
        Ok(self.mapper()?.pixel_to_data(px, py))
    }

    /// Closest stored sample to a window pixel, within `max_distance_px`.
    pub fn nearest_sample(
        &self,
        px: f64,
        py: f64,
        max_distance_px: f64,
    ) -> PlotResult<Option<SampleHit>> {
        Ok(self
            .mapper()?
            .nearest_sample(&self.store, px, py, max_distance_px))
    }
}
