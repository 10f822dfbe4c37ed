use ordered_float::OrderedFloat;

use crate::core::series::{SeriesId, SeriesStore};
use crate::core::types::{DataPoint, PlotArea};
use crate::core::viewport::Viewport;
use crate::error::{PlotError, PlotResult};

/// Affine mapping between data space and pixel space.
///
/// Pixel Y grows downward, so `view.y_max` lands on `plot.y_min`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    viewport: Viewport,
    plot_area: PlotArea,
}

/// Closest sample found by `CoordinateMapper::nearest_sample`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleHit {
    pub series_id: SeriesId,
    pub sample_index: usize,
    pub point: DataPoint,
    pub distance_px: f64,
}

impl CoordinateMapper {
    pub fn new(viewport: Viewport, plot_area: PlotArea) -> PlotResult<Self> {
        if !plot_area.is_valid() {
            return Err(PlotError::InvalidPlotArea {
                width: plot_area.width(),
                height: plot_area.height(),
            });
        }
        Ok(Self {
            viewport,
            plot_area,
        })
    }

    #[must_use]
    pub fn viewport(self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn plot_area(self) -> PlotArea {
        self.plot_area
    }

    #[must_use]
    pub fn x_to_pixel(self, x: f64) -> f64 {
        let (view_min, view_max) = self.viewport.x_range();
        (x - view_min) / (view_max - view_min) * self.plot_area.width() + self.plot_area.x_min
    }

    #[must_use]
    pub fn y_to_pixel(self, y: f64) -> f64 {
        let (view_min, view_max) = self.viewport.y_range();
        (view_max - y) / (view_max - view_min) * self.plot_area.height() + self.plot_area.y_min
    }

    #[must_use]
    pub fn pixel_to_x(self, px: f64) -> f64 {
        let (view_min, view_max) = self.viewport.x_range();
        view_min + (px - self.plot_area.x_min) / self.plot_area.width() * (view_max - view_min)
    }

    #[must_use]
    pub fn pixel_to_y(self, py: f64) -> f64 {
        let (view_min, view_max) = self.viewport.y_range();
        view_max - (py - self.plot_area.y_min) / self.plot_area.height() * (view_max - view_min)
    }

    #[must_use]
    pub fn data_to_pixel(self, x: f64, y: f64) -> (f64, f64) {
        (self.x_to_pixel(x), self.y_to_pixel(y))
    }

    #[must_use]
    pub fn pixel_to_data(self, px: f64, py: f64) -> (f64, f64) {
        (self.pixel_to_x(px), self.pixel_to_y(py))
    }

    /// Maps into coordinates relative to the plot-area origin, as used by the
    /// off-screen series layer.
    #[must_use]
    pub fn data_to_local_pixel(self, x: f64, y: f64) -> (f64, f64) {
        let (px, py) = self.data_to_pixel(x, y);
        (px - self.plot_area.x_min, py - self.plot_area.y_min)
    }

    /// Finds the finite sample closest to a pixel position, within
    /// `max_distance_px`.
    #[must_use]
    pub fn nearest_sample(
        self,
        store: &SeriesStore,
        px: f64,
        py: f64,
        max_distance_px: f64,
    ) -> Option<SampleHit> {
        if !px.is_finite() || !py.is_finite() {
            return None;
        }

        store
            .iter()
            .flat_map(|(series_id, series)| {
                series
                    .points()
                    .iter()
                    .enumerate()
                    .filter(|(_, point)| point.is_finite())
                    .map(move |(sample_index, point)| (series_id, sample_index, *point))
            })
            .map(|(series_id, sample_index, point)| {
                let (sx, sy) = self.data_to_pixel(point.x, point.y);
                SampleHit {
                    series_id,
                    sample_index,
                    point,
                    distance_px: (sx - px).hypot(sy - py),
                }
            })
            .filter(|hit| hit.distance_px <= max_distance_px)
            .min_by_key(|hit| OrderedFloat(hit.distance_px))
    }
}
