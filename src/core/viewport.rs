use serde::{Deserialize, Deserializer, Serialize};

use crate::core::types::{DataBounds, PlotArea};
use crate::error::{PlotError, PlotResult};

/// Which viewport axes a pan or zoom gesture affects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum AxisSelection {
    #[default]
    Both,
    XOnly,
    YOnly,
}

impl AxisSelection {
    #[must_use]
    pub const fn includes_x(self) -> bool {
        matches!(self, Self::Both | Self::XOnly)
    }

    #[must_use]
    pub const fn includes_y(self) -> bool {
        matches!(self, Self::Both | Self::YOnly)
    }
}

/// Data-space rectangle currently mapped onto the plot area.
///
/// Both axes are always finite and strictly ordered. Every mutating operation
/// validates its result first and leaves `self` untouched on failure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            x_min: -10.0,
            x_max: 10.0,
            y_min: -10.0,
            y_max: 10.0,
        }
    }
}

impl<'de> Deserialize<'de> for Viewport {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Bounds {
            x_min: f64,
            x_max: f64,
            y_min: f64,
            y_max: f64,
        }

        let bounds = Bounds::deserialize(deserializer)?;
        Self::new(bounds.x_min, bounds.x_max, bounds.y_min, bounds.y_max)
            .map_err(serde::de::Error::custom)
    }
}

impl Viewport {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> PlotResult<Self> {
        let candidate = Self {
            x_min,
            x_max,
            y_min,
            y_max,
        };
        candidate.validated()
    }

    #[must_use]
    pub fn x_range(self) -> (f64, f64) {
        (self.x_min, self.x_max)
    }

    #[must_use]
    pub fn y_range(self) -> (f64, f64) {
        (self.y_min, self.y_max)
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.y_max - self.y_min
    }

    #[must_use]
    pub fn center(self) -> (f64, f64) {
        (
            0.5 * (self.x_min + self.x_max),
            0.5 * (self.y_min + self.y_max),
        )
    }

    #[must_use]
    pub fn aspect_ratio(self) -> f64 {
        self.width() / self.height()
    }

    /// Frames `bounds` with `margin_fraction` of its span added on each side.
    ///
    /// Fails with `EmptyDataSet` when there are no samples and with
    /// `DegenerateViewport` when an axis of the data has zero span.
    pub fn fit_to_data(&mut self, bounds: DataBounds, margin_fraction: f64) -> PlotResult<()> {
        let Some(bbox) = bounds.bounding_box() else {
            return Err(PlotError::EmptyDataSet);
        };
        if !margin_fraction.is_finite() || margin_fraction < 0.0 {
            return Err(PlotError::InvalidData(
                "fit margin fraction must be finite and >= 0".to_owned(),
            ));
        }

        let margin_x = margin_fraction * bbox.width();
        let margin_y = margin_fraction * bbox.height();
        *self = Self::new(
            bbox.x_min - margin_x,
            bbox.x_max + margin_x,
            bbox.y_min - margin_y,
            bbox.y_max + margin_y,
        )?;
        Ok(())
    }

    /// Expands the shorter axis so that the viewport matches `plot_aspect_ratio`.
    ///
    /// A viewport wider than the plot area grows in height, anything else grows
    /// in width. The expanded axis keeps its center.
    pub fn fit_aspect(&mut self, plot_aspect_ratio: f64) -> PlotResult<()> {
        if !plot_aspect_ratio.is_finite() || plot_aspect_ratio <= 0.0 {
            return Err(self.degenerate());
        }

        let (center_x, center_y) = self.center();
        let candidate = if self.aspect_ratio() > plot_aspect_ratio {
            let half = 0.5 * self.width() / plot_aspect_ratio;
            Self {
                y_min: center_y - half,
                y_max: center_y + half,
                ..*self
            }
        } else {
            let half = 0.5 * self.height() * plot_aspect_ratio;
            Self {
                x_min: center_x - half,
                x_max: center_x + half,
                ..*self
            }
        };
        *self = candidate.validated()?;
        Ok(())
    }

    /// Translates by a pixel drag delta.
    ///
    /// Content follows the pointer: dragging right moves the viewport left in
    /// data space, dragging down moves it up because pixel Y grows downward.
    pub fn pan(
        &mut self,
        dx_px: f64,
        dy_px: f64,
        plot_area: PlotArea,
        axes: AxisSelection,
    ) -> PlotResult<()> {
        if !dx_px.is_finite() || !dy_px.is_finite() {
            return Err(PlotError::InvalidData(
                "pan delta must be finite".to_owned(),
            ));
        }
        if !plot_area.is_valid() {
            return Err(PlotError::InvalidPlotArea {
                width: plot_area.width(),
                height: plot_area.height(),
            });
        }

        let mut candidate = *self;
        if axes.includes_x() {
            let move_x = self.width() * dx_px / plot_area.width();
            candidate.x_min -= move_x;
            candidate.x_max -= move_x;
        }
        if axes.includes_y() {
            let move_y = self.height() * dy_px / plot_area.height();
            candidate.y_min += move_y;
            candidate.y_max += move_y;
        }
        *self = candidate.validated()?;
        Ok(())
    }

    /// Scales the selected spans by `factor` around the viewport center.
    ///
    /// `factor < 1` zooms in, `factor > 1` zooms out.
    pub fn zoom(&mut self, factor: f64, axes: AxisSelection) -> PlotResult<()> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(self.degenerate());
        }

        let (center_x, center_y) = self.center();
        let mut candidate = *self;
        if axes.includes_x() {
            let half = 0.5 * self.width() * factor;
            candidate.x_min = center_x - half;
            candidate.x_max = center_x + half;
        }
        if axes.includes_y() {
            let half = 0.5 * self.height() * factor;
            candidate.y_min = center_y - half;
            candidate.y_max = center_y + half;
        }
        *self = candidate.validated()?;
        Ok(())
    }

    fn validated(self) -> PlotResult<Self> {
        let finite = self.x_min.is_finite()
            && self.x_max.is_finite()
            && self.y_min.is_finite()
            && self.y_max.is_finite();
        // Spans must also stay finite and representable after the subtraction.
        if !finite
            || self.x_min >= self.x_max
            || self.y_min >= self.y_max
            || !self.width().is_finite()
            || !self.height().is_finite()
        {
            return Err(self.degenerate());
        }
        Ok(self)
    }

    fn degenerate(self) -> PlotError {
        PlotError::DegenerateViewport {
            x_min: self.x_min,
            x_max: self.x_max,
            y_min: self.y_min,
            y_max: self.y_max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{BoundingBox, DataPoint};

    fn bounds(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> DataBounds {
        DataBounds::Bounded(BoundingBox {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    #[test]
    fn new_rejects_degenerate_ranges() {
        assert!(Viewport::new(1.0, 1.0, 0.0, 1.0).is_err());
        assert!(Viewport::new(0.0, 1.0, 2.0, -2.0).is_err());
        assert!(Viewport::new(f64::NAN, 1.0, 0.0, 1.0).is_err());
        assert!(Viewport::new(0.0, f64::INFINITY, 0.0, 1.0).is_err());
    }

    #[test]
    fn fit_to_data_adds_margin() {
        let mut viewport = Viewport::default();
        viewport
            .fit_to_data(bounds(0.0, 10.0, -1.0, 1.0), 0.2)
            .expect("fit");
        let (x_min, x_max) = viewport.x_range();
        let (y_min, y_max) = viewport.y_range();
        assert!((x_min + 2.0).abs() <= 1e-12);
        assert!((x_max - 12.0).abs() <= 1e-12);
        assert!((y_min + 1.4).abs() <= 1e-12);
        assert!((y_max - 1.4).abs() <= 1e-12);
    }

    #[test]
    fn fit_to_empty_or_flat_data_keeps_viewport() {
        let mut viewport = Viewport::new(0.0, 1.0, 0.0, 1.0).expect("viewport");
        let before = viewport;

        let err = viewport
            .fit_to_data(DataBounds::Empty, 0.2)
            .expect_err("empty must fail");
        assert!(matches!(err, PlotError::EmptyDataSet));

        let flat = DataBounds::from_points(&[DataPoint::new(2.0, 5.0), DataPoint::new(4.0, 5.0)]);
        let err = viewport.fit_to_data(flat, 0.2).expect_err("flat must fail");
        assert!(matches!(err, PlotError::DegenerateViewport { .. }));
        assert_eq!(viewport, before);
    }

    #[test]
    fn fit_aspect_expands_height_of_wide_viewport() {
        let mut viewport = Viewport::new(0.0, 40.0, 0.0, 10.0).expect("viewport");
        viewport.fit_aspect(2.0).expect("fit aspect");
        assert_eq!(viewport.x_range(), (0.0, 40.0));
        assert_eq!(viewport.y_range(), (-5.0, 15.0));
    }

    #[test]
    fn zoom_keeps_center_and_scales_span() {
        let mut viewport = Viewport::new(0.0, 10.0, 0.0, 10.0).expect("viewport");
        viewport.zoom(0.5, AxisSelection::Both).expect("zoom");
        assert_eq!(viewport.x_range(), (2.5, 7.5));
        assert_eq!(viewport.y_range(), (2.5, 7.5));

        viewport.zoom(2.0, AxisSelection::YOnly).expect("zoom y");
        assert_eq!(viewport.x_range(), (2.5, 7.5));
        assert_eq!(viewport.y_range(), (0.0, 10.0));
    }

    #[test]
    fn zoom_rejects_non_positive_factor() {
        let mut viewport = Viewport::new(0.0, 10.0, 0.0, 10.0).expect("viewport");
        for factor in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = viewport
                .zoom(factor, AxisSelection::Both)
                .expect_err("invalid factor must fail");
            assert!(matches!(err, PlotError::DegenerateViewport { .. }));
        }
        assert_eq!(viewport.x_range(), (0.0, 10.0));
    }

    #[test]
    fn pan_moves_against_drag_on_x_and_with_drag_on_y() {
        let area = PlotArea::new(0.0, 100.0, 0.0, 100.0).expect("area");
        let mut viewport = Viewport::new(0.0, 100.0, 0.0, 100.0).expect("viewport");
        viewport
            .pan(10.0, 20.0, area, AxisSelection::Both)
            .expect("pan");
        assert_eq!(viewport.x_range(), (-10.0, 90.0));
        assert_eq!(viewport.y_range(), (20.0, 120.0));

        viewport
            .pan(10.0, 20.0, area, AxisSelection::XOnly)
            .expect("pan x");
        assert_eq!(viewport.x_range(), (-20.0, 80.0));
        assert_eq!(viewport.y_range(), (20.0, 120.0));
    }

    #[test]
    fn deserialize_rejects_unordered_ranges() {
        let inverted = r#"{"x_min":5.0,"x_max":1.0,"y_min":0.0,"y_max":1.0}"#;
        assert!(serde_json::from_str::<Viewport>(inverted).is_err());
        let flat = r#"{"x_min":0.0,"x_max":1.0,"y_min":0.0,"y_max":0.0}"#;
        assert!(serde_json::from_str::<Viewport>(flat).is_err());

        let viewport = Viewport::new(-2.0, 3.0, 1.0, 4.0).expect("viewport");
        let json = serde_json::to_string(&viewport).expect("serialize");
        assert_eq!(serde_json::from_str::<Viewport>(&json).expect("parse"), viewport);
    }
}
