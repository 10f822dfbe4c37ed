use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::types::{DataBounds, DataPoint};
use crate::error::{PlotError, PlotResult};
use crate::render::Color;

/// Stable identifier issued by `SeriesStore::push`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeriesId(u64);

impl SeriesId {
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Per-series drawing attributes.
///
/// A zero `point_radius` hides sample markers; a zero `line_width` hides the
/// connecting polyline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub point_radius: f64,
    pub point_color: Color,
    pub line_width: f64,
    pub line_color: Color,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            point_radius: 0.0,
            point_color: Color::BLACK,
            line_width: 1.5,
            line_color: Color::BLACK,
        }
    }
}

impl SeriesStyle {
    pub fn validate(self) -> PlotResult<Self> {
        if !self.point_radius.is_finite() || self.point_radius < 0.0 {
            return Err(PlotError::InvalidData(
                "series point radius must be finite and >= 0".to_owned(),
            ));
        }
        if !self.line_width.is_finite() || self.line_width < 0.0 {
            return Err(PlotError::InvalidData(
                "series line width must be finite and >= 0".to_owned(),
            ));
        }
        self.point_color.validate()?;
        self.line_color.validate()?;
        Ok(self)
    }
}

/// Immutable sampled path.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    points: Vec<DataPoint>,
    style: SeriesStyle,
    bounds: DataBounds,
}

impl Series {
    /// Samples `function` at `samples` evenly spaced abscissae over `[min, max]`.
    ///
    /// Both endpoints are included. A single sample is taken at `min`.
    pub fn from_function<F>(mut function: F, min: f64, max: f64, samples: usize) -> PlotResult<Self>
    where
        F: FnMut(f64) -> f64,
    {
        if !min.is_finite() || !max.is_finite() {
            return Err(PlotError::InvalidData(
                "sampling interval must be finite".to_owned(),
            ));
        }

        let last = samples.saturating_sub(1).max(1) as f64;
        let points = (0..samples)
            .map(|index| {
                let t = index as f64 / last;
                let x = min * (1.0 - t) + max * t;
                DataPoint::new(x, function(x))
            })
            .collect();
        trace!(samples, min, max, "sampled function series");
        Ok(Self::from_points(points))
    }

    /// Copies paired coordinate sequences. Both must have the same length.
    pub fn from_xy(xs: &[f64], ys: &[f64]) -> PlotResult<Self> {
        if xs.len() != ys.len() {
            return Err(PlotError::InvalidData(format!(
                "x/y sequences must have equal length (x={}, y={})",
                xs.len(),
                ys.len()
            )));
        }

        let points = xs
            .iter()
            .zip(ys)
            .map(|(&x, &y)| DataPoint::new(x, y))
            .collect();
        Ok(Self::from_points(points))
    }

    #[must_use]
    pub fn from_points(points: Vec<DataPoint>) -> Self {
        let bounds = DataBounds::from_points(&points);
        Self {
            points,
            style: SeriesStyle::default(),
            bounds,
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: SeriesStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn style(&self) -> SeriesStyle {
        self.style
    }

    #[must_use]
    pub fn bounds(&self) -> DataBounds {
        self.bounds
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Ordered, append-only collection of series.
#[derive(Debug, Clone, Default)]
pub struct SeriesStore {
    series: IndexMap<SeriesId, Series>,
    next_id: u64,
}

impl SeriesStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a series and returns its identifier.
    pub fn push(&mut self, series: Series) -> SeriesId {
        let id = SeriesId(self.next_id);
        self.next_id += 1;
        debug!(
            series_id = id.get(),
            samples = series.len(),
            "series added"
        );
        self.series.insert(id, series);
        id
    }

    #[must_use]
    pub fn get(&self, id: SeriesId) -> Option<&Series> {
        self.series.get(&id)
    }

    /// Iterates series in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (SeriesId, &Series)> {
        self.series.iter().map(|(id, series)| (*id, series))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.series.values().map(Series::len).sum()
    }

    /// Removes every series. Identifiers are never reused.
    pub fn clear(&mut self) {
        debug!(removed = self.series.len(), "series store cleared");
        self.series.clear();
    }

    /// Union of all series bounds.
    #[must_use]
    pub fn bounds(&self) -> DataBounds {
        self.series
            .values()
            .map(Series::bounds)
            .fold(DataBounds::Empty, DataBounds::merge)
    }
}
