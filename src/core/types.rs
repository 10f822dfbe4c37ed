use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Plot axis identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

/// Window size in physical pixels as reported by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl WindowSize {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Returns `true` when the pixel position lies inside `[0, width) x [0, height)`.
    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= 0.0 && x < f64::from(self.width) && y >= 0.0 && y < f64::from(self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Pixel-space rectangle the viewport is mapped onto.
///
/// Pixel origin is the window's top-left corner with Y growing downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl PlotArea {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> PlotResult<Self> {
        let area = Self {
            x_min,
            x_max,
            y_min,
            y_max,
        };
        if !area.is_valid() {
            return Err(PlotError::InvalidPlotArea {
                width: x_max - x_min,
                height: y_max - y_min,
            });
        }
        Ok(area)
    }

    /// Derives the plot area as the window minus `padding` on every side.
    pub fn from_window(window: WindowSize, padding: f64) -> PlotResult<Self> {
        if !padding.is_finite() || padding < 0.0 {
            return Err(PlotError::InvalidData(
                "plot padding must be finite and >= 0".to_owned(),
            ));
        }
        let width = f64::from(window.width);
        let height = f64::from(window.height);
        Self::new(padding, width - padding, padding, height - padding)
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.x_min.is_finite()
            && self.x_max.is_finite()
            && self.y_min.is_finite()
            && self.y_max.is_finite()
            && self.x_max > self.x_min
            && self.y_max > self.y_min
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
    pub fn aspect_ratio(self) -> f64 {
        self.width() / self.height()
    }

    /// Half-open containment test, matching pixel hit-testing.
    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        self.contains_x(x) && self.contains_y(y)
    }

    #[must_use]
    pub fn contains_x(self, x: f64) -> bool {
        x >= self.x_min && x < self.x_max
    }

    #[must_use]
    pub fn contains_y(self, y: f64) -> bool {
        y >= self.y_min && y < self.y_max
    }

    /// Pixel size of the off-screen layer that backs this area.
    #[must_use]
    pub fn surface_size(self) -> (u32, u32) {
        (to_surface_extent(self.width()), to_surface_extent(self.height()))
    }
}

fn to_surface_extent(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    value.round().min(f64::from(u32::MAX)) as u32
}

/// Data-space extents of a non-empty sample set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl BoundingBox {
    #[must_use]
    pub fn from_point(point: DataPoint) -> Self {
        Self {
            x_min: point.x,
            x_max: point.x,
            y_min: point.y,
            y_max: point.y,
        }
    }

    pub fn include(&mut self, point: DataPoint) {
        self.x_min = self.x_min.min(point.x);
        self.x_max = self.x_max.max(point.x);
        self.y_min = self.y_min.min(point.y);
        self.y_max = self.y_max.max(point.y);
    }

    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            x_min: self.x_min.min(other.x_min),
            x_max: self.x_max.max(other.x_max),
            y_min: self.y_min.min(other.y_min),
            y_max: self.y_max.max(other.y_max),
        }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.y_max - self.y_min
    }
}

/// Bounding box of a sample set, with emptiness made explicit.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum DataBounds {
    #[default]
    Empty,
    Bounded(BoundingBox),
}

impl DataBounds {
    /// Scans points, ignoring non-finite samples.
    #[must_use]
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a DataPoint>) -> Self {
        points
            .into_iter()
            .copied()
            .fold(Self::Empty, |bounds, point| bounds.including(point))
    }

    #[must_use]
    pub fn including(self, point: DataPoint) -> Self {
        if !point.is_finite() {
            return self;
        }
        match self {
            Self::Empty => Self::Bounded(BoundingBox::from_point(point)),
            Self::Bounded(mut bbox) => {
                bbox.include(point);
                Self::Bounded(bbox)
            }
        }
    }

    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        match (self, other) {
            (Self::Empty, other) => other,
            (this, Self::Empty) => this,
            (Self::Bounded(a), Self::Bounded(b)) => Self::Bounded(a.union(b)),
        }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    #[must_use]
    pub fn bounding_box(self) -> Option<BoundingBox> {
        match self {
            Self::Empty => None,
            Self::Bounded(bbox) => Some(bbox),
        }
    }
}
