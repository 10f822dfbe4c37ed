use crate::core::{Axis, SeriesId, TickKind, WindowSize};
use crate::error::{PlotError, PlotResult};
use crate::render::{
    CirclePrimitive, Color, LayerSurface, LinePrimitive, RectPrimitive, TextPrimitive,
};

/// One gridline spanning the plot area at a tick position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub axis: Axis,
    pub kind: TickKind,
    /// Data-space tick value.
    pub value: f64,
    pub line: LinePrimitive,
}

/// Geometry of one series in layer-local pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPrimitives {
    pub series_id: SeriesId,
    pub segments: Vec<LinePrimitive>,
    pub points: Vec<CirclePrimitive>,
}

/// Series geometry drawn off-screen and composited at `(origin_x, origin_y)`.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesLayer {
    pub surface: LayerSurface,
    pub origin_x: f64,
    pub origin_y: f64,
    pub series: Vec<SeriesPrimitives>,
}

impl SeriesLayer {
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.series.iter().map(|series| series.segments.len()).sum()
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|series| series.points.len()).sum()
    }
}

/// Backend-agnostic scene for one plot draw pass.
///
/// Backends draw fields in declaration order: clear with `background`, plot
/// background, gridlines, tick marks, labels, the composited series layer and
/// finally the border.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub window: WindowSize,
    pub background: Color,
    pub plot_background: RectPrimitive,
    pub gridlines: Vec<GridLine>,
    pub tick_marks: Vec<LinePrimitive>,
    pub labels: Vec<TextPrimitive>,
    pub series_layer: SeriesLayer,
    pub border: RectPrimitive,
}

impl RenderFrame {
    pub fn validate(&self) -> PlotResult<()> {
        if !self.window.is_valid() {
            return Err(PlotError::InvalidData(format!(
                "window size must be non-zero (width={}, height={})",
                self.window.width, self.window.height
            )));
        }

        self.background.validate()?;
        self.plot_background.validate()?;
        for gridline in &self.gridlines {
            gridline.line.validate()?;
        }
        for tick in &self.tick_marks {
            tick.validate()?;
        }
        for label in &self.labels {
            label.validate()?;
        }
        for series in &self.series_layer.series {
            for segment in &series.segments {
                segment.validate()?;
            }
            for point in &series.points {
                point.validate()?;
            }
        }
        self.border.validate()
    }

    /// Gridlines of one axis, in ascending tick order.
    pub fn gridlines_for(&self, axis: Axis) -> impl Iterator<Item = &GridLine> {
        self.gridlines.iter().filter(move |line| line.axis == axis)
    }
}
