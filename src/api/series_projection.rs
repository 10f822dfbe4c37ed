#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{CoordinateMapper, Series, SeriesId, SeriesStore};
use crate::render::{CirclePrimitive, LinePrimitive, SeriesPrimitives};

/// Series at or above this sample count are projected on the rayon pool when
/// `parallel-projection` is enabled.
#[cfg(feature = "parallel-projection")]
const PARALLEL_PROJECTION_MIN_SAMPLES: usize = 16_384;

/// Projects every series into layer-local pixel primitives, in store order.
#[must_use]
pub fn project_series_store(store: &SeriesStore, mapper: CoordinateMapper) -> Vec<SeriesPrimitives> {
    store
        .iter()
        .map(|(series_id, series)| project_series(series_id, series, mapper))
        .collect()
}

/// Projects one series. Segments touching a non-finite sample are skipped, so
/// a NaN breaks the polyline instead of producing invalid geometry.
#[must_use]
pub fn project_series(
    series_id: SeriesId,
    series: &Series,
    mapper: CoordinateMapper,
) -> SeriesPrimitives {
    let style = series.style();
    let local: Vec<Option<(f64, f64)>> = project_local(series, mapper);

    let segments = if style.line_width > 0.0 {
        local
            .windows(2)
            .filter_map(|pair| match (pair[0], pair[1]) {
                (Some((x1, y1)), Some((x2, y2))) => Some(LinePrimitive::new(
                    x1,
                    y1,
                    x2,
                    y2,
                    style.line_width,
                    style.line_color,
                )),
                _ => None,
            })
            .collect()
    } else {
        Vec::new()
    };

    let points = if style.point_radius > 0.0 {
        local
            .iter()
            .flatten()
            .map(|&(x, y)| CirclePrimitive::new(x, y, style.point_radius, style.point_color))
            .collect()
    } else {
        Vec::new()
    };

    SeriesPrimitives {
        series_id,
        segments,
        points,
    }
}

fn project_local(series: &Series, mapper: CoordinateMapper) -> Vec<Option<(f64, f64)>> {
    let project = |point: &crate::core::DataPoint| {
        if !point.is_finite() {
            return None;
        }
        let (x, y) = mapper.data_to_local_pixel(point.x, point.y);
        (x.is_finite() && y.is_finite()).then_some((x, y))
    };

    #[cfg(feature = "parallel-projection")]
    {
        if series.len() >= PARALLEL_PROJECTION_MIN_SAMPLES {
            return series.points().par_iter().map(project).collect();
        }
    }

    series.points().iter().map(project).collect()
}
