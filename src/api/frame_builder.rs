use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{
    Axis, CoordinateMapper, PlotArea, SeriesStore, Tick, TickPlan, Viewport, WindowSize,
    plan_ticks,
};
use crate::error::PlotResult;
use crate::render::{
    Color, GridLine, LayerSurface, LinePrimitive, RectPrimitive, RenderFrame, SeriesLayer,
    TextHAlign, TextPrimitive, TextVAlign,
};

use super::config::PlotConfig;
use super::label_format::format_tick_label;
use super::series_projection::project_series_store;

/// Tick plans for both axes. `None` marks an axis whose plan could not be
/// computed for the current view; that axis is drawn without ticks.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisTickPlans {
    pub x: Option<TickPlan>,
    pub y: Option<TickPlan>,
}

/// Plans ticks for both axes from the viewport spans and plot-area extents.
#[must_use]
pub fn plan_axis_ticks(viewport: Viewport, plot_area: PlotArea, config: &PlotConfig) -> AxisTickPlans {
    let x = plan_ticks(viewport.width(), plot_area.width(), config.x_tick_divisor);
    let y = plan_ticks(viewport.height(), plot_area.height(), config.y_tick_divisor);
    AxisTickPlans {
        x: log_plan_failure(Axis::X, x),
        y: log_plan_failure(Axis::Y, y),
    }
}

fn log_plan_failure(axis: Axis, plan: PlotResult<TickPlan>) -> Option<TickPlan> {
    match plan {
        Ok(plan) => Some(plan),
        Err(err) => {
            warn!(?axis, error = %err, "tick planning failed; axis drawn without ticks");
            None
        }
    }
}

/// Everything a frame is built from.
#[derive(Debug, Clone, Copy)]
pub struct FrameInputs<'a> {
    pub window: WindowSize,
    pub plot_area: PlotArea,
    pub viewport: Viewport,
    pub tick_plans: AxisTickPlans,
    pub surface: LayerSurface,
    pub store: &'a SeriesStore,
    pub config: &'a PlotConfig,
}

/// Materializes the full draw list for one frame.
pub fn build_render_frame(inputs: FrameInputs<'_>) -> PlotResult<RenderFrame> {
    let FrameInputs {
        window,
        plot_area,
        viewport,
        tick_plans,
        surface,
        store,
        config,
    } = inputs;
    let style = config.style;
    let mapper = CoordinateMapper::new(viewport, plot_area)?;

    let mut frame = RenderFrame {
        window,
        background: style.background_color,
        plot_background: RectPrimitive::filled(
            plot_area.x_min,
            plot_area.y_min,
            plot_area.width(),
            plot_area.height(),
            style.plot_background_color,
        ),
        gridlines: Vec::new(),
        tick_marks: Vec::new(),
        labels: Vec::new(),
        series_layer: SeriesLayer {
            surface,
            origin_x: plot_area.x_min,
            origin_y: plot_area.y_min,
            series: project_series_store(store, mapper),
        },
        border: RectPrimitive::outlined(
            plot_area.x_min,
            plot_area.y_min,
            plot_area.width(),
            plot_area.height(),
            style.border_width.max(0.0),
            style.border_color,
        ),
    };

    if let Some(plan) = tick_plans.x {
        let (view_min, view_max) = viewport.x_range();
        for tick in axis_ticks(Axis::X, plan, view_min, view_max) {
            push_x_tick(&mut frame, tick, mapper, config);
        }
    }
    if let Some(plan) = tick_plans.y {
        let (view_min, view_max) = viewport.y_range();
        for tick in axis_ticks(Axis::Y, plan, view_min, view_max) {
            push_y_tick(&mut frame, tick, mapper, config);
        }
    }

    Ok(frame)
}

fn axis_ticks(axis: Axis, plan: TickPlan, view_min: f64, view_max: f64) -> Vec<Tick> {
    match plan.ticks(view_min, view_max) {
        Ok(ticks) => ticks.into_vec(),
        Err(err) => {
            warn!(?axis, error = %err, "tick generation failed; axis skipped");
            Vec::new()
        }
    }
}

struct TickGeometry {
    length: f64,
    width: f64,
}

fn tick_geometry(tick: Tick, config: &PlotConfig) -> (TickGeometry, f64, Color) {
    let style = config.style;
    if tick.is_major() {
        (
            TickGeometry {
                length: style.major_tick_length,
                width: style.major_tick_width,
            },
            style.gridline_width,
            style.gridline_color,
        )
    } else {
        (
            TickGeometry {
                length: style.minor_tick_length,
                width: style.minor_tick_width,
            },
            style.minor_gridline_width,
            style.minor_gridline_color,
        )
    }
}

fn push_x_tick(frame: &mut RenderFrame, tick: Tick, mapper: CoordinateMapper, config: &PlotConfig) {
    let plot = mapper.plot_area();
    let px = mapper.x_to_pixel(tick.value);
    if !px.is_finite() {
        return;
    }
    let style = config.style;
    let (mark, grid_width, grid_color) = tick_geometry(tick, config);

    frame.gridlines.push(GridLine {
        axis: Axis::X,
        kind: tick.kind,
        value: tick.value,
        line: LinePrimitive::new(px, plot.y_min, px, plot.y_max, grid_width, grid_color),
    });
    frame.tick_marks.push(LinePrimitive::new(
        px,
        plot.y_min,
        px,
        plot.y_min - mark.length,
        mark.width,
        style.tick_mark_color,
    ));
    frame.tick_marks.push(LinePrimitive::new(
        px,
        plot.y_max,
        px,
        plot.y_max + mark.length,
        mark.width,
        style.tick_mark_color,
    ));

    if tick.is_major() {
        frame.labels.push(TextPrimitive::new(
            format_tick_label(tick.value, config.x_label_format),
            px,
            plot.y_max + 2.0 * style.major_tick_length,
            style.label_font_size_px,
            style.label_color,
            TextHAlign::Center,
            TextVAlign::Top,
        ));
    }
}

fn push_y_tick(frame: &mut RenderFrame, tick: Tick, mapper: CoordinateMapper, config: &PlotConfig) {
    let plot = mapper.plot_area();
    let py = mapper.y_to_pixel(tick.value);
    if !py.is_finite() {
        return;
    }
    let style = config.style;
    let (mark, grid_width, grid_color) = tick_geometry(tick, config);

    frame.gridlines.push(GridLine {
        axis: Axis::Y,
        kind: tick.kind,
        value: tick.value,
        line: LinePrimitive::new(plot.x_min, py, plot.x_max, py, grid_width, grid_color),
    });
    frame.tick_marks.push(LinePrimitive::new(
        plot.x_min,
        py,
        plot.x_min - mark.length,
        py,
        mark.width,
        style.tick_mark_color,
    ));
    frame.tick_marks.push(LinePrimitive::new(
        plot.x_max,
        py,
        plot.x_max + mark.length,
        py,
        mark.width,
        style.tick_mark_color,
    ));

    if tick.is_major() {
        frame.labels.push(TextPrimitive::new(
            format_tick_label(tick.value, config.y_label_format),
            plot.x_min - 2.0 * style.major_tick_length,
            py,
            style.label_font_size_px,
            style.label_color,
            TextHAlign::Right,
            TextVAlign::Middle,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Series, TickKind};

    fn build(viewport: Viewport) -> RenderFrame {
        let config = PlotConfig::default();
        let window = WindowSize::new(700, 500);
        let plot_area = PlotArea::from_window(window, config.plot_padding).expect("area");
        let mut store = SeriesStore::new();
        store.push(Series::from_function(|x| x, 0.0, 10.0, 11).expect("series"));
        let tick_plans = plan_axis_ticks(viewport, plot_area, &config);
        build_render_frame(FrameInputs {
            window,
            plot_area,
            viewport,
            tick_plans,
            surface: LayerSurface::for_plot_area(plot_area, 0),
            store: &store,
            config: &config,
        })
        .expect("frame")
    }

    #[test]
    fn x_axis_labels_only_major_ticks() {
        // 500 px wide plot, divisor 60 -> tolerance 8.33; span 37 -> step 5.
        let frame = build(Viewport::new(0.0, 37.0, 0.0, 10.0).expect("viewport"));
        let x_lines: Vec<&GridLine> = frame.gridlines_for(Axis::X).collect();
        let majors: Vec<f64> = x_lines
            .iter()
            .filter(|line| line.kind == TickKind::Major)
            .map(|line| line.value)
            .collect();
        assert_eq!(majors, vec![0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 35.0]);

        let x_labels: Vec<&str> = frame
            .labels
            .iter()
            .filter(|label| label.h_align == TextHAlign::Center)
            .map(|label| label.text.as_str())
            .collect();
        assert_eq!(x_labels.first(), Some(&"0.00"));
        assert_eq!(x_labels.len(), majors.len());
        assert_eq!(frame.tick_marks.len(), 2 * frame.gridlines.len());
    }

    #[test]
    fn gridlines_stay_inside_plot_area() {
        let frame = build(Viewport::new(-3.0, 7.0, -1.0, 1.0).expect("viewport"));
        frame.validate().expect("valid frame");
        for line in &frame.gridlines {
            match line.axis {
                Axis::X => {
                    assert!(line.line.x1 >= 100.0 && line.line.x1 <= 600.0);
                    assert_eq!((line.line.y1, line.line.y2), (100.0, 400.0));
                }
                Axis::Y => {
                    assert!(line.line.y1 >= 100.0 && line.line.y1 <= 400.0);
                    assert_eq!((line.line.x1, line.line.x2), (100.0, 600.0));
                }
            }
        }
    }

    #[test]
    fn series_layer_is_anchored_at_plot_origin() {
        let frame = build(Viewport::new(0.0, 10.0, 0.0, 10.0).expect("viewport"));
        assert_eq!(
            (frame.series_layer.origin_x, frame.series_layer.origin_y),
            (100.0, 100.0)
        );
        assert_eq!(frame.series_layer.segment_count(), 10);
        let first = frame.series_layer.series[0].segments[0];
        assert_eq!((first.x1, first.y1), (0.0, 300.0));
    }
}
