use crate::error::PlotResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so tests catch invalid geometry before a
/// real backend is involved, and keeps the last frame for inspection.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_gridline_count: usize,
    pub last_label_count: usize,
    pub last_surface_generation: Option<u64>,
    pub last_frame: Option<RenderFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_gridline_count = frame.gridlines.len();
        self.last_label_count = frame.labels.len();
        self.last_surface_generation = Some(frame.series_layer.surface.generation);
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
