use tracing::{debug, trace, warn};

use crate::core::{PlotArea, WindowSize};
use crate::error::{PlotError, PlotResult};
use crate::render::Renderer;

use super::engine::PlotEngine;
use super::input::{InputEvent, Key};
use super::invalidation::InvalidationTopic;

impl<R: Renderer> PlotEngine<R> {
    /// Applies one input event.
    ///
    /// View commands that fail (fit with no data, a zoom that would collapse
    /// the viewport) are logged and leave state unchanged; input never aborts
    /// the frame.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Resized(window) => self.handle_resize(window),
            InputEvent::MouseMoved { x, y } => {
                self.interaction
                    .on_pointer_move(x, y, self.plot_area, self.window);
                self.apply_pending_drag();
            }
            InputEvent::MouseLeft => self.interaction.on_pointer_leave(),
            InputEvent::ButtonPressed(button) => self.interaction.on_button_pressed(button),
            InputEvent::ButtonReleased(button) => {
                self.apply_pending_drag();
                self.interaction.on_button_released(button);
            }
            InputEvent::Wheel { delta } => self.handle_wheel(delta),
            InputEvent::KeyPressed(key) => self.handle_key(key),
            InputEvent::FocusChanged(focused) => {
                self.interaction.set_window_focused(focused);
                self.interaction.refresh_focus(self.plot_area, self.window);
            }
            InputEvent::CloseRequested => {
                debug!("close requested");
                self.request_stop();
            }
        }
    }

    fn handle_resize(&mut self, window: WindowSize) {
        if window == self.window {
            return;
        }
        let plot_area = match PlotArea::from_window(window, self.config.plot_padding) {
            Ok(plot_area) => plot_area,
            Err(err) => {
                warn!(
                    width = window.width,
                    height = window.height,
                    error = %err,
                    "window too small for plot area; keeping previous layout"
                );
                return;
            }
        };

        self.window = window;
        self.plot_area = plot_area;
        let surface = self.surface.resized_for(plot_area);
        if surface.generation != self.surface.generation {
            debug!(
                width = surface.width,
                height = surface.height,
                generation = surface.generation,
                "series layer surface recreated"
            );
        }
        self.surface = surface;
        self.interaction.refresh_focus(self.plot_area, self.window);
        self.invalidate(InvalidationTopic::Layout);
    }

    fn apply_pending_drag(&mut self) {
        let (dx, dy) = self.interaction.take_drag();
        let Some(axes) = self.interaction.drag_axes() else {
            return;
        };
        if let Err(err) = self.pan_by_pixels(dx, dy, axes) {
            debug!(error = %err, dx, dy, "drag pan rejected");
        }
    }

    fn handle_wheel(&mut self, delta: f64) {
        if !delta.is_finite() || delta == 0.0 {
            return;
        }
        let Some(axes) = self.interaction.zoom_axes() else {
            return;
        };
        let factor = (-delta * self.config.wheel_zoom_rate).exp();
        trace!(delta, factor, ?axes, "wheel zoom");
        if let Err(err) = self.zoom(factor, axes) {
            debug!(error = %err, factor, "wheel zoom rejected");
        }
    }

    fn handle_key(&mut self, key: Key) {
        let character = match key {
            Key::Escape => {
                debug!("escape pressed");
                self.request_stop();
                return;
            }
            Key::Character(character) => character.to_ascii_lowercase(),
        };

        let bindings = self.config.key_bindings;
        if character == bindings.fit_aspect.to_ascii_lowercase() {
            log_command_failure("fit aspect", self.fit_aspect());
        } else if bindings
            .fit_data
            .is_some_and(|binding| binding.to_ascii_lowercase() == character)
        {
            log_command_failure("fit data", self.fit_to_data());
        }
    }
}

fn log_command_failure(command: &str, result: PlotResult<()>) {
    match result {
        Ok(()) => {}
        Err(PlotError::EmptyDataSet) => debug!(command, "nothing to fit"),
        Err(err) => warn!(command, error = %err, "view command failed"),
    }
}
