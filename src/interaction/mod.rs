use serde::{Deserialize, Serialize};

use crate::core::{AxisSelection, PlotArea, WindowSize};

/// Region of the window the pointer is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FocusRegion {
    #[default]
    None,
    /// Plot interior.
    Plot,
    /// Horizontal tick strip: plot x-range, outside the plot vertically.
    XAxis,
    /// Vertical tick strip: plot y-range, outside the plot horizontally.
    YAxis,
}

impl FocusRegion {
    /// Axes a gesture over this region acts on.
    #[must_use]
    pub const fn axes(self) -> Option<AxisSelection> {
        match self {
            Self::None => None,
            Self::Plot => Some(AxisSelection::Both),
            Self::XAxis => Some(AxisSelection::XOnly),
            Self::YAxis => Some(AxisSelection::YOnly),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    Primary,
    Secondary,
    Middle,
}

/// Classifies a pointer position. The first matching region wins, so the
/// plot interior shadows both axis strips.
#[must_use]
pub fn classify_focus(x: f64, y: f64, plot_area: PlotArea, window: WindowSize) -> FocusRegion {
    let inside_window_x = x >= 0.0 && x < f64::from(window.width);
    let inside_window_y = y >= 0.0 && y < f64::from(window.height);

    if plot_area.contains(x, y) {
        FocusRegion::Plot
    } else if plot_area.contains_x(x) && inside_window_y {
        FocusRegion::XAxis
    } else if inside_window_x && plot_area.contains_y(y) {
        FocusRegion::YAxis
    } else {
        FocusRegion::None
    }
}

/// Pointer focus state machine.
///
/// `focus` follows the pointer every move; `click_focus` is latched on primary
/// press and cleared on release so a drag never changes axes mid-gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    focus: FocusRegion,
    click_focus: FocusRegion,
    window_focused: bool,
    primary_held: bool,
    cursor: Option<(f64, f64)>,
    pending_drag: (f64, f64),
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            focus: FocusRegion::None,
            click_focus: FocusRegion::None,
            window_focused: true,
            primary_held: false,
            cursor: None,
            pending_drag: (0.0, 0.0),
        }
    }
}

impl InteractionState {
    #[must_use]
    pub fn focus(self) -> FocusRegion {
        self.focus
    }

    #[must_use]
    pub fn click_focus(self) -> FocusRegion {
        self.click_focus
    }

    #[must_use]
    pub fn window_focused(self) -> bool {
        self.window_focused
    }

    #[must_use]
    pub fn primary_held(self) -> bool {
        self.primary_held
    }

    #[must_use]
    pub fn cursor(self) -> Option<(f64, f64)> {
        self.cursor
    }

    /// Losing window focus drops live focus and abandons any drag in flight.
    pub fn set_window_focused(&mut self, focused: bool) {
        self.window_focused = focused;
        if !focused {
            self.focus = FocusRegion::None;
            self.click_focus = FocusRegion::None;
            self.primary_held = false;
            self.pending_drag = (0.0, 0.0);
        }
    }

    /// Records a pointer move and reclassifies live focus.
    ///
    /// While the primary button is held the movement is accumulated as a
    /// drag, drained by `take_drag`.
    pub fn on_pointer_move(&mut self, x: f64, y: f64, plot_area: PlotArea, window: WindowSize) {
        if self.primary_held && self.window_focused {
            if let Some((previous_x, previous_y)) = self.cursor {
                self.pending_drag.0 += x - previous_x;
                self.pending_drag.1 += y - previous_y;
            }
        }
        self.cursor = Some((x, y));
        self.refresh_focus(plot_area, window);
    }

    /// Reclassifies live focus from the last known pointer position, e.g.
    /// after the plot area moved on resize.
    pub fn refresh_focus(&mut self, plot_area: PlotArea, window: WindowSize) {
        self.focus = match self.cursor {
            Some((x, y)) if self.window_focused => classify_focus(x, y, plot_area, window),
            _ => FocusRegion::None,
        };
    }

    pub fn on_pointer_leave(&mut self) {
        self.cursor = None;
        self.focus = FocusRegion::None;
    }

    pub fn on_button_pressed(&mut self, button: MouseButton) {
        if button == MouseButton::Primary {
            self.click_focus = self.focus;
            self.primary_held = true;
        }
    }

    pub fn on_button_released(&mut self, button: MouseButton) {
        if button == MouseButton::Primary {
            self.click_focus = FocusRegion::None;
            self.primary_held = false;
        }
    }

    /// Axes the wheel zooms, from live focus.
    #[must_use]
    pub fn zoom_axes(self) -> Option<AxisSelection> {
        self.focus.axes()
    }

    /// Axes a drag pans, from the focus latched at press time.
    #[must_use]
    pub fn drag_axes(self) -> Option<AxisSelection> {
        if !self.primary_held || !self.window_focused {
            return None;
        }
        self.click_focus.axes()
    }

    /// Returns and resets the drag delta accumulated since the last call.
    pub fn take_drag(&mut self) -> (f64, f64) {
        std::mem::replace(&mut self.pending_drag, (0.0, 0.0))
    }
}
