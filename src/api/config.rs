use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_X_TICK_DIVISOR, DEFAULT_Y_TICK_DIVISOR, SeriesStyle, WindowSize};
use crate::error::{PlotError, PlotResult};
use crate::render::Color;

use super::label_format::{LabelFormat, MAX_LABEL_PRECISION};
use super::runtime::FramePacing;

/// Colors and stroke sizes of the plot chrome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotStyle {
    pub background_color: Color,
    pub plot_background_color: Color,
    pub gridline_color: Color,
    pub gridline_width: f64,
    pub minor_gridline_color: Color,
    pub minor_gridline_width: f64,
    pub border_color: Color,
    pub border_width: f64,
    pub tick_mark_color: Color,
    pub major_tick_length: f64,
    pub major_tick_width: f64,
    pub minor_tick_length: f64,
    pub minor_tick_width: f64,
    pub label_color: Color,
    pub label_font_size_px: f64,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            background_color: Color::WHITE,
            plot_background_color: Color::rgb8(220, 220, 220),
            gridline_color: Color::WHITE,
            gridline_width: 1.0,
            minor_gridline_color: Color::rgb8(240, 240, 240),
            minor_gridline_width: 0.8,
            border_color: Color::BLACK,
            border_width: 2.0,
            tick_mark_color: Color::BLACK,
            major_tick_length: 10.0,
            major_tick_width: 1.0,
            minor_tick_length: 5.0,
            minor_tick_width: 0.5,
            label_color: Color::BLACK,
            label_font_size_px: 11.0,
        }
    }
}

impl PlotStyle {
    pub fn validate(self) -> PlotResult<Self> {
        for color in [
            self.background_color,
            self.plot_background_color,
            self.gridline_color,
            self.minor_gridline_color,
            self.border_color,
            self.tick_mark_color,
            self.label_color,
        ] {
            color.validate()?;
        }

        for (name, value) in [
            ("gridline_width", self.gridline_width),
            ("minor_gridline_width", self.minor_gridline_width),
            ("major_tick_length", self.major_tick_length),
            ("major_tick_width", self.major_tick_width),
            ("minor_tick_length", self.minor_tick_length),
            ("minor_tick_width", self.minor_tick_width),
            ("label_font_size_px", self.label_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PlotError::Configuration(format!(
                    "style `{name}` must be finite and > 0"
                )));
            }
        }
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(PlotError::Configuration(
                "style `border_width` must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Keyboard bindings for view commands. Letters match case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub fit_aspect: char,
    pub fit_data: Option<char>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            fit_aspect: 'a',
            fit_data: Some('f'),
        }
    }
}

/// Construction-time plot configuration.
///
/// Serializable so hosts can keep plot setup in a JSON file instead of an
/// ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub title: String,
    pub window_size: WindowSize,
    /// Gap in pixels between the window edge and the plot area, on every side.
    pub plot_padding: f64,
    pub style: PlotStyle,
    pub default_series_style: SeriesStyle,
    pub x_tick_divisor: f64,
    pub y_tick_divisor: f64,
    pub x_label_format: LabelFormat,
    pub y_label_format: LabelFormat,
    /// Fraction of the data span added on each side by fit-to-data.
    pub fit_margin: f64,
    /// Wheel zoom factor is `exp(-delta * wheel_zoom_rate)`.
    pub wheel_zoom_rate: f64,
    pub frame_pacing: FramePacing,
    pub key_bindings: KeyBindings,
    pub font_path: Option<PathBuf>,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            title: "Plotter".to_owned(),
            window_size: WindowSize::new(500, 500),
            plot_padding: 100.0,
            style: PlotStyle::default(),
            default_series_style: SeriesStyle::default(),
            x_tick_divisor: DEFAULT_X_TICK_DIVISOR,
            y_tick_divisor: DEFAULT_Y_TICK_DIVISOR,
            x_label_format: LabelFormat::default(),
            y_label_format: LabelFormat::default(),
            fit_margin: 0.2,
            wheel_zoom_rate: 0.05,
            frame_pacing: FramePacing::default(),
            key_bindings: KeyBindings::default(),
            font_path: None,
        }
    }
}

impl PlotConfig {
    #[must_use]
    pub fn new(window_size: WindowSize) -> Self {
        Self {
            window_size,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_plot_padding(mut self, plot_padding: f64) -> Self {
        self.plot_padding = plot_padding;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: PlotStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_default_series_style(mut self, style: SeriesStyle) -> Self {
        self.default_series_style = style;
        self
    }

    /// Sets the pixel-span divisors used to derive tick tolerances.
    #[must_use]
    pub fn with_tick_divisors(mut self, x_divisor: f64, y_divisor: f64) -> Self {
        self.x_tick_divisor = x_divisor;
        self.y_tick_divisor = y_divisor;
        self
    }

    #[must_use]
    pub fn with_label_formats(mut self, x_format: LabelFormat, y_format: LabelFormat) -> Self {
        self.x_label_format = x_format;
        self.y_label_format = y_format;
        self
    }

    #[must_use]
    pub fn with_fit_margin(mut self, fit_margin: f64) -> Self {
        self.fit_margin = fit_margin;
        self
    }

    #[must_use]
    pub fn with_wheel_zoom_rate(mut self, rate: f64) -> Self {
        self.wheel_zoom_rate = rate;
        self
    }

    #[must_use]
    pub fn with_frame_pacing(mut self, pacing: FramePacing) -> Self {
        self.frame_pacing = pacing;
        self
    }

    #[must_use]
    pub fn with_key_bindings(mut self, bindings: KeyBindings) -> Self {
        self.key_bindings = bindings;
        self
    }

    /// Sets the font asset loaded when the engine is constructed.
    #[must_use]
    pub fn with_font_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.font_path = Some(path.into());
        self
    }

    pub fn validate(&self) -> PlotResult<()> {
        if !self.window_size.is_valid() {
            return Err(PlotError::Configuration(format!(
                "window size must be non-zero (width={}, height={})",
                self.window_size.width, self.window_size.height
            )));
        }
        if !self.plot_padding.is_finite() || self.plot_padding < 0.0 {
            return Err(PlotError::Configuration(
                "plot padding must be finite and >= 0".to_owned(),
            ));
        }
        for (name, divisor) in [
            ("x_tick_divisor", self.x_tick_divisor),
            ("y_tick_divisor", self.y_tick_divisor),
        ] {
            if !divisor.is_finite() || divisor <= 0.0 {
                return Err(PlotError::Configuration(format!(
                    "`{name}` must be finite and > 0"
                )));
            }
        }
        for format in [self.x_label_format, self.y_label_format] {
            if let LabelFormat::Fixed { precision } = format {
                if precision > MAX_LABEL_PRECISION {
                    return Err(PlotError::Configuration(format!(
                        "label precision must be <= {MAX_LABEL_PRECISION}"
                    )));
                }
            }
        }
        if !self.fit_margin.is_finite() || self.fit_margin < 0.0 {
            return Err(PlotError::Configuration(
                "fit margin must be finite and >= 0".to_owned(),
            ));
        }
        if !self.wheel_zoom_rate.is_finite() || self.wheel_zoom_rate <= 0.0 {
            return Err(PlotError::Configuration(
                "wheel zoom rate must be finite and > 0".to_owned(),
            ));
        }
        if let Some(fit_data) = self.key_bindings.fit_data {
            if fit_data.eq_ignore_ascii_case(&self.key_bindings.fit_aspect) {
                return Err(PlotError::Configuration(format!(
                    "key `{fit_data}` is bound to both fit-aspect and fit-data"
                )));
            }
        }
        self.frame_pacing.validate()?;
        self.style.validate()?;
        self.default_series_style
            .validate()
            .map_err(|err| PlotError::Configuration(format!("default series style: {err}")))?;
        Ok(())
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PlotError::Configuration(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON. Missing fields take their defaults.
    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| PlotError::Configuration(format!("failed to parse config: {e}")))
    }
}
