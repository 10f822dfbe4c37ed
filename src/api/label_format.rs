use serde::{Deserialize, Serialize};

/// Numeric tick-label formatting policy for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelFormat {
    /// Fixed-point with `precision` fractional digits.
    Fixed { precision: u8 },
    /// Shortest representation after rounding to 12 significant digits, which
    /// hides accumulated floating-point noise such as `0.30000000000000004`.
    Shortest,
}

impl Default for LabelFormat {
    fn default() -> Self {
        Self::Fixed { precision: 2 }
    }
}

/// Largest fixed precision accepted by config validation.
pub const MAX_LABEL_PRECISION: u8 = 17;

const SHORTEST_SIGNIFICANT_DIGITS: usize = 12;

#[must_use]
pub fn format_tick_label(value: f64, format: LabelFormat) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }

    let text = match format {
        LabelFormat::Fixed { precision } => format!("{:.*}", usize::from(precision), value),
        LabelFormat::Shortest => {
            let rounded = format!("{:.*e}", SHORTEST_SIGNIFICANT_DIGITS - 1, value)
                .parse::<f64>()
                .unwrap_or(value);
            format!("{rounded}")
        }
    };
    strip_negative_zero(text)
}

/// `-0.00` and `-0` read as noise on an axis; print them unsigned.
fn strip_negative_zero(text: String) -> String {
    match text.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_owned(),
        _ => text,
    }
}
