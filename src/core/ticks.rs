//! Nice-step tick planning.
//!
//! Steps come from the `{1, 2, 2.5, 5} x 10^n` ladder. Each step is paired
//! with the number of minor ticks drawn between two consecutive majors.

use serde::{Deserialize, Deserializer, Serialize};
use smallvec::SmallVec;

use crate::error::{PlotError, PlotResult};

/// Pixel-span divisor used for the horizontal axis tolerance.
pub const DEFAULT_X_TICK_DIVISOR: f64 = 60.0;
/// Pixel-span divisor used for the vertical axis tolerance.
pub const DEFAULT_Y_TICK_DIVISOR: f64 = 40.0;
/// Upper bound on generated ticks (major and minor) per axis.
pub const MAX_TICKS_PER_AXIS: usize = 4096;

/// Two decades of `(multiplier, minor_subdivisions)`, scanned in order.
const STEP_LADDER: [(f64, u32); 9] = [
    (0.1, 4),
    (0.2, 3),
    (0.25, 4),
    (0.5, 3),
    (1.0, 4),
    (2.0, 3),
    (2.5, 4),
    (5.0, 3),
    (10.0, 4),
];

pub type TickBuffer = SmallVec<[Tick; 64]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickKind {
    Major,
    Minor,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    /// Multiple of the minor spacing this tick sits on.
    pub index: i64,
    pub value: f64,
    pub kind: TickKind,
}

impl Tick {
    #[must_use]
    pub fn is_major(self) -> bool {
        self.kind == TickKind::Major
    }
}

/// Selected major step and minor subdivision count for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TickPlan {
    major_step: f64,
    minor_subdivisions: u32,
}

impl<'de> Deserialize<'de> for TickPlan {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Fields {
            major_step: f64,
            minor_subdivisions: u32,
        }

        let fields = Fields::deserialize(deserializer)?;
        Self::new(fields.major_step, fields.minor_subdivisions).map_err(serde::de::Error::custom)
    }
}

impl TickPlan {
    pub fn new(major_step: f64, minor_subdivisions: u32) -> PlotResult<Self> {
        if !major_step.is_finite() || major_step <= 0.0 {
            return Err(PlotError::InvalidData(
                "tick major step must be finite and > 0".to_owned(),
            ));
        }
        if minor_subdivisions == 0 {
            return Err(PlotError::InvalidData(
                "tick minor subdivisions must be >= 1".to_owned(),
            ));
        }
        Ok(Self {
            major_step,
            minor_subdivisions,
        })
    }

    #[must_use]
    pub fn major_step(self) -> f64 {
        self.major_step
    }

    #[must_use]
    pub fn minor_subdivisions(self) -> u32 {
        self.minor_subdivisions
    }

    /// Number of tick intervals between two consecutive majors.
    #[must_use]
    pub fn intervals_per_major(self) -> i64 {
        i64::from(self.minor_subdivisions) + 1
    }

    #[must_use]
    pub fn minor_spacing(self) -> f64 {
        self.major_step / self.intervals_per_major() as f64
    }

    /// Generates every tick inside `[view_min, view_max]` in ascending order.
    ///
    /// Ticks sit on multiples of `minor_spacing`; every
    /// `minor_subdivisions + 1`-th one is major.
    pub fn ticks(self, view_min: f64, view_max: f64) -> PlotResult<TickBuffer> {
        if !view_min.is_finite() || !view_max.is_finite() || view_min > view_max {
            return Err(PlotError::InvalidData(
                "tick range must be finite and ordered".to_owned(),
            ));
        }

        let per_major = self.intervals_per_major();
        let scale = per_major as f64 / self.major_step;
        let first = (view_min * scale).ceil();
        let last = (view_max * scale).floor();
        let count = last - first + 1.0;
        if !count.is_finite() || count > MAX_TICKS_PER_AXIS as f64 {
            return Err(PlotError::InvalidData(format!(
                "tick plan would generate more than {MAX_TICKS_PER_AXIS} ticks"
            )));
        }
        if count <= 0.0 {
            return Ok(TickBuffer::new());
        }

        let first = first as i64;
        let last = last as i64;
        Ok((first..=last)
            .map(|index| Tick {
                index,
                value: index as f64 * self.major_step / per_major as f64,
                kind: if index.rem_euclid(per_major) == 0 {
                    TickKind::Major
                } else {
                    TickKind::Minor
                },
            })
            .collect())
    }
}

/// Picks the smallest ladder step that keeps `span / step` under
/// `plot_span_px / divisor`.
///
/// When no ladder entry qualifies the largest one (`10 x 10^n`) is used.
pub fn plan_ticks(span: f64, plot_span_px: f64, divisor: f64) -> PlotResult<TickPlan> {
    if !span.is_finite() || span <= 0.0 {
        return Err(PlotError::InvalidData(
            "tick span must be finite and > 0".to_owned(),
        ));
    }
    if !plot_span_px.is_finite() || plot_span_px <= 0.0 {
        return Err(PlotError::InvalidData(
            "tick pixel span must be finite and > 0".to_owned(),
        ));
    }
    if !divisor.is_finite() || divisor <= 0.0 {
        return Err(PlotError::InvalidData(
            "tick divisor must be finite and > 0".to_owned(),
        ));
    }

    let tolerance = plot_span_px / divisor;
    let decade = 10_f64.powf(span.log10().floor());
    let (multiplier, minor) = STEP_LADDER
        .iter()
        .copied()
        .find(|(multiplier, _)| span / (multiplier * decade) < tolerance)
        .unwrap_or(STEP_LADDER[STEP_LADDER.len() - 1]);

    TickPlan::new(multiplier * decade, minor)
}
