pub mod scale;
pub mod series;
pub mod ticks;
pub mod types;
pub mod viewport;

pub use scale::{CoordinateMapper, SampleHit};
pub use series::{Series, SeriesId, SeriesStore, SeriesStyle};
pub use ticks::{
    DEFAULT_X_TICK_DIVISOR, DEFAULT_Y_TICK_DIVISOR, MAX_TICKS_PER_AXIS, Tick, TickBuffer,
    TickKind, TickPlan, plan_ticks,
};
pub use types::{Axis, BoundingBox, DataBounds, DataPoint, PlotArea, WindowSize};
pub use viewport::{AxisSelection, Viewport};
