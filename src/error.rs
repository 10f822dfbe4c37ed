use std::path::PathBuf;

use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("invalid configuration: {0}")]
    Configuration(String),

    #[error("failed to load resource `{}`", path.display())]
    ResourceLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("degenerate viewport: x=[{x_min}, {x_max}], y=[{y_min}, {y_max}]")]
    DegenerateViewport {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },

    #[error("data set is empty")]
    EmptyDataSet,

    #[error("invalid plot area: width={width}, height={height}")]
    InvalidPlotArea { width: f64, height: f64 },

    #[error("render loop failed: {0}")]
    RenderLoop(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
