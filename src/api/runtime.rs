use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{PlotError, PlotResult};
use crate::render::Renderer;

use super::engine::PlotEngine;
use super::input::{EventSource, InputEvent};

const RENDER_THREAD_NAME: &str = "plotter-render";

/// How the run loop paces frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FramePacing {
    /// Sleeps so frames start at most `fps` times per second.
    Fixed { fps: f64 },
    /// No sleeping; the event source or renderer blocks on the display.
    DisplaySync,
}

impl Default for FramePacing {
    fn default() -> Self {
        Self::Fixed { fps: 60.0 }
    }
}

impl FramePacing {
    pub fn validate(self) -> PlotResult<Self> {
        if let Self::Fixed { fps } = self {
            if !fps.is_finite() || fps <= 0.0 {
                return Err(PlotError::Configuration(format!(
                    "frame rate must be finite and > 0, got {fps}"
                )));
            }
        }
        Ok(self)
    }

    /// Minimum wall time per frame, `None` when unpaced.
    #[must_use]
    pub fn frame_budget(self) -> Option<Duration> {
        match self {
            Self::Fixed { fps } => Duration::try_from_secs_f64(1.0 / fps).ok(),
            Self::DisplaySync => None,
        }
    }
}

/// Cross-thread stop request for a running loop.
#[derive(Debug, Clone, Default)]
pub struct StopToken {
    flag: Arc<AtomicBool>,
}

impl StopToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_stop(&self) {
        self.flag.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_stop_requested(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}

/// Totals reported when a run loop exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RunSummary {
    pub frames: u64,
    pub frames_rendered: u64,
}

/// Drives a `PlotEngine` from an `EventSource` until stopped.
pub struct PlotRunner<R: Renderer, E: EventSource> {
    engine: PlotEngine<R>,
    events: E,
    stop: StopToken,
}

impl<R: Renderer, E: EventSource> PlotRunner<R, E> {
    #[must_use]
    pub fn new(engine: PlotEngine<R>, events: E) -> Self {
        Self {
            engine,
            events,
            stop: StopToken::new(),
        }
    }

    #[must_use]
    pub fn engine(&self) -> &PlotEngine<R> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut PlotEngine<R> {
        &mut self.engine
    }

    #[must_use]
    pub fn into_engine(self) -> PlotEngine<R> {
        self.engine
    }

    /// Token that stops this runner from another thread.
    #[must_use]
    pub fn stop_token(&self) -> StopToken {
        self.stop.clone()
    }

    /// Runs frames on the current thread until Escape, a close request, an
    /// engine stop or the stop token ends the loop.
    ///
    /// Series handed off before the first frame are framed with fit-to-data.
    pub fn run(&mut self) -> PlotResult<RunSummary> {
        let pacing = self.engine.config().frame_pacing;
        let budget = pacing.frame_budget();
        info!(title = %self.engine.config().title, ?pacing, "plot loop started");

        self.engine.drain_series_handoff();
        match self.engine.fit_to_data() {
            Ok(()) | Err(PlotError::EmptyDataSet) => {}
            Err(err) => warn!(error = %err, "initial fit to data skipped"),
        }

        let mut summary = RunSummary::default();
        let mut events: Vec<InputEvent> = Vec::new();
        let mut next_deadline = Instant::now();
        loop {
            if let Some(budget) = budget {
                let now = Instant::now();
                if next_deadline > now {
                    thread::sleep(next_deadline - now);
                }
                next_deadline = next_deadline.max(now) + budget;
            }

            if self.stop.is_stop_requested() {
                debug!("stop token observed");
                break;
            }

            events.clear();
            self.events.poll_events(&mut events);
            let outcome = self.engine.step_frame(&events)?;
            summary.frames += 1;
            if outcome.rendered {
                summary.frames_rendered += 1;
            }
            if outcome.stop_requested {
                break;
            }
        }

        info!(
            frames = summary.frames,
            frames_rendered = summary.frames_rendered,
            "plot loop stopped"
        );
        Ok(summary)
    }
}

impl<R, E> PlotRunner<R, E>
where
    R: Renderer + Send + 'static,
    E: EventSource + Send + 'static,
{
    /// Moves the loop onto a dedicated render thread.
    pub fn spawn(mut self) -> PlotResult<PlotHandle<R>> {
        let stop = self.stop.clone();
        let join = thread::Builder::new()
            .name(RENDER_THREAD_NAME.to_owned())
            .spawn(move || -> PlotResult<(RunSummary, PlotEngine<R>)> {
                let summary = self.run()?;
                Ok((summary, self.engine))
            })
            .map_err(|err| {
                PlotError::RenderLoop(format!("failed to spawn render thread: {err}"))
            })?;
        Ok(PlotHandle { join, stop })
    }
}

/// Handle to a loop running on its own thread.
pub struct PlotHandle<R: Renderer> {
    join: JoinHandle<PlotResult<(RunSummary, PlotEngine<R>)>>,
    stop: StopToken,
}

impl<R: Renderer> PlotHandle<R> {
    pub fn request_stop(&self) {
        self.stop.request_stop();
    }

    #[must_use]
    pub fn stop_token(&self) -> StopToken {
        self.stop.clone()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Waits for the loop to exit and returns the engine for inspection.
    pub fn join(self) -> PlotResult<(RunSummary, PlotEngine<R>)> {
        self.join
            .join()
            .map_err(|_| PlotError::RenderLoop("render thread panicked".to_owned()))?
    }
}
