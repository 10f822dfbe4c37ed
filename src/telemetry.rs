//! Opt-in subscriber for the engine's `tracing` events.
//!
//! The engine emits `info!` when the render loop starts and stops, `debug!`
//! on fits, resizes, series changes and rejected pan/zoom gestures, and
//! `warn!` when a fit command or resize is refused. Wheel zoom steps and
//! rendered frames are `trace!`. Hosts that already own a subscriber can skip
//! `init_default_tracing` entirely.

/// Installs a compact fmt subscriber filtered by `RUST_LOG`, defaulting to
/// `info` so only loop start/stop and rejected commands show up.
///
/// Returns `false` without the `telemetry` feature or when a global
/// subscriber is already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
