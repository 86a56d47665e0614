//! Log output for the `parliament_svg` binary and other embedders.
//!
//! The library only emits `tracing` events. Hosts that already own a
//! subscriber never need this module.

/// Installs a compact stderr subscriber filtered by `RUST_LOG` (default `info`).
///
/// Stdout stays free for the rendered SVG or JSON. Returns `false` when the
/// `telemetry` feature is off or another global subscriber is already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
