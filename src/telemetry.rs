//! Telemetry helpers for applications embedding `chart-bubble`.
//!
//! Radius resolution emits `tracing` events under the `chart_bubble` target:
//!
//! - `debug`: render-pass start and each axis base-length measurement.
//! - `trace`: every resolved radius with its magnitude, dataset maximum and ceiling.
//! - `warn`: `rendered_radii` over a dataset without a positive magnitude.
//!
//! Consumers can either call `init_default_tracing` or wire their own
//! `tracing` subscriber and filters.

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when no initialization is performed (feature disabled) or if a
/// global subscriber was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("chart_bubble=info")),
            )
            .with_target(true)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
