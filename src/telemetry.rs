//! Telemetry metric name constants.
//!
//! Centralised metric names for emoscope operations. Consumers install
//! their own `metrics` recorder (e.g. prometheus, statsd); without a
//! recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `emoscope_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `provider` — classifier backend name (e.g. "watson-nlp")
//! - `operation` — operation invoked (e.g. "detect")
//! - `status` — outcome: "ok" or "error"

/// Total classification requests dispatched through the detector.
///
/// Labels: `provider`, `operation`, `status` ("ok" | "error").
pub const REQUESTS_TOTAL: &str = "emoscope_requests_total";

/// Request duration in seconds.
///
/// Labels: `provider`, `operation`.
pub const REQUEST_DURATION_SECONDS: &str = "emoscope_request_duration_seconds";

/// Total retry attempts (not counting the initial request).
///
/// Labels: `provider`, `operation`.
pub const RETRIES_TOTAL: &str = "emoscope_retries_total";
