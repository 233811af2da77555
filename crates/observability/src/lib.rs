//! Tracing and logging setup shared by partcat binaries.

/// Initialize process-wide tracing with the default [`TracingConfig`].
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(&TracingConfig::default());
}

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use self::tracing::{LogFormat, TracingConfig};
