//! Logging facilities for Lister.
//!
//! Lister uses the `tracing` crate for instrumentation. To see logs, install
//! a subscriber in the host application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("lister=debug,lister_core=trace")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "lister_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "lister_core::signal";
    /// List model mutations and queries.
    pub const MODEL: &str = "lister::model";
    /// Bulk row removal.
    pub const REMOVAL: &str = "lister::removal";
    /// Configuration loading.
    pub const CONFIG: &str = "lister::config";
    /// Performance spans.
    pub const PERF: &str = "lister::perf";
}

/// A guard that keeps a performance span entered until dropped.
///
/// ```
/// use lister_core::logging::PerfSpan;
///
/// let _span = PerfSpan::new("remove_rows");
/// // ... timed work ...
/// ```
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "lister::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
