//! Configuration for the pattern matcher.

/// Controls which `tracing` events the matcher emits.
///
/// Events are cheap when no subscriber listens, but per-cell tracing still
/// formats positions, so it is off unless asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatcherConfig {
    /// Emit a `trace!` event for every tested cell.
    pub trace_cells: bool,

    /// Emit a `debug!` event whenever the leading alignment restarts.
    pub log_restarts: bool,

    /// Emit a `debug!` event describing each terminal failure.
    pub log_failures: bool,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            trace_cells: false,
            log_restarts: true,
            log_failures: true,
        }
    }
}

impl MatcherConfig {
    /// Creates a configuration that emits no events.
    #[must_use]
    pub fn quiet() -> Self {
        Self {
            trace_cells: false,
            log_restarts: false,
            log_failures: false,
        }
    }

    /// Creates a configuration that emits every event, per-cell tracing included.
    #[must_use]
    pub fn verbose() -> Self {
        Self {
            trace_cells: true,
            log_restarts: true,
            log_failures: true,
        }
    }

    /// Builder method to enable/disable per-cell tracing.
    #[must_use]
    pub fn with_trace_cells(mut self, trace: bool) -> Self {
        self.trace_cells = trace;
        self
    }

    /// Builder method to enable/disable restart events.
    #[must_use]
    pub fn with_log_restarts(mut self, log: bool) -> Self {
        self.log_restarts = log;
        self
    }

    /// Builder method to enable/disable failure events.
    #[must_use]
    pub fn with_log_failures(mut self, log: bool) -> Self {
        self.log_failures = log;
        self
    }
}
