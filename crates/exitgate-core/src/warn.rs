// ── Diagnostic warning sink ──
//
// The catalog builder reports non-fatal conditions (disabled endpoints,
// unknown country codes) through this seam instead of its return value.
// Fire-and-forget: callers never block on it or observe a result.

/// Sink for non-fatal diagnostics emitted while building a catalog.
pub trait Warner {
    fn warn(&self, message: &str);
}

/// Forwards warnings to the active `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingWarner;

impl Warner for TracingWarner {
    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }
}
