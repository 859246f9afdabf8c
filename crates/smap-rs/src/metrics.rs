//! Lightweight metrics hooks for recording stripe-map maintenance events.

use std::sync::{Arc, OnceLock};

/// `MapOpType` describes a maintenance operation on the map.
#[derive(Copy, Clone, Debug)]
pub enum MapOpType {
    /// Backing array rebuilt with grown stripe windows.
    Restripe,
    /// Backing array compacted to a gap-free layout.
    Shrink,
    /// Windowed bulk removal.
    Remove,
    /// All stripes emptied in place.
    Clear,
}

/// `MapOp` captures a maintenance event emitted by the container.
#[derive(Copy, Clone, Debug)]
pub struct MapOp {
    pub op: MapOpType,
    /// Entries the operation moved, removed, or cleared.
    pub entries: u64,
    /// Total backing-array slots after the operation.
    pub slots: u64,
    pub latency_seconds: f64,
}

/// `MetricsSink` records maintenance events from the container.
pub trait MetricsSink: Send + Sync + 'static {
    /// `record_map_op` records one maintenance event.
    fn record_map_op(&self, op: MapOp);
}

static METRICS_SINK: OnceLock<Arc<dyn MetricsSink>> = OnceLock::new();

/// `install_metrics_sink` installs a process-wide metrics sink.
///
/// # Returns
/// `true` if the sink was installed, `false` if one was already registered.
pub fn install_metrics_sink(sink: Arc<dyn MetricsSink>) -> bool {
    METRICS_SINK.set(sink).is_ok()
}

/// `is_enabled` reports whether a metrics sink has been installed.
pub fn is_enabled() -> bool {
    METRICS_SINK.get().is_some()
}

/// `record_map_op` forwards a maintenance event to the installed sink.
pub fn record_map_op(op: MapOp) {
    if let Some(sink) = METRICS_SINK.get() {
        sink.record_map_op(op);
    }
}
