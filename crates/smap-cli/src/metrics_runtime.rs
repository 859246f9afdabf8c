//! In-process aggregation of the library's maintenance metrics.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use smap_rs::metrics::{self, MapOp, MapOpType, MetricsSink};

/// `MetricsCounters` tallies maintenance events recorded by the map.
#[derive(Default)]
pub struct MetricsCounters {
    restripes: AtomicU64,
    shrinks: AtomicU64,
    removals: AtomicU64,
    clears: AtomicU64,
}

impl MetricsCounters {
    /// `install` registers a fresh counter set as the process-wide sink.
    ///
    /// Returns `None` when another sink already claimed the slot.
    pub fn install() -> Option<Arc<Self>> {
        let counters = Arc::new(Self::default());
        metrics::install_metrics_sink(counters.clone()).then_some(counters)
    }

    pub fn restripes(&self) -> u64 {
        self.restripes.load(Ordering::Relaxed)
    }

    pub fn shrinks(&self) -> u64 {
        self.shrinks.load(Ordering::Relaxed)
    }

    pub fn removals(&self) -> u64 {
        self.removals.load(Ordering::Relaxed)
    }

    pub fn clears(&self) -> u64 {
        self.clears.load(Ordering::Relaxed)
    }
}

impl MetricsSink for MetricsCounters {
    fn record_map_op(&self, op: MapOp) {
        let counter = match op.op {
            MapOpType::Restripe => &self.restripes,
            MapOpType::Shrink => &self.shrinks,
            MapOpType::Remove => &self.removals,
            MapOpType::Clear => &self.clears,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }
}
