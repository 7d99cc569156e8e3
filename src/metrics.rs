use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Usage metrics for monitoring
#[derive(Clone)]
pub struct Metrics {
    pub previews_served: Arc<AtomicUsize>,
    pub layouts_created: Arc<AtomicUsize>,
    pub locations_created: Arc<AtomicUsize>,
    pub validation_failures: Arc<AtomicUsize>,
    pub start_time: Instant,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            previews_served: Arc::new(AtomicUsize::new(0)),
            layouts_created: Arc::new(AtomicUsize::new(0)),
            locations_created: Arc::new(AtomicUsize::new(0)),
            validation_failures: Arc::new(AtomicUsize::new(0)),
            start_time: Instant::now(),
        }
    }

    pub fn inc_previews_served(&self) {
        self.previews_served.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_layouts_created(&self) {
        self.layouts_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_locations_created(&self, count: usize) {
        self.locations_created.fetch_add(count, Ordering::Relaxed);
    }

    pub fn inc_validation_failures(&self) {
        self.validation_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            previews_served: self.previews_served.load(Ordering::Relaxed),
            layouts_created: self.layouts_created.load(Ordering::Relaxed),
            locations_created: self.locations_created.load(Ordering::Relaxed),
            validation_failures: self.validation_failures.load(Ordering::Relaxed),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
pub struct MetricsSnapshot {
    pub previews_served: usize,
    pub layouts_created: usize,
    pub locations_created: usize,
    pub validation_failures: usize,
    pub uptime_seconds: u64,
}
