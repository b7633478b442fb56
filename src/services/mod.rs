pub mod clock;
pub mod health_checker;
pub mod heap_tracker;
pub mod metrics_provider;

#[cfg(test)]
pub mod testing;

pub use clock::{Clock, SystemClock};
pub use health_checker::HealthChecker;
pub use heap_tracker::TrackingAllocator;
pub use metrics_provider::{ProcessMetricsProvider, SysinfoMetricsProvider};
