use chrono::{DateTime, Utc};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::models::health::failure_reason;
use crate::models::{HealthReport, HealthStatus, MemorySnapshot, MemoryUsage};
use crate::services::{Clock, ProcessMetricsProvider};

/// Evaluates process health from injected collaborators.
///
/// Holds no mutable state: the start instant and the environment are fixed
/// at construction, so concurrent checks never interact.
pub struct HealthChecker {
    started_at: DateTime<Utc>,
    environment: String,
    clock: Arc<dyn Clock>,
    metrics: Arc<dyn ProcessMetricsProvider>,
}

impl HealthChecker {
    pub fn new(
        started_at: DateTime<Utc>,
        environment: impl Into<String>,
        clock: Arc<dyn Clock>,
        metrics: Arc<dyn ProcessMetricsProvider>,
    ) -> Self {
        Self {
            started_at,
            environment: environment.into(),
            clock,
            metrics,
        }
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// 采集一次健康数据; 任何采集失败都转换为 `Unhealthy`
    pub fn check(&self) -> HealthReport {
        match self.collect_memory() {
            Ok(usage) => {
                let now = self.clock.now();
                let uptime = uptime_seconds(self.started_at, now);
                log::debug!("Health check ok: uptime={}s", uptime);
                HealthReport::Healthy(HealthStatus::healthy(
                    now,
                    uptime,
                    MemorySnapshot::from(usage),
                    self.environment.as_str(),
                ))
            }
            Err(reason) => {
                HealthReport::Unhealthy(HealthStatus::unhealthy(self.clock.now(), reason))
            }
        }
    }

    fn collect_memory(&self) -> Result<MemoryUsage, String> {
        match panic::catch_unwind(AssertUnwindSafe(|| self.metrics.current_usage())) {
            Ok(Ok(usage)) => Ok(usage),
            Ok(Err(e)) => {
                log::error!("Health check failed: {:#}", e);
                Err(failure_reason(Some(&e.to_string())))
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                log::error!(
                    "Health check failed: metrics provider panicked: {}",
                    message.unwrap_or("<non-string panic payload>")
                );
                Err(failure_reason(message))
            }
        }
    }
}

/// Whole seconds elapsed since `started_at`, `0` if the clock reads earlier.
pub fn uptime_seconds(started_at: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    let millis = (now - started_at).num_milliseconds().max(0);
    (millis / 1000) as u64
}

fn panic_message(payload: &(dyn Any + Send)) -> Option<&str> {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        Some(msg)
    } else {
        payload.downcast_ref::<String>().map(String::as_str)
    }
}
