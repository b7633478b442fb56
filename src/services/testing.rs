//! Stub collaborators shared by unit tests.

use anyhow::anyhow;
use chrono::{DateTime, TimeZone, Utc};
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::models::MemoryUsage;
use crate::services::metrics_provider::ProcessMetricsProvider;

pub const MB: u64 = 1024 * 1024;

pub fn start_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

/// Returns the same byte counts on every call.
pub struct StaticProvider {
    usage: MemoryUsage,
}

impl StaticProvider {
    pub fn new(rss: u64, heap_total: u64, heap_used: u64, external: u64) -> Self {
        Self {
            usage: MemoryUsage {
                rss,
                heap_total,
                heap_used,
                external,
            },
        }
    }
}

impl ProcessMetricsProvider for StaticProvider {
    fn current_usage(&self) -> anyhow::Result<MemoryUsage> {
        Ok(self.usage)
    }
}

/// Fails every call with the given message and counts how often it was asked.
pub struct FailingProvider {
    message: &'static str,
    calls: AtomicUsize,
}

impl FailingProvider {
    pub fn new(message: &'static str) -> Self {
        Self {
            message,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[derive(Debug)]
struct SilentError;

impl fmt::Display for SilentError {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

impl std::error::Error for SilentError {}

impl ProcessMetricsProvider for FailingProvider {
    fn current_usage(&self) -> anyhow::Result<MemoryUsage> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.message.is_empty() {
            Err(SilentError.into())
        } else {
            Err(anyhow!(self.message))
        }
    }
}

pub enum PanickingProvider {
    WithMessage(&'static str),
    Opaque,
}

impl ProcessMetricsProvider for PanickingProvider {
    fn current_usage(&self) -> anyhow::Result<MemoryUsage> {
        match self {
            PanickingProvider::WithMessage(msg) => panic!("{}", msg),
            PanickingProvider::Opaque => std::panic::panic_any(42_u32),
        }
    }
}
