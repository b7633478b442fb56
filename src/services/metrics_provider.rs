use anyhow::anyhow;
use std::sync::{Mutex, PoisonError};
use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, System};

use crate::models::MemoryUsage;
use crate::services::heap_tracker::heap_stats;

/// 进程内存数据来源
pub trait ProcessMetricsProvider: Send + Sync {
    fn current_usage(&self) -> anyhow::Result<MemoryUsage>;
}

/// Reads RSS from the OS process table and heap figures from the tracking allocator.
pub struct SysinfoMetricsProvider {
    system: Mutex<System>,
}

impl SysinfoMetricsProvider {
    pub fn new() -> Self {
        Self {
            system: Mutex::new(System::new()),
        }
    }
}

impl Default for SysinfoMetricsProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessMetricsProvider for SysinfoMetricsProvider {
    fn current_usage(&self) -> anyhow::Result<MemoryUsage> {
        let pid = sysinfo::get_current_pid()
            .map_err(|e| anyhow!("Failed to resolve current PID: {}", e))?;

        // 刷新会覆盖进程条目, 中毒的锁可以直接复用
        let mut sys = self.system.lock().unwrap_or_else(PoisonError::into_inner);

        // 只刷新当前进程的内存
        sys.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[pid]),
            true,
            ProcessRefreshKind::nothing().with_memory(),
        );

        let process = sys
            .process(pid)
            .ok_or_else(|| anyhow!("Process {} not found in process table", pid))?;

        let rss = process.memory();
        let heap = heap_stats();

        Ok(MemoryUsage {
            rss,
            heap_total: heap.peak,
            heap_used: heap.live,
            external: rss.saturating_sub(heap.live),
        })
    }
}
