//! Global allocator wrapper that counts live heap bytes.
//!
//! Installed in `main.rs` with `#[global_allocator]`. Every allocation and
//! deallocation goes through [`std::alloc::System`]; the wrapper only keeps
//! two relaxed counters, so the numbers are approximate under contention.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicUsize, Ordering};

static LIVE_BYTES: AtomicUsize = AtomicUsize::new(0);
static PEAK_BYTES: AtomicUsize = AtomicUsize::new(0);

pub struct TrackingAllocator;

/// 堆内存统计 (字节)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapStats {
    /// 当前存活
    pub live: u64,
    /// 历史峰值
    pub peak: u64,
}

pub fn heap_stats() -> HeapStats {
    let live = LIVE_BYTES.load(Ordering::Relaxed) as u64;
    let peak = PEAK_BYTES.load(Ordering::Relaxed) as u64;
    HeapStats {
        live,
        peak: peak.max(live),
    }
}

fn record_alloc(size: usize) {
    let live = LIVE_BYTES.fetch_add(size, Ordering::Relaxed) + size;
    PEAK_BYTES.fetch_max(live, Ordering::Relaxed);
}

fn record_dealloc(size: usize) {
    LIVE_BYTES.fetch_sub(size, Ordering::Relaxed);
}

unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            record_alloc(layout.size());
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc_zeroed(layout) };
        if !ptr.is_null() {
            record_alloc(layout.size());
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
        record_dealloc(layout.size());
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        // 失败时原内存块保持不变
        if !new_ptr.is_null() {
            let old_size = layout.size();
            if new_size > old_size {
                record_alloc(new_size - old_size);
            } else {
                record_dealloc(old_size - new_size);
            }
        }
        new_ptr
    }
}
