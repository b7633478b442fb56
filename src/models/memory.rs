use serde::Serialize;

const BYTES_PER_MB: u64 = 1024 * 1024;

/// 进程内存原始数据 (字节)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryUsage {
    /// 常驻内存 (RSS)
    pub rss: u64,
    /// 堆内存峰值
    pub heap_total: u64,
    /// 当前存活的堆内存
    pub heap_used: u64,
    /// 堆之外的常驻内存
    pub external: u64,
}

/// 对外输出的内存快照 (MB, 四舍五入)
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MemorySnapshot {
    pub rss: u64,
    pub heap_total: u64,
    pub heap_used: u64,
    pub external: u64,
}

impl From<MemoryUsage> for MemorySnapshot {
    fn from(usage: MemoryUsage) -> Self {
        Self {
            rss: bytes_to_mb(usage.rss),
            heap_total: bytes_to_mb(usage.heap_total),
            heap_used: bytes_to_mb(usage.heap_used),
            external: bytes_to_mb(usage.external),
        }
    }
}

/// Rounds a byte count to the nearest whole megabyte, halves rounding up.
pub fn bytes_to_mb(bytes: u64) -> u64 {
    let whole = bytes / BYTES_PER_MB;
    if bytes % BYTES_PER_MB >= BYTES_PER_MB / 2 {
        whole + 1
    } else {
        whole
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_to_mb_rounding() {
        assert_eq!(bytes_to_mb(0), 0);
        assert_eq!(bytes_to_mb(BYTES_PER_MB / 2 - 1), 0);
        assert_eq!(bytes_to_mb(BYTES_PER_MB / 2), 1);
        assert_eq!(bytes_to_mb(3 * BYTES_PER_MB + 100), 3);
        assert_eq!(bytes_to_mb(u64::MAX), u64::MAX / BYTES_PER_MB + 1);
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let snapshot = MemorySnapshot::from(MemoryUsage {
            rss: 50 * BYTES_PER_MB,
            heap_total: 20 * BYTES_PER_MB,
            heap_used: 12 * BYTES_PER_MB + BYTES_PER_MB / 2,
            external: 0,
        });

        let json = serde_json::to_value(snapshot).expect("Should serialize to JSON");
        assert_eq!(
            json,
            serde_json::json!({"rss": 50, "heapTotal": 20, "heapUsed": 13, "external": 0})
        );
    }
}
