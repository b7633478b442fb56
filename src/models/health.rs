use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::models::memory::MemorySnapshot;

/// 错误没有携带信息时的返回值
pub const UNKNOWN_ERROR: &str = "Unknown error";

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Healthy,
    Unhealthy,
}

/// Body of a `GET` health response.
///
/// `uptime`, `memory` and `environment` are only present when healthy,
/// `error` only when unhealthy. Absent fields are omitted from the JSON.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: Status,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<MemorySnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthStatus {
    pub fn healthy(
        now: DateTime<Utc>,
        uptime: u64,
        memory: MemorySnapshot,
        environment: impl Into<String>,
    ) -> Self {
        Self {
            status: Status::Healthy,
            timestamp: iso_timestamp(now),
            uptime: Some(uptime),
            memory: Some(memory),
            environment: Some(environment.into()),
            error: None,
        }
    }

    pub fn unhealthy(now: DateTime<Utc>, reason: impl Into<String>) -> Self {
        Self {
            status: Status::Unhealthy,
            timestamp: iso_timestamp(now),
            uptime: None,
            memory: None,
            environment: None,
            error: Some(reason.into()),
        }
    }
}

/// 单次检查的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthReport {
    Healthy(HealthStatus),
    Unhealthy(HealthStatus),
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthReport::Healthy(_))
    }

    pub fn into_status(self) -> HealthStatus {
        match self {
            HealthReport::Healthy(status) | HealthReport::Unhealthy(status) => status,
        }
    }
}

/// Maps a possibly empty failure message to the reason reported to callers.
pub fn failure_reason(message: Option<&str>) -> String {
    match message {
        Some(msg) if !msg.is_empty() => msg.to_string(),
        _ => UNKNOWN_ERROR.to_string(),
    }
}

/// RFC 3339 with millisecond precision and a `Z` suffix, e.g. `2024-05-01T12:00:00.000Z`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
