use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use std::sync::Arc;

use crate::services::{HealthChecker, SysinfoMetricsProvider, SystemClock};

/// 未配置部署环境时的返回值
pub const UNKNOWN_ENVIRONMENT: &str = "unknown";

lazy_static! {
    /// 进程启动时间, 在 `main` 开头初始化, 之后不再变化
    pub static ref PROCESS_STARTED: DateTime<Utc> = Utc::now();
}

pub type AppState = Arc<HealthChecker>;

pub fn new_state(environment: Option<String>) -> AppState {
    Arc::new(HealthChecker::new(
        *PROCESS_STARTED,
        resolve_environment(environment),
        Arc::new(SystemClock),
        Arc::new(SysinfoMetricsProvider::new()),
    ))
}

pub fn resolve_environment(environment: Option<String>) -> String {
    environment
        .map(|env| env.trim().to_string())
        .filter(|env| !env.is_empty())
        .unwrap_or_else(|| UNKNOWN_ENVIRONMENT.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_environment() {
        assert_eq!(resolve_environment(None), UNKNOWN_ENVIRONMENT);
        assert_eq!(resolve_environment(Some(String::new())), UNKNOWN_ENVIRONMENT);
        assert_eq!(resolve_environment(Some(" production ".into())), "production");
    }

    #[test]
    fn test_new_state_uses_process_start() {
        let state = new_state(None);
        assert_eq!(state.environment(), UNKNOWN_ENVIRONMENT);
        assert!(*PROCESS_STARTED <= Utc::now());
    }
}
