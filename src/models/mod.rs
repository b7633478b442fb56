pub mod health;
pub mod memory;

pub use health::{HealthReport, HealthStatus};
pub use memory::{MemorySnapshot, MemoryUsage};
