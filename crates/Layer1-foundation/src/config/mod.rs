//! Config - 계산 설정 관리
//!
//! - `policy.rs` - 음수/오버플로/추적 정책
//! - `compute.rs` - ComputeConfig 통합 설정

mod compute;
mod policy;

pub use compute::{ComputeConfig, ComputeConfigFile, COMPUTE_CONFIG_FILE};
pub use policy::{NegativePolicy, OverflowPolicy, TraceConfig, TracePriority};
