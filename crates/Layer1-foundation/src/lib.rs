//! # fib-foundation
//!
//! Foundation layer for fibcalc:
//! - Core: 결과 정수 trait (FibInt), 반복 관측 trait (StepObserver)
//! - Config: 계산 설정 (음수/오버플로 정책, 추적, 최대 인덱스)
//! - Event: 관측자 구현 (Tracing, Recording, Chain, Noop)
//! - Storage: TOML 설정 파일 저장소
//!
//! ## 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Layer2-core (FibonacciComputer, FibonacciSequence)     │
//! │                     │                                   │
//! │                     ▼                                   │
//! │  ┌───────────┐ ┌───────────┐ ┌───────────┐ ┌────────┐   │
//! │  │ FibInt    │ │ Compute   │ │ Step      │ │ Error  │   │
//! │  │ (u8..i128)│ │ Config    │ │ Observers │ │        │   │
//! │  └───────────┘ └─────┬─────┘ └───────────┘ └────────┘   │
//! │                      ▼                                  │
//! │               ConfigStore (TOML)                        │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod event;
pub mod storage;

// ============================================================================
// Error
// ============================================================================
pub use error::{Error, Result};

// ============================================================================
// Core (핵심 Trait 및 타입)
// ============================================================================
pub use self::core::{FibInt, StepObserver, StepState};

// ============================================================================
// Config (설정)
// ============================================================================
pub use config::{
    ComputeConfig,
    ComputeConfigFile,
    NegativePolicy,
    OverflowPolicy,
    TraceConfig,
    TracePriority,
    COMPUTE_CONFIG_FILE,
};

// ============================================================================
// Event (관측자)
// ============================================================================
pub use event::{ChainObserver, NoopObserver, RecordingObserver, TracingObserver};

// ============================================================================
// Storage (저장소)
// ============================================================================
pub use storage::ConfigStore;
