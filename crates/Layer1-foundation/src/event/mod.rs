//! Event System - 반복 단위 관측
//!
//! 계산 루프가 한 단계 진행할 때마다 `StepObserver`에게 누산기 상태를 넘깁니다.
//!
//! ## 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  FibonacciComputer loop                                     │
//! │    on_step(StepState) ────────────────────────────┐         │
//! │         │                                          │         │
//! │         ▼                                          ▼         │
//! │  ┌──────────────────┐                   ┌──────────────────┐ │
//! │  │ TracingObserver  │                   │ caller observer  │ │
//! │  │ (config.trace)   │                   │ (closure, Vec..) │ │
//! │  └──────────────────┘                   └──────────────────┘ │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 사용법
//!
//! ```
//! use fib_foundation::event::{ChainObserver, RecordingObserver, TracingObserver};
//! use fib_foundation::{StepObserver, StepState, TracePriority};
//!
//! let mut observer = ChainObserver::new(
//!     TracingObserver::new(TracePriority::High),
//!     RecordingObserver::<u64>::new(),
//! );
//! observer.on_step(StepState::new(2, 1, 1));
//! assert_eq!(observer.second.len(), 1);
//! ```

pub mod observers;

pub use observers::{
    ChainObserver, NoopObserver, RecordingObserver, TracingObserver, STEP_TRACE_TARGET,
};
