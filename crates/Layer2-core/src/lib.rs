//! fib-core: Core computation for fibcalc
//!
//! Layer2 - Fibonacci 계산 레이어
//!
//! # 주요 모듈
//!
//! - `compute`: FibonacciComputer (정책 기반 반복 계산)
//! - `sequence`: FibonacciSequence (오버플로 전까지의 수열 iterator)
//!
//! # 사용 예시
//!
//! ```
//! use fib_core::{FibonacciComputer, OverflowPolicy, ComputeConfig, RecordingObserver};
//!
//! // 기본 정책: 음수/오버플로는 에러
//! let computer = FibonacciComputer::<i64>::new();
//! assert_eq!(computer.compute(20).unwrap(), 6765);
//!
//! // 오버플로 정책 변경
//! let wrapping = FibonacciComputer::<u8>::with_config(
//!     ComputeConfig::new().overflow_policy(OverflowPolicy::Wrapping),
//! );
//! assert_eq!(wrapping.compute(14).unwrap(), (377u32 % 256) as u8);
//!
//! // 반복 관측
//! let mut recorder = RecordingObserver::new();
//! computer.compute_with(5, &mut recorder).unwrap();
//! assert_eq!(recorder.len(), 4);
//! ```

pub mod compute;
pub mod sequence;

// Re-exports: Compute
pub use compute::{fibonacci, FibonacciComputer};

// Re-exports: Sequence
pub use sequence::FibonacciSequence;

// Re-exports: Foundation (호출자가 Layer1을 직접 의존하지 않아도 되도록)
pub use fib_foundation::{
    ChainObserver, ComputeConfig, Error, FibInt, NegativePolicy, NoopObserver, OverflowPolicy,
    RecordingObserver, Result, StepObserver, StepState, TraceConfig, TracePriority,
    TracingObserver,
};
