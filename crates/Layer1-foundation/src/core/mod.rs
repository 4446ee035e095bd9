//! Core Module - 핵심 인터페이스 및 타입
//!
//! fibcalc의 계산 레이어가 공유하는 정의입니다.
//!
//! ## 타입 계층
//!
//! - `types.rs`: 데이터 타입 (StepState)
//! - `traits.rs`: 인터페이스 (FibInt, StepObserver)
//!
//! ## 계산 흐름
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  compute(n)                                                 │
//! │    │                                                        │
//! │    ├── n <= 1  ──────────────────────────────▶ F(n) = n     │
//! │    │                                                        │
//! │    └── i = 2..=n                                            │
//! │          next = prev + curr   (FibInt: checked/wrapping)    │
//! │          prev = curr, curr = next                           │
//! │          observer.on_step(StepState { i, prev, curr })      │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod traits;
pub mod types;

// ============================================================================
// Types - 데이터 타입 (types.rs)
// ============================================================================

pub use types::StepState;

// ============================================================================
// Traits - 인터페이스 (traits.rs)
// ============================================================================

// Result integer
pub use traits::FibInt;

// Per-iteration hook
pub use traits::StepObserver;
