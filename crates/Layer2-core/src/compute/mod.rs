//! Compute - n번째 Fibonacci 수 계산
//!
//! - `computer.rs` - FibonacciComputer (정책 기반 반복 계산)

mod computer;

pub use computer::{fibonacci, FibonacciComputer};
