//! Core Types - 공용 타입 정의

use std::fmt;

// ============================================================================
// Step State - 반복 한 번의 누산기 상태
// ============================================================================

/// 루프 한 단계가 끝난 직후의 누산기 상태
///
/// `index`번째 반복에서 `prev = F(index - 1)`, `curr = F(index)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StepState<T> {
    /// 방금 계산한 인덱스 (2부터 시작)
    pub index: u64,
    /// F(index - 1)
    pub prev: T,
    /// F(index)
    pub curr: T,
}

impl<T> StepState<T> {
    pub fn new(index: u64, prev: T, curr: T) -> Self {
        Self { index, prev, curr }
    }
}

impl<T: fmt::Display> fmt::Display for StepState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F({}) = {} (prev {})", self.index, self.curr, self.prev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_state_display() {
        let step = StepState::new(10, 34u64, 55u64);
        assert_eq!(step.to_string(), "F(10) = 55 (prev 34)");
    }
}
