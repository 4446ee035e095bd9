//! Core Traits - 계산 인터페이스
//!
//! - `FibInt`: 결과로 쓸 수 있는 고정 폭 정수
//! - `StepObserver`: 반복마다 호출되는 관측 훅

use std::fmt::{Debug, Display};

use super::types::StepState;

// ============================================================================
// FibInt - 결과 정수 타입
// ============================================================================

/// Fibonacci 값을 담을 수 있는 고정 폭 정수
///
/// 모든 기본 정수 타입에 구현되어 있습니다. 덧셈 정책(checked, wrapping,
/// saturating)은 호출하는 쪽이 고릅니다.
pub trait FibInt: Copy + Ord + Debug + Display + Send + Sync + 'static {
    /// F(0)
    const ZERO: Self;
    /// F(1)
    const ONE: Self;
    /// 타입 최대값 (Saturating 정책의 상한)
    const MAX: Self;
    /// 에러 메시지에 쓰는 타입 이름 (`"i64"` 등)
    const TYPE_NAME: &'static str;

    fn checked_add(self, rhs: Self) -> Option<Self>;

    fn wrapping_add(self, rhs: Self) -> Self;

    fn saturating_add(self, rhs: Self) -> Self;

    /// 인덱스를 그대로 결과 타입으로 변환 (표현 불가면 None)
    fn from_index(index: i64) -> Option<Self>;
}

macro_rules! impl_fib_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl FibInt for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MAX: Self = <$t>::MAX;
                const TYPE_NAME: &'static str = stringify!($t);

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$t>::wrapping_add(self, rhs)
                }

                #[inline]
                fn saturating_add(self, rhs: Self) -> Self {
                    <$t>::saturating_add(self, rhs)
                }

                #[inline]
                fn from_index(index: i64) -> Option<Self> {
                    <$t>::try_from(index).ok()
                }
            }
        )*
    };
}

impl_fib_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

// ============================================================================
// StepObserver - 반복 관측 훅
// ============================================================================

/// 루프 한 단계마다 누산기 상태를 받는 관측자
///
/// `n >= 2`인 계산에서 `n - 1`번 호출됩니다 (`Saturating`은 포화된 단계까지만).
/// 클로저도 그대로 쓸 수 있습니다.
///
/// ```
/// use fib_foundation::{StepObserver, StepState};
///
/// let mut seen = Vec::new();
/// let mut observer = |step: StepState<u64>| seen.push(step.curr);
/// observer.on_step(StepState::new(2, 1, 1));
/// assert_eq!(seen, vec![1]);
/// ```
pub trait StepObserver<T> {
    fn on_step(&mut self, step: StepState<T>);
}

impl<T, F> StepObserver<T> for F
where
    F: FnMut(StepState<T>),
{
    fn on_step(&mut self, step: StepState<T>) {
        self(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fib_int_constants() {
        assert_eq!(<u8 as FibInt>::ZERO, 0);
        assert_eq!(<i128 as FibInt>::ONE, 1);
        assert_eq!(<u16 as FibInt>::MAX, u16::MAX);
        assert_eq!(<i64 as FibInt>::TYPE_NAME, "i64");
        assert_eq!(<usize as FibInt>::TYPE_NAME, "usize");
    }

    #[test]
    fn test_fib_int_addition_policies() {
        assert_eq!(FibInt::checked_add(200u8, 55u8), Some(255));
        assert_eq!(FibInt::checked_add(200u8, 56u8), None);
        assert_eq!(FibInt::wrapping_add(200u8, 56u8), 0);
        assert_eq!(FibInt::saturating_add(i8::MAX, 1i8), i8::MAX);
    }

    #[test]
    fn test_fib_int_from_index() {
        assert_eq!(<u32 as FibInt>::from_index(7), Some(7));
        assert_eq!(<u32 as FibInt>::from_index(-1), None);
        assert_eq!(<i16 as FibInt>::from_index(-5), Some(-5));
        assert_eq!(<i8 as FibInt>::from_index(1_000), None);
    }

    #[test]
    fn test_closure_observer() {
        let mut total = 0u64;
        {
            let mut observer = |step: StepState<u64>| total += step.curr;
            observer.on_step(StepState::new(2, 1, 1));
            observer.on_step(StepState::new(3, 1, 2));
        }
        assert_eq!(total, 3);
    }
}
