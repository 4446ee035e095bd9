//! FibonacciComputer - 반복 방식 Fibonacci 계산기
//!
//! `prev`, `curr` 두 누산기만 쓰는 O(n) 시간, O(1) 공간 루프입니다.

use std::marker::PhantomData;

use fib_foundation::{
    ComputeConfig, Error, FibInt, NegativePolicy, NoopObserver, OverflowPolicy, Result,
    StepObserver, StepState, TracingObserver,
};
use tracing::{debug, warn};

use crate::sequence::FibonacciSequence;

/// n번째 Fibonacci 수 계산기
///
/// 결과 타입 `T`는 고정 폭 정수입니다 (기본 `i64`). 계약:
///
/// - `compute(0) == 0`, `compute(1) == 1`, `n >= 2`는 `F(n-2) + F(n-1)`.
/// - 음수 `n`: 기본은 `Error::InvalidInput`. `NegativePolicy::PassThrough`면 `n`을 그대로 반환.
/// - 오버플로: 기본은 `Error::Overflow` (`i64`에서 `compute(93)`부터).
///   `Wrapping`은 `F(n) mod 2^bits`, `Saturating`은 `T::MAX`.
/// - `max_index`를 넘는 인덱스는 `Error::InvalidInput`.
///
/// 상태는 호출마다 스택에만 있으므로 여러 스레드에서 동시에 불러도 됩니다.
///
/// ```
/// use fib_core::FibonacciComputer;
///
/// let computer = FibonacciComputer::<i64>::new();
/// assert_eq!(computer.compute(10).unwrap(), 55);
/// assert!(computer.compute(93).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FibonacciComputer<T = i64> {
    config: ComputeConfig,
    _result: PhantomData<fn() -> T>,
}

impl<T: FibInt> Default for FibonacciComputer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FibInt> FibonacciComputer<T> {
    pub fn new() -> Self {
        Self::with_config(ComputeConfig::default())
    }

    pub fn with_config(config: ComputeConfig) -> Self {
        Self {
            config,
            _result: PhantomData,
        }
    }

    pub fn config(&self) -> &ComputeConfig {
        &self.config
    }

    /// `T`로 정확히 표현되는 가장 큰 인덱스 (i64 → 92, u64 → 93)
    ///
    /// 상수가 아니라 호출할 때마다 수열을 끝까지 다시 돌려 셉니다 (최대 187단계).
    pub fn max_exact_index() -> u64 {
        (FibonacciSequence::<T>::new().count() as u64).saturating_sub(1)
    }

    /// F(n) 계산
    pub fn compute(&self, n: i64) -> Result<T> {
        self.compute_with(n, &mut NoopObserver)
    }

    /// F(n) 계산 + 반복마다 `observer` 호출
    ///
    /// `n >= 2`일 때 인덱스 2..=n 각각에 대해 한 번씩, shift 직후 상태로 호출됩니다.
    /// 오버플로로 실패하면 실패한 단계는 전달되지 않습니다.
    /// `Saturating`에서 값이 `T::MAX`에 닿으면 그 단계까지만 전달하고 끝납니다.
    pub fn compute_with<O>(&self, n: i64, observer: &mut O) -> Result<T>
    where
        O: StepObserver<T>,
    {
        debug!(
            index = n,
            width = T::TYPE_NAME,
            overflow = %self.config.overflow,
            "computing fibonacci"
        );

        let index = self.validate(n)?;
        let Some(index) = index else {
            // PassThrough 정책의 음수 인덱스
            return T::from_index(n).ok_or_else(|| {
                Error::invalid_input(n, format!("not representable in {}", T::TYPE_NAME))
            });
        };

        // n <= 1 가드
        if index == 0 {
            return Ok(T::ZERO);
        }
        if index == 1 {
            return Ok(T::ONE);
        }

        let mut tracer = self
            .config
            .trace
            .enabled
            .then(|| TracingObserver::new(self.config.trace.priority));

        let mut prev = T::ZERO;
        let mut curr = T::ONE;
        for i in 2..=index {
            let next = match self.config.overflow {
                OverflowPolicy::Error => match prev.checked_add(curr) {
                    Some(next) => next,
                    None => {
                        warn!(
                            index,
                            step = i,
                            width = T::TYPE_NAME,
                            "fibonacci value overflowed"
                        );
                        return Err(Error::overflow(index, T::TYPE_NAME));
                    }
                },
                OverflowPolicy::Wrapping => prev.wrapping_add(curr),
                OverflowPolicy::Saturating => prev.saturating_add(curr),
            };
            prev = curr;
            curr = next;

            let step = StepState::new(i, prev, curr);
            observer.on_step(step);
            if let Some(tracer) = tracer.as_mut() {
                tracer.on_step(step);
            }

            // 포화 후에는 값이 바뀌지 않음
            if self.config.overflow == OverflowPolicy::Saturating && curr == T::MAX {
                debug!(index, step = i, "saturated, stopping early");
                break;
            }
        }

        Ok(curr)
    }

    /// 음수/상한 검사. `Ok(None)`은 PassThrough로 넘길 음수 인덱스
    fn validate(&self, n: i64) -> Result<Option<u64>> {
        if n < 0 {
            return match self.config.negative {
                NegativePolicy::Reject => Err(Error::invalid_input(n, "negative index")),
                NegativePolicy::PassThrough => Ok(None),
            };
        }

        let index = n.unsigned_abs();
        if let Some(max) = self.config.max_index {
            if index > max {
                return Err(Error::invalid_input(
                    n,
                    format!("exceeds max_index {}", max),
                ));
            }
        }
        Ok(Some(index))
    }
}

/// 기본 정책으로 F(n)을 `u64`로 계산
///
/// `n > 93`이면 `Error::Overflow`.
pub fn fibonacci(n: u64) -> Result<u64> {
    let index = i64::try_from(n).map_err(|_| Error::overflow(n, <u64 as FibInt>::TYPE_NAME))?;
    FibonacciComputer::<u64>::new().compute(index)
}
