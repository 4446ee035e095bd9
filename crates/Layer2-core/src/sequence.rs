//! FibonacciSequence - F(0), F(1), ... 를 차례로 내놓는 iterator
//!
//! 계산기와 같은 두 누산기 상태를 쓰며, `T`로 표현할 수 없는 첫 값에서 끝납니다.

use std::iter::FusedIterator;

use fib_foundation::FibInt;

/// Fibonacci 수열 iterator
///
/// ```
/// use fib_core::FibonacciSequence;
///
/// let first: Vec<u32> = FibonacciSequence::new().take(8).collect();
/// assert_eq!(first, vec![0, 1, 1, 2, 3, 5, 8, 13]);
///
/// // u64로 표현 가능한 값은 F(0)..=F(93)
/// assert_eq!(FibonacciSequence::<u64>::new().count(), 94);
/// ```
#[derive(Debug, Clone)]
pub struct FibonacciSequence<T> {
    /// 다음에 내놓을 값 F(i)
    curr: Option<T>,
    /// F(i + 1), 오버플로면 None
    next: Option<T>,
}

impl<T: FibInt> Default for FibonacciSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FibInt> FibonacciSequence<T> {
    pub fn new() -> Self {
        Self {
            curr: Some(T::ZERO),
            next: Some(T::ONE),
        }
    }
}

impl<T: FibInt> Iterator for FibonacciSequence<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let value = self.curr?;
        let after = self.next.and_then(|next| value.checked_add(next));
        self.curr = self.next;
        self.next = after;
        Some(value)
    }
}

impl<T: FibInt> FusedIterator for FibonacciSequence<T> {}
