//! Step Observers - 반복 단위 관측자 구현
//!
//! `StepObserver` trait의 기본 구현들입니다.

use crate::config::TracePriority;
use crate::core::{FibInt, StepObserver, StepState};
use tracing::{debug, info, trace};

/// tracing 이벤트 target
pub const STEP_TRACE_TARGET: &str = "fibcalc::step";

// ============================================================================
// NoopObserver
// ============================================================================

/// 아무것도 하지 않는 관측자
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl<T> StepObserver<T> for NoopObserver {
    #[inline]
    fn on_step(&mut self, _step: StepState<T>) {}
}

// ============================================================================
// TracingObserver
// ============================================================================

/// 반복마다 tracing 이벤트를 발행하는 관측자
///
/// 우선순위에 따라 레벨이 정해집니다: `Low` → TRACE, `Normal` → DEBUG, `High` → INFO.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver {
    priority: TracePriority,
}

impl TracingObserver {
    pub fn new(priority: TracePriority) -> Self {
        Self { priority }
    }

    pub fn priority(&self) -> TracePriority {
        self.priority
    }
}

impl<T: FibInt> StepObserver<T> for TracingObserver {
    fn on_step(&mut self, step: StepState<T>) {
        // tracing 매크로는 레벨이 상수여야 함
        match self.priority {
            TracePriority::Low => trace!(
                target: STEP_TRACE_TARGET,
                index = step.index,
                prev = %step.prev,
                curr = %step.curr,
                "fibonacci step"
            ),
            TracePriority::Normal => debug!(
                target: STEP_TRACE_TARGET,
                index = step.index,
                prev = %step.prev,
                curr = %step.curr,
                "fibonacci step"
            ),
            TracePriority::High => info!(
                target: STEP_TRACE_TARGET,
                index = step.index,
                prev = %step.prev,
                curr = %step.curr,
                "fibonacci step"
            ),
        }
    }
}

// ============================================================================
// RecordingObserver
// ============================================================================

/// 모든 단계를 기록하는 관측자
#[derive(Debug, Clone)]
pub struct RecordingObserver<T> {
    steps: Vec<StepState<T>>,
}

impl<T> Default for RecordingObserver<T> {
    fn default() -> Self {
        Self { steps: Vec::new() }
    }
}

impl<T> RecordingObserver<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> &[StepState<T>] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn last(&self) -> Option<&StepState<T>> {
        self.steps.last()
    }

    pub fn into_steps(self) -> Vec<StepState<T>> {
        self.steps
    }
}

impl<T> StepObserver<T> for RecordingObserver<T> {
    fn on_step(&mut self, step: StepState<T>) {
        self.steps.push(step);
    }
}

// ============================================================================
// ChainObserver
// ============================================================================

/// 두 관측자에게 같은 단계를 전달
#[derive(Debug, Clone, Default)]
pub struct ChainObserver<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> ChainObserver<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    pub fn into_inner(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<T: Copy, A, B> StepObserver<T> for ChainObserver<A, B>
where
    A: StepObserver<T>,
    B: StepObserver<T>,
{
    fn on_step(&mut self, step: StepState<T>) {
        self.first.on_step(step);
        self.second.on_step(step);
    }
}
