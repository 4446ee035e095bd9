//! Compute Policies - 음수 인덱스, 오버플로, 추적 정책
//!
//! 고정 폭 정수로 계산하므로 범위를 벗어난 경우의 동작을 명시적으로 고릅니다.

use serde::{Deserialize, Serialize};

// ============================================================================
// Negative Policy
// ============================================================================

/// 음수 인덱스 처리 정책
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegativePolicy {
    /// `Error::InvalidInput` 반환 (기본값)
    #[default]
    Reject,
    /// `n <= 1` 가드를 그대로 따라 `n` 자신을 반환
    ///
    /// 결과 타입이 `n`을 표현하지 못하면 (부호 없는 타입 등) 여전히 `InvalidInput`.
    PassThrough,
}

// ============================================================================
// Overflow Policy
// ============================================================================

/// 결과가 정수 범위를 넘을 때의 정책
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// `Error::Overflow` 반환 (기본값)
    #[default]
    Error,
    /// wrap-around 덧셈. 결과는 F(n) mod 2^bits (부호 있는 타입은 2의 보수로 해석)
    ///
    /// 끝까지 n번 반복하므로 O(n)이고 상한이 없습니다. 큰 인덱스를 받을 수 있으면
    /// `max_index`를 함께 설정하세요.
    Wrapping,
    /// 타입 최대값에서 멈춤
    ///
    /// 값이 `MAX`에 닿으면 루프를 끝내므로 인덱스 크기와 무관하게 빨리 끝납니다.
    Saturating,
}

impl OverflowPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Wrapping => "wrapping",
            Self::Saturating => "saturating",
        }
    }
}

impl std::fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Trace Config
// ============================================================================

/// 추적 이벤트 우선순위
///
/// 높을수록 더 높은 tracing 레벨로 기록됩니다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TracePriority {
    /// TRACE
    Low,
    /// DEBUG
    #[default]
    Normal,
    /// INFO
    High,
}

/// 반복 단위 추적 설정
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TraceConfig {
    /// 반복마다 tracing 이벤트 발행
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub priority: TracePriority,
}

impl TraceConfig {
    pub fn active(priority: TracePriority) -> Self {
        Self {
            enabled: true,
            priority,
        }
    }
}
