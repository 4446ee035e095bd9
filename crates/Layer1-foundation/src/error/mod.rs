//! Error types for fibcalc
//!
//! 모든 에러를 중앙에서 관리

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// fibcalc 에러 타입
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // 입력 관련
    // ========================================================================
    #[error("Invalid input: index {index} - {reason}")]
    InvalidInput { index: i64, reason: String },

    // ========================================================================
    // 계산 관련
    // ========================================================================
    #[error("Overflow: F({index}) does not fit in {width}")]
    Overflow { index: u64, width: &'static str },

    // ========================================================================
    // 설정 관련
    // ========================================================================
    #[error("Configuration error: {0}")]
    Config(String),

    // ========================================================================
    // 외부 에러 변환
    // ========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// 계산은 결정적이므로 재시도해도 결과가 같음
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// 사용자에게 보여줄 수 있는 에러인지 확인
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Error::InvalidInput { .. } | Error::Overflow { .. })
    }

    /// 입력 에러 생성 헬퍼
    pub fn invalid_input(index: i64, reason: impl Into<String>) -> Self {
        Error::InvalidInput {
            index,
            reason: reason.into(),
        }
    }

    /// 오버플로 에러 생성 헬퍼
    pub fn overflow(index: u64, width: &'static str) -> Self {
        Error::Overflow { index, width }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::overflow(93, "i64");
        assert_eq!(err.to_string(), "Overflow: F(93) does not fit in i64");

        let err = Error::invalid_input(-3, "negative index");
        assert_eq!(err.to_string(), "Invalid input: index -3 - negative index");
    }

    #[test]
    fn test_error_classification() {
        assert!(Error::overflow(47, "i32").is_user_facing());
        assert!(Error::invalid_input(-1, "negative index").is_user_facing());
        assert!(!Error::Config("bad".to_string()).is_user_facing());

        assert!(!Error::overflow(47, "i32").is_retryable());
    }
}
