//! 시스템 전반의 에러 타입.
//!
//! 이 모듈은 readhub 시스템 전반에서 사용되는 에러 타입을 정의합니다.

use thiserror::Error;

/// 핵심 에러.
#[derive(Debug, Error)]
pub enum HubError {
    /// 설정 에러
    #[error("설정 에러: {0}")]
    Config(String),

    /// 데이터베이스 에러
    #[error("데이터베이스 에러: {0}")]
    Database(String),

    /// 캐시 에러
    #[error("캐시 에러: {0}")]
    Cache(String),

    /// 직렬화 에러
    #[error("직렬화 에러: {0}")]
    Serialization(String),

    /// 찾을 수 없음
    #[error("찾을 수 없음: {0}")]
    NotFound(String),
}

/// readhub 작업을 위한 Result 타입.
pub type HubResult<T> = Result<T, HubError>;

impl HubError {
    /// 재시도 가능한 에러인지 확인합니다.
    ///
    /// cache 에러는 재계산 폴백이 있으므로 재시도 가능으로 분류합니다.
    pub fn is_retryable(&self) -> bool {
        matches!(self, HubError::Cache(_))
    }
}

impl From<serde_json::Error> for HubError {
    fn from(err: serde_json::Error) -> Self {
        HubError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_retryable() {
        let cache_err = HubError::Cache("connection reset".to_string());
        assert!(cache_err.is_retryable());

        let missing_err = HubError::NotFound("article 7".to_string());
        assert!(!missing_err.is_retryable());
    }

    #[test]
    fn test_serde_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: HubError = json_err.into();
        assert!(matches!(err, HubError::Serialization(_)));
    }
}
