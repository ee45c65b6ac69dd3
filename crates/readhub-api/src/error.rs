//! 통합 API 에러 응답 타입.
//!
//! 모든 API 엔드포인트에서 일관된 에러 형식을 제공합니다.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// 통합 API 에러 응답.
///
/// # 예시
///
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "아티클을 찾을 수 없습니다: 17",
///   "timestamp": 1738300800
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    /// 에러 코드 (예: "DB_ERROR", "INVALID_INPUT", "NOT_FOUND")
    pub code: String,
    /// 사람이 읽을 수 있는 에러 메시지
    pub message: String,
    /// 추가 에러 상세 정보 (선택적)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    /// 에러 발생 타임스탬프 (Unix timestamp, 선택적)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl ApiErrorResponse {
    /// 기본 에러 생성 (타임스탬프 포함).
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            timestamp: Some(chrono::Utc::now().timestamp()),
        }
    }

    /// 상세 정보 포함 에러 생성.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: Value,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details),
            timestamp: Some(chrono::Utc::now().timestamp()),
        }
    }

    /// 에러 코드 반환.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// 에러 메시지 반환.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ApiErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiErrorResponse {}

/// API 핸들러 Result 타입 별칭.
///
/// # Example
///
/// ```ignore
/// async fn find_user(
///     Path(id): Path<i64>,
///     State(state): State<Arc<AppState>>,
/// ) -> ApiResult<Json<UserRecord>> {
///     let user = UserRepository::find_by_id(state.db.pool(), id)
///         .await
///         .map_err(db_error)?
///         .ok_or_else(|| not_found(format!("User {} not found", id)))?;
///
///     Ok(Json(user))
/// }
/// ```
pub type ApiResult<T> = Result<T, (axum::http::StatusCode, axum::Json<ApiErrorResponse>)>;

/// 데이터베이스 에러를 500 응답으로 변환합니다.
pub fn db_error(err: sqlx::Error) -> (axum::http::StatusCode, axum::Json<ApiErrorResponse>) {
    (
        axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        axum::Json(ApiErrorResponse::new("DB_ERROR", err.to_string())),
    )
}

/// 404 응답을 생성합니다.
pub fn not_found(
    message: impl Into<String>,
) -> (axum::http::StatusCode, axum::Json<ApiErrorResponse>) {
    (
        axum::http::StatusCode::NOT_FOUND,
        axum::Json(ApiErrorResponse::new("NOT_FOUND", message)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_response_new() {
        let error = ApiErrorResponse::new("TEST_ERROR", "Test message");
        assert_eq!(error.code, "TEST_ERROR");
        assert_eq!(error.message, "Test message");
        assert!(error.timestamp.is_some());
        assert!(error.details.is_none());
    }

    #[test]
    fn test_api_error_response_with_details() {
        let details = serde_json::json!({"field": "id", "reason": "missing"});
        let error = ApiErrorResponse::with_details("VALIDATION_ERROR", "Invalid input", details);
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.details.is_some());
    }

    #[test]
    fn test_json_serialization_skips_empty_fields() {
        let error = ApiErrorResponse {
            code: "NOT_FOUND".to_string(),
            message: "Resource not found".to_string(),
            details: None,
            timestamp: None,
        };
        let json = serde_json::to_string(&error).unwrap();

        assert!(!json.contains("timestamp"));
        assert!(!json.contains("details"));
        assert!(json.contains(r#""code":"NOT_FOUND""#));
    }

    #[test]
    fn test_display_format() {
        let error = ApiErrorResponse::new("DB_ERROR", "connection refused");
        assert_eq!(format!("{}", error), "[DB_ERROR] connection refused");
    }
}
