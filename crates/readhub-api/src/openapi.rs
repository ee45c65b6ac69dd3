//! OpenAPI 문서화 설정.
//!
//! utoipa를 사용하여 REST API의 OpenAPI 3.0 스펙을 생성합니다.
//! Swagger UI는 `/swagger-ui` 경로에서 사용 가능합니다.
//!
//! 새로운 엔드포인트를 추가할 때:
//!
//! 1. 응답/요청 타입에 `#[derive(ToSchema)]` 추가
//! 2. 핸들러에 `#[utoipa::path(...)]` 어노테이션 추가
//! 3. 이 파일의 `components(schemas(...))` 및 `paths(...)` 섹션에 추가

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use readhub_analytics::ArticleStats;
use readhub_core::domain::ArticleReadAction;

use crate::error::ApiErrorResponse;
use crate::repository::read_actions::NewReadAction;
use crate::repository::users::{UserPage, UserRecord, UserUpsert};
use crate::routes::{ComponentHealth, ComponentStatus, HealthResponse, StatsListResponse};

/// Readhub API 문서.
///
/// 모든 엔드포인트와 스키마를 포함하는 OpenAPI 3.0 스펙입니다.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Readhub API",
        version = "0.1.0",
        description = r#"
# Readhub 백엔드 REST API

사용자 관리, 읽기 통계 조회, 명언 브로드캐스트를 위한 REST API입니다.

## 주요 기능

- **사용자 관리**: 페이지네이션 조회, 생성/수정(upsert), 삭제
- **읽기 통계**: 게시글/저자/카테고리별 읽기 통계 및 랭킹
- **명언 스트림**: `GET /ws/quotes` WebSocket으로 주기적 명언 수신
"#,
        license(name = "MIT", url = "https://opensource.org/licenses/MIT"),
        contact(name = "Readhub Team")
    ),
    servers(
        (url = "http://localhost:3000", description = "로컬 개발 서버"),
    ),
    tags(
        (name = "health", description = "헬스 체크 - 서버 상태 확인"),
        (name = "users", description = "사용자 관리 - 조회/upsert/삭제"),
        (name = "stats", description = "읽기 통계 - 게시글/저자/카테고리 랭킹")
    ),
    components(
        schemas(
            // ===== Health =====
            HealthResponse,
            ComponentHealth,
            ComponentStatus,

            // ===== Common =====
            ApiErrorResponse,

            // ===== Users =====
            UserRecord,
            UserUpsert,
            UserPage,

            // ===== Stats =====
            ArticleStats,
            StatsListResponse,
            ArticleReadAction,
            NewReadAction,
        )
    ),
    paths(
        // ===== Health =====
        crate::routes::health::health,
        crate::routes::health::ready,

        // ===== Users =====
        crate::routes::users::find_all,
        crate::routes::users::create_or_update,
        crate::routes::users::delete,

        // ===== Stats =====
        crate::routes::stats::article_stats,
        crate::routes::stats::author_stats,
        crate::routes::stats::category_stats,
        crate::routes::stats::record_read,
    )
)]
pub struct ApiDoc;

/// Swagger UI 라우터 생성.
///
/// 다음 경로에 문서 UI를 마운트합니다:
/// - `/swagger-ui` - Swagger UI 대화형 문서
/// - `/api-docs/openapi.json` - OpenAPI JSON 스펙
pub fn swagger_ui_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}
