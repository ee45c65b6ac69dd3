//! API 라우트.
//!
//! 모든 REST API 엔드포인트를 정의하고 라우터를 구성합니다.
//!
//! # 라우트 구조
//!
//! - `/health` - 헬스 체크 (liveness)
//! - `/health/ready` - 상세 헬스 체크 (readiness)
//! - `/user/all` - 사용자 페이지 조회
//! - `/user/create-or-update` - 사용자 생성 또는 수정
//! - `/user/delete` - 사용자 삭제
//! - `/api/v1/stats/article/{id}` - 아티클 통계
//! - `/api/v1/stats/author/{username}` - 작성자별 통계 순위 (top 10)
//! - `/api/v1/stats/category/{category}` - 카테고리별 통계 순위 (top 5)
//! - `/api/v1/articles/{id}/read` - 읽기 기록 추가

pub mod health;
pub mod stats;
pub mod users;

use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

pub use health::{health_router, ComponentHealth, ComponentStatus, HealthResponse};
pub use stats::{stats_router, StatsListResponse};
pub use users::{user_router, PageParams};

/// 전체 API 라우터 생성.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(health_router())
        .merge(user_router())
        .merge(stats_router())
}
