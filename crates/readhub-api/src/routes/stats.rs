//! 아티클 통계 endpoint.
//!
//! 아티클/작성자/카테고리별 읽기 통계 조회와 읽기 기록 추가를 위한
//! REST API를 제공합니다.
//!
//! # 엔드포인트
//!
//! - `GET /api/v1/stats/article/{id}` - 아티클 한 건의 통계
//! - `GET /api/v1/stats/author/{username}` - 작성자별 순위 (top 10)
//! - `GET /api/v1/stats/category/{category}` - 카테고리별 순위 (top 5)
//! - `POST /api/v1/articles/{id}/read` - 읽기 기록 추가 (append-only)

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use readhub_analytics::ArticleStats;
use readhub_core::ArticleReadAction;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::{db_error, not_found, ApiErrorResponse, ApiResult};
use crate::repository::{ArticleRepository, NewReadAction, ReadActionRepository};
use crate::services::{ArticleStatsService, StatsError};
use crate::state::AppState;

/// 통계 목록 응답.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatsListResponse {
    /// 순위가 부여된 통계 목록
    pub stats: Vec<ArticleStats>,
    /// 결과 수
    pub total: usize,
}

/// 통계 라우터 생성.
pub fn stats_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/v1/stats/article/{id}", get(article_stats))
        .route("/api/v1/stats/author/{username}", get(author_stats))
        .route("/api/v1/stats/category/{category}", get(category_stats))
        .route("/api/v1/articles/{id}/read", post(record_read))
}

/// 상태에서 통계 서비스를 구성합니다.
fn stats_service(state: &AppState) -> ArticleStatsService {
    ArticleStatsService::new(
        state.db.pool().clone(),
        state.cache.clone(),
        state.config.stats.cache_ttl_secs,
    )
}

/// 서비스 오류를 API 응답으로 변환합니다.
fn map_stats_error(err: StatsError) -> (StatusCode, Json<ApiErrorResponse>) {
    match err {
        StatsError::NotFound(what) => not_found(format!("{} not found", what)),
        StatsError::Database(e) => db_error(e),
    }
}

/// 아티클 한 건의 통계 조회.
#[utoipa::path(
    get,
    path = "/api/v1/stats/article/{id}",
    tag = "stats",
    params(("id" = i64, Path, description = "아티클 ID")),
    responses(
        (status = 200, description = "아티클 통계", body = ArticleStats),
        (status = 404, description = "아티클 없음", body = ApiErrorResponse)
    )
)]
pub async fn article_stats(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ArticleStats>> {
    let stats = stats_service(&state)
        .get_stats_for_article(id)
        .await
        .map_err(map_stats_error)?;

    Ok(Json(stats))
}

/// 작성자별 통계 순위 조회 (top 10).
#[utoipa::path(
    get,
    path = "/api/v1/stats/author/{username}",
    tag = "stats",
    params(("username" = String, Path, description = "작성자 로그인 이름")),
    responses(
        (status = 200, description = "순위가 부여된 통계", body = StatsListResponse),
        (status = 404, description = "작성자 없음", body = ApiErrorResponse)
    )
)]
pub async fn author_stats(
    Path(username): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<StatsListResponse>> {
    let stats = stats_service(&state)
        .get_stats_by_author(&username)
        .await
        .map_err(map_stats_error)?;

    let total = stats.len();
    Ok(Json(StatsListResponse { stats, total }))
}

/// 카테고리별 통계 순위 조회 (top 5).
#[utoipa::path(
    get,
    path = "/api/v1/stats/category/{category}",
    tag = "stats",
    params(("category" = String, Path, description = "카테고리 이름")),
    responses(
        (status = 200, description = "순위가 부여된 통계", body = StatsListResponse)
    )
)]
pub async fn category_stats(
    Path(category): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<StatsListResponse>> {
    let stats = stats_service(&state)
        .get_stats_by_category(&category)
        .await
        .map_err(map_stats_error)?;

    let total = stats.len();
    Ok(Json(StatsListResponse { stats, total }))
}

/// 읽기 기록 추가.
///
/// 읽기 기록은 append-only이며, 대상 아티클이 없으면 404를 반환합니다.
#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/read",
    tag = "stats",
    params(("id" = i64, Path, description = "아티클 ID")),
    request_body = NewReadAction,
    responses(
        (status = 201, description = "기록된 읽기", body = ArticleReadAction),
        (status = 404, description = "아티클 없음", body = ApiErrorResponse)
    )
)]
pub async fn record_read(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
    Json(input): Json<NewReadAction>,
) -> ApiResult<(StatusCode, Json<ArticleReadAction>)> {
    ArticleRepository::find_by_id(state.db.pool(), id)
        .await
        .map_err(db_error)?
        .ok_or_else(|| not_found(format!("article {} not found", id)))?;

    let action = ReadActionRepository::insert(state.db.pool(), id, &input)
        .await
        .map_err(db_error)?;

    Ok((StatusCode::CREATED, Json(action)))
}
