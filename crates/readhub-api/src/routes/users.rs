//! 사용자 CRUD endpoint.
//!
//! 사용자 페이지 조회, 생성/수정, 삭제를 위한 REST API를 제공합니다.
//!
//! # 엔드포인트
//!
//! - `GET /user/all?page=&size=` - 사용자 한 페이지 조회
//! - `POST /user/create-or-update` - 기본키 유무에 따라 생성 또는 수정
//! - `POST /user/delete?id=` - ID로 삭제 (없는 id는 no-op)

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;
use utoipa::IntoParams;

use crate::error::{db_error, ApiResult};
use crate::repository::{UserPage, UserRecord, UserRepository, UserUpsert};
use crate::state::AppState;

/// 삭제 확인 본문.
const DELETE_CONFIRMATION: &str = "user removed from db";

/// 페이지 크기 상한.
const MAX_PAGE_SIZE: u32 = 100;

/// 페이지네이션 쿼리 파라미터.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct PageParams {
    /// 페이지 번호 (0부터, 기본 0)
    #[serde(default)]
    pub page: u32,
    /// 페이지 크기 (기본 20, 최대 100)
    #[serde(default = "default_page_size")]
    pub size: u32,
}

fn default_page_size() -> u32 {
    20
}

impl PageParams {
    /// 크기를 상한으로 자릅니다.
    pub fn clamped_size(&self) -> u32 {
        self.size.min(MAX_PAGE_SIZE)
    }
}

/// 삭제 쿼리 파라미터.
#[derive(Debug, Deserialize, IntoParams)]
pub struct DeleteParams {
    /// 삭제할 사용자 ID
    pub id: i64,
}

/// 사용자 라우터 생성.
pub fn user_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/user/all", get(find_all))
        .route("/user/create-or-update", post(create_or_update))
        .route("/user/delete", post(delete))
}

/// 사용자 한 페이지 조회.
#[utoipa::path(
    get,
    path = "/user/all",
    tag = "users",
    params(PageParams),
    responses(
        (status = 200, description = "사용자 페이지", body = UserPage)
    )
)]
pub async fn find_all(
    Query(params): Query<PageParams>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<UserPage>> {
    let page = UserRepository::find_page(state.db.pool(), params.page, params.clamped_size())
        .await
        .map_err(db_error)?;

    Ok(Json(page))
}

/// 사용자 생성 또는 수정.
///
/// 본문에 `id`가 있으면 해당 행을 수정하고, 없으면 새로 생성한 뒤
/// 생성된 id를 포함한 엔티티를 반환합니다.
#[utoipa::path(
    post,
    path = "/user/create-or-update",
    tag = "users",
    request_body = UserUpsert,
    responses(
        (status = 200, description = "영속화된 사용자", body = UserRecord)
    )
)]
pub async fn create_or_update(
    State(state): State<Arc<AppState>>,
    Json(input): Json<UserUpsert>,
) -> ApiResult<Json<UserRecord>> {
    let user = UserRepository::upsert(state.db.pool(), &input)
        .await
        .map_err(db_error)?;

    Ok(Json(user))
}

/// 사용자 삭제.
///
/// 존재 여부와 무관하게 고정 확인 문자열을 반환합니다. 없는 id의
/// 삭제는 저장 레이어에서 no-op입니다.
#[utoipa::path(
    post,
    path = "/user/delete",
    tag = "users",
    params(DeleteParams),
    responses(
        (status = 200, description = "삭제 확인", body = String)
    )
)]
pub async fn delete(
    Query(params): Query<DeleteParams>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<&'static str> {
    let removed = UserRepository::delete_by_id(state.db.pool(), params.id)
        .await
        .map_err(db_error)?;

    info!(user_id = params.id, rows = removed, "User delete requested");

    Ok(DELETE_CONFIRMATION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_is_clamped() {
        let params = PageParams {
            page: 0,
            size: 5000,
        };
        assert_eq!(params.clamped_size(), MAX_PAGE_SIZE);

        let small = PageParams { page: 0, size: 10 };
        assert_eq!(small.clamped_size(), 10);
    }

    #[test]
    fn test_page_params_defaults() {
        let params: PageParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.page, 0);
        assert_eq!(params.size, 20);
    }

    #[test]
    fn test_delete_confirmation_text() {
        assert_eq!(DELETE_CONFIRMATION, "user removed from db");
    }
}
