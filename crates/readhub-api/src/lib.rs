//! REST API 및 WebSocket 서버.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - Axum 기반 사용자 CRUD REST API
//! - 아티클 통계 조회 (Redis cache-aside)
//! - 주기적 인용구 브로드캐스트 WebSocket 서버
//! - 헬스 체크 엔드포인트
//!
//! # 모듈 구성
//!
//! - [`state`]: 애플리케이션 공유 상태 (AppState)
//! - [`routes`]: REST API 엔드포인트
//! - [`repository`]: 데이터베이스 접근 레이어
//! - [`services`]: 캐싱된 통계 서비스
//! - [`websocket`]: 인용구 세션 레지스트리 및 업그레이드 핸들러
//! - [`tasks`]: 주기 실행 백그라운드 작업
//! - [`openapi`]: OpenAPI 문서 및 Swagger UI

pub mod error;
pub mod openapi;
pub mod repository;
pub mod routes;
pub mod services;
pub mod state;
pub mod tasks;
pub mod websocket;

pub use error::{ApiErrorResponse, ApiResult};
pub use routes::*;
pub use services::ArticleStatsService;
pub use state::AppState;
pub use tasks::{start_quote_broadcaster, QuoteBroadcasterConfig};
pub use websocket::{create_session_registry, quote_ws_router, SessionRegistry};
