//! 모든 핸들러에서 공유되는 애플리케이션 상태.
//!
//! AppState는 모든 API 핸들러에서 공유되는 상태를 관리합니다.
//! Arc로 래핑되어 여러 요청 간에 안전하게 공유됩니다.

use std::sync::Arc;

use readhub_core::AppConfig;
use readhub_data::{Database, RedisCache};

use crate::websocket::SessionRegistry;

/// 애플리케이션 공유 상태.
///
/// 이 구조체는 모든 API 핸들러에서 접근할 수 있는 공유 리소스를 포함합니다.
/// Axum의 State extractor를 통해 핸들러에 주입됩니다.
#[derive(Clone)]
pub struct AppState {
    /// 데이터베이스 연결 풀 (PostgreSQL)
    pub db: Database,

    /// Redis cache (아티클 통계 캐싱에 사용, 미설정 시 재계산)
    pub cache: Option<Arc<RedisCache>>,

    /// WebSocket 인용구 세션 레지스트리
    pub sessions: SessionRegistry,

    /// 애플리케이션 설정
    pub config: AppConfig,

    /// 서버 시작 시간 (업타임 계산용)
    pub started_at: chrono::DateTime<chrono::Utc>,

    /// API 버전
    pub version: String,
}

impl AppState {
    /// 새로운 AppState 생성.
    pub fn new(db: Database, sessions: SessionRegistry, config: AppConfig) -> Self {
        Self {
            db,
            cache: None,
            sessions,
            config,
            started_at: chrono::Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Redis cache 설정.
    pub fn with_cache(mut self, cache: Arc<RedisCache>) -> Self {
        self.cache = Some(cache);
        self
    }
}
