//! Readhub API 서버.
//!
//! Axum 기반 REST API 서버를 시작합니다.
//! 사용자 관리, 읽기 통계 조회, WebSocket 명언 브로드캐스트 엔드포인트를 제공합니다.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{http::StatusCode, Router};
use tokio_util::sync::CancellationToken;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use readhub_api::openapi::swagger_ui_router;
use readhub_api::routes::create_api_router;
use readhub_api::state::AppState;
use readhub_api::tasks::{start_quote_broadcaster, QuoteBroadcasterConfig};
use readhub_api::websocket::{create_session_registry, quote_ws_router};
use readhub_core::config::AppConfig;
use readhub_core::logging::{init_logging, LogConfig, LogFormat};
use readhub_data::storage::postgres::{Database, DatabaseConfig};
use readhub_data::storage::redis::{RedisCache, RedisConfig};

/// CORS 미들웨어 구성.
///
/// CORS_ORIGINS 환경변수가 설정되어 있으면 해당 origin만 허용합니다.
/// 설정되지 않으면 개발 모드로 간주하여 모든 origin을 허용합니다.
fn cors_layer() -> CorsLayer {
    let allow_origin = match std::env::var("CORS_ORIGINS") {
        Ok(origins) if !origins.is_empty() => {
            let origins: Vec<_> = origins
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();

            if origins.is_empty() {
                warn!("CORS_ORIGINS is set but contains no valid origins, allowing any");
                AllowOrigin::any()
            } else {
                info!("CORS configured with {} allowed origins", origins.len());
                AllowOrigin::list(origins)
            }
        }
        _ => {
            warn!("CORS_ORIGINS not set, allowing any origin (development mode)");
            AllowOrigin::any()
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::PUT,
            axum::http::Method::DELETE,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .max_age(Duration::from_secs(3600))
}

/// 전체 라우터 생성.
fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(create_api_router().with_state(state.clone()))
        .merge(quote_ws_router().with_state(state))
        // OpenAPI 문서 및 Swagger UI
        .merge(swagger_ui_router())
        .layer(TraceLayer::new_for_http())
        // 전역 타임아웃 (30초) - 408 상태 코드 반환
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(cors_layer())
}

/// OpenAPI 스펙 내보내기 처리.
///
/// `--export-openapi` 플래그 또는 `EXPORT_OPENAPI` 환경변수가 설정된 경우
/// OpenAPI JSON 스펙을 stdout으로 출력하고 종료합니다.
fn handle_export_openapi() -> Result<(), Box<dyn std::error::Error>> {
    use readhub_api::openapi::ApiDoc;
    use utoipa::OpenApi as _;

    let export_flag = std::env::args().any(|arg| arg == "--export-openapi");
    let export_env = std::env::var("EXPORT_OPENAPI")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    if export_flag || export_env {
        let spec = ApiDoc::openapi();
        let json = serde_json::to_string_pretty(&spec)?;
        println!("{}", json);
        std::process::exit(0);
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env 파일 로드 (있는 경우)
    let _ = dotenvy::dotenv();

    // OpenAPI 내보내기 처리 (서버 시작 전)
    handle_export_openapi()?;

    // 설정 로드 (파일이 없으면 기본값 + 환경 변수)
    let config = AppConfig::load_default()?;

    // tracing 초기화
    let log_format: LogFormat = config.logging.format.parse().unwrap_or_default();
    let log_config = LogConfig::new(config.logging.level.clone()).with_format(log_format);
    init_logging(log_config)?;

    info!("Starting Readhub API server...");

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| {
            error!(
                host = %config.server.host,
                port = config.server.port,
                "소켓 주소 설정이 유효하지 않습니다. READHUB__SERVER__HOST/PORT를 확인하세요."
            );
            e
        })?;

    // 데이터베이스 연결 및 스키마 초기화
    let db_config = DatabaseConfig::from_env();
    let db = Database::connect(&db_config).await?;
    db.init_schema().await?;
    info!("Connected to PostgreSQL and schema verified");

    // WebSocket 세션 레지스트리 생성
    let sessions = create_session_registry();

    // AppState 생성
    let mut state = AppState::new(db, sessions.clone(), config.clone());

    // Redis 캐시 연결 (REDIS_URL 환경변수에서, 선택적)
    if let Some(redis_config) = RedisConfig::from_env() {
        match RedisCache::connect(&redis_config).await {
            Ok(cache) => {
                info!("Connected to Redis, stats caching enabled");
                state = state.with_cache(Arc::new(cache));
            }
            Err(e) => {
                warn!("Failed to connect to Redis, stats caching disabled: {}", e);
            }
        }
    } else {
        warn!("REDIS_URL not set, stats caching disabled");
    }

    let state = Arc::new(state);
    info!(version = %state.version, "Application state initialized");

    // 전역 종료 토큰 생성 (백그라운드 태스크에 종료 전파)
    let shutdown_token = CancellationToken::new();

    // 명언 브로드캐스터 시작
    let broadcaster_config =
        QuoteBroadcasterConfig::with_interval_secs(config.quotes.broadcast_interval_secs);
    let _broadcaster_handle =
        start_quote_broadcaster(sessions, broadcaster_config, shutdown_token.clone());

    // 라우터 생성
    let app = create_router(state);

    info!(%addr, "API server listening");
    info!("Swagger UI available at http://{}/swagger-ui", addr);
    info!("WebSocket quotes at ws://{}/ws/quotes", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_token.clone()))
        .await?;

    // 종료 시그널 받은 후 정리 작업
    info!("Server shutdown initiated, cleaning up...");
    shutdown_token.cancel();

    let cleanup_timeout = tokio::time::timeout(Duration::from_secs(10), async {
        tokio::time::sleep(Duration::from_millis(500)).await;
        info!("Cleanup completed");
    })
    .await;

    if cleanup_timeout.is_err() {
        warn!("Cleanup timeout, forcing shutdown");
    }

    info!("Server stopped gracefully");

    Ok(())
}

/// Graceful shutdown 시그널 대기.
///
/// Ctrl+C 또는 SIGTERM 시그널을 수신하면 종료 토큰을 취소합니다.
async fn shutdown_signal(shutdown_token: CancellationToken) {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown...");
        }
    }

    shutdown_token.cancel();
    info!("Shutdown signal propagated to background tasks");
}
