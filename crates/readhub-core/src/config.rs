//! 설정 관리.
//!
//! 이 모듈은 애플리케이션 설정을 정의하고 관리합니다.
//! 기본값 → TOML 파일 → `READHUB__` 접두어 환경 변수 순으로 로드됩니다.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// 서버 설정
    #[serde(default)]
    pub server: ServerConfig,
    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingConfig,
    /// 인용구 브로드캐스트 설정
    #[serde(default)]
    pub quotes: QuotesConfig,
    /// 아티클 통계 설정
    #[serde(default)]
    pub stats: StatsConfig,
}

/// 서버 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// 바인딩할 호스트
    pub host: String,
    /// 리스닝할 포트
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// 인용구 브로드캐스트 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QuotesConfig {
    /// 브로드캐스트 주기 (초)
    #[serde(default = "default_broadcast_interval")]
    pub broadcast_interval_secs: u64,
}

fn default_broadcast_interval() -> u64 {
    2
}

impl Default for QuotesConfig {
    fn default() -> Self {
        Self {
            broadcast_interval_secs: default_broadcast_interval(),
        }
    }
}

/// 아티클 통계 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatsConfig {
    /// 통계 캐시 TTL (초)
    #[serde(default = "default_stats_cache_ttl")]
    pub cache_ttl_secs: u64,
}

fn default_stats_cache_ttl() -> u64 {
    300
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            cache_ttl_secs: default_stats_cache_ttl(),
        }
    }
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    ///
    /// 파일이 없으면 기본값에 환경 변수만 오버레이됩니다.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // 기본값으로 시작
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            // 파일에서 로드 (선택적)
            .add_source(config::File::from(path.as_ref()).required(false))
            // 환경 변수로 오버라이드
            .add_source(
                config::Environment::with_prefix("READHUB")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// 기본 경로에서 설정을 로드합니다.
    pub fn load_default() -> Result<Self, config::ConfigError> {
        Self::load("config/default.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.quotes.broadcast_interval_secs, 2);
        assert_eq!(config.stats.cache_ttl_secs, 300);
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = AppConfig::load("config/does-not-exist.toml").unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.logging.level, "info");
    }
}
