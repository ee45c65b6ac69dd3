//! # Readhub Data
//!
//! readhub 백엔드의 영속성 및 캐시 레이어입니다.
//!
//! - PostgreSQL 연결 풀 및 스키마 부트스트랩
//! - 아티클 통계 캐싱을 위한 Redis 레이어 (TTL 만료)

pub mod error;
pub mod storage;

pub use error::{DataError, Result};
pub use storage::postgres::{Database, DatabaseConfig};
pub use storage::redis::{RedisCache, RedisConfig};
