//! 스토리지 레이어.
//!
//! - PostgreSQL: 사용자/아티클/읽기 기록 영속화
//! - Redis: 아티클 통계 캐시

pub mod postgres;
pub mod redis;
