//! 서비스 레이어.
//!
//! Repository와 analytics를 묶어 핸들러에 도메인 연산을 제공합니다.

pub mod article_stats;

pub use article_stats::{ArticleStatsService, StatsError};
