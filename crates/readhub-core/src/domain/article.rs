//! 아티클 및 읽기 기록 타입.
//!
//! 이 모듈은 읽기 보상 시스템의 영속 엔티티를 정의합니다:
//! - `Author` - 아티클 작성자
//! - `Article` - 발행된 아티클
//! - `ArticleReadAction` - 읽기 한 건의 기록 (append-only)

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 아티클 작성자.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct Author {
    /// 작성자 ID
    pub id: i64,
    /// 로그인 이름 (고유)
    pub user_name: String,
    /// 표시 이름
    pub full_name: String,
}

/// 발행된 아티클.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct Article {
    /// 아티클 ID
    pub id: i64,
    /// 제목
    pub title: String,
    /// 원문 URL
    pub url: String,
    /// 본문 줄 수
    pub nr_of_lines: i32,
    /// 카테고리
    pub category: String,
    /// 작성자 ID
    pub author_id: i64,
    /// 발행 시각
    pub published_at: DateTime<Utc>,
}

/// 읽기 기록 한 건.
///
/// 수정 경로가 없는 append-only 레코드입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct ArticleReadAction {
    /// 기록 ID
    pub id: i64,
    /// 대상 아티클 ID
    pub article_id: i64,
    /// 읽은 시각
    pub read_at: DateTime<Utc>,
    /// 읽는 데 쓴 시간 (초)
    pub seconds_spent: i32,
    /// 적립된 코인
    pub nr_of_coins: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_read_action_serde_roundtrip() {
        let action = ArticleReadAction {
            id: 1,
            article_id: 7,
            read_at: Utc::now(),
            seconds_spent: 42,
            nr_of_coins: dec!(1.5),
        };

        let json = serde_json::to_string(&action).unwrap();
        let back: ArticleReadAction = serde_json::from_str(&json).unwrap();
        assert_eq!(action, back);
    }
}
