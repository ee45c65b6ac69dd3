//! ArticleReadAction Repository
//!
//! 읽기 기록 관련 데이터베이스 연산을 담당합니다.
//! 읽기 기록은 append-only이며 수정 경로가 없습니다.

use readhub_core::ArticleReadAction;
use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::PgPool;
use utoipa::ToSchema;

/// 새 읽기 기록 입력.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewReadAction {
    /// 읽는 데 쓴 시간 (초)
    pub seconds_spent: i32,
    /// 적립 코인
    pub nr_of_coins: Decimal,
}

/// ReadAction Repository
pub struct ReadActionRepository;

impl ReadActionRepository {
    /// 아티클의 읽기 기록 전체 조회.
    pub async fn find_by_article(
        pool: &PgPool,
        article_id: i64,
    ) -> Result<Vec<ArticleReadAction>, sqlx::Error> {
        sqlx::query_as::<_, ArticleReadAction>(
            r#"
            SELECT id, article_id, read_at, seconds_spent, nr_of_coins
            FROM article_read_actions
            WHERE article_id = $1
            ORDER BY read_at
            "#,
        )
        .bind(article_id)
        .fetch_all(pool)
        .await
    }

    /// 읽기 기록 추가 (append-only).
    pub async fn insert(
        pool: &PgPool,
        article_id: i64,
        input: &NewReadAction,
    ) -> Result<ArticleReadAction, sqlx::Error> {
        sqlx::query_as::<_, ArticleReadAction>(
            r#"
            INSERT INTO article_read_actions (article_id, seconds_spent, nr_of_coins)
            VALUES ($1, $2, $3)
            RETURNING id, article_id, read_at, seconds_spent, nr_of_coins
            "#,
        )
        .bind(article_id)
        .bind(input.seconds_spent)
        .bind(input.nr_of_coins)
        .fetch_one(pool)
        .await
    }
}
