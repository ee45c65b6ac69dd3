//! Article / Author Repository
//!
//! 아티클 및 작성자 관련 데이터베이스 연산을 담당합니다.

use readhub_core::{Article, Author};
use sqlx::PgPool;

/// Author Repository
pub struct AuthorRepository;

impl AuthorRepository {
    /// 로그인 이름으로 작성자 조회.
    pub async fn find_by_user_name(
        pool: &PgPool,
        user_name: &str,
    ) -> Result<Option<Author>, sqlx::Error> {
        sqlx::query_as::<_, Author>(
            r#"
            SELECT id, user_name, full_name
            FROM authors
            WHERE user_name = $1
            "#,
        )
        .bind(user_name)
        .fetch_optional(pool)
        .await
    }
}

/// Article Repository
pub struct ArticleRepository;

impl ArticleRepository {
    /// ID로 아티클 조회.
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Article>, sqlx::Error> {
        sqlx::query_as::<_, Article>(
            r#"
            SELECT id, title, url, nr_of_lines, category, author_id, published_at
            FROM articles
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// 작성자 로그인 이름으로 아티클 목록 조회.
    pub async fn find_by_author_user_name(
        pool: &PgPool,
        user_name: &str,
    ) -> Result<Vec<Article>, sqlx::Error> {
        sqlx::query_as::<_, Article>(
            r#"
            SELECT a.id, a.title, a.url, a.nr_of_lines, a.category, a.author_id, a.published_at
            FROM articles a
            JOIN authors au ON au.id = a.author_id
            WHERE au.user_name = $1
            ORDER BY a.id
            "#,
        )
        .bind(user_name)
        .fetch_all(pool)
        .await
    }

    /// 카테고리로 아티클 목록 조회.
    pub async fn find_by_category(
        pool: &PgPool,
        category: &str,
    ) -> Result<Vec<Article>, sqlx::Error> {
        sqlx::query_as::<_, Article>(
            r#"
            SELECT id, title, url, nr_of_lines, category, author_id, published_at
            FROM articles
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(pool)
        .await
    }
}
