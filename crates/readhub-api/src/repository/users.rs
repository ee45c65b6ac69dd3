//! User Repository
//!
//! 사용자 관련 데이터베이스 연산을 담당합니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use utoipa::ToSchema;

// ================================================================================================
// Types
// ================================================================================================

/// 사용자 레코드.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct UserRecord {
    pub id: i64,
    pub user_name: String,
    pub full_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 생성 또는 수정 입력.
///
/// `id`가 있으면 해당 행을 수정하고, 없으면 새 행을 생성합니다.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UserUpsert {
    #[serde(default)]
    pub id: Option<i64>,
    pub user_name: String,
    pub full_name: String,
    pub email: String,
}

/// 사용자 페이지.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserPage {
    /// 페이지 내용
    pub content: Vec<UserRecord>,
    /// 페이지 번호 (0부터)
    pub page: u32,
    /// 페이지 크기
    pub size: u32,
    /// 전체 행 수
    pub total_elements: i64,
    /// 전체 페이지 수
    pub total_pages: u32,
}

impl UserPage {
    /// 페이지 메타데이터를 계산합니다.
    pub fn new(content: Vec<UserRecord>, page: u32, size: u32, total_elements: i64) -> Self {
        let total_pages = if size == 0 {
            0
        } else {
            ((total_elements as u64).div_ceil(u64::from(size))) as u32
        };

        Self {
            content,
            page,
            size,
            total_elements,
            total_pages,
        }
    }
}

// ================================================================================================
// Repository
// ================================================================================================

/// User Repository
pub struct UserRepository;

impl UserRepository {
    /// 사용자 한 페이지 조회.
    pub async fn find_page(pool: &PgPool, page: u32, size: u32) -> Result<UserPage, sqlx::Error> {
        let offset = i64::from(page) * i64::from(size);

        let content = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, user_name, full_name, email, created_at, updated_at
            FROM users
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(i64::from(size))
        .bind(offset)
        .fetch_all(pool)
        .await?;

        let total = Self::count(pool).await?;

        Ok(UserPage::new(content, page, size, total))
    }

    /// 전체 사용자 수.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// ID로 사용자 조회.
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<UserRecord>, sqlx::Error> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, user_name, full_name, email, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// 기본키 유무에 따라 생성 또는 수정.
    pub async fn upsert(pool: &PgPool, input: &UserUpsert) -> Result<UserRecord, sqlx::Error> {
        match input.id {
            Some(id) => Self::update(pool, id, input).await,
            None => Self::insert(pool, input).await,
        }
    }

    /// 새 사용자 생성 (생성된 id 포함 반환).
    pub async fn insert(pool: &PgPool, input: &UserUpsert) -> Result<UserRecord, sqlx::Error> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (user_name, full_name, email)
            VALUES ($1, $2, $3)
            RETURNING id, user_name, full_name, email, created_at, updated_at
            "#,
        )
        .bind(&input.user_name)
        .bind(&input.full_name)
        .bind(&input.email)
        .fetch_one(pool)
        .await
    }

    /// 기존 사용자 수정.
    ///
    /// 대상 행이 없으면 해당 id로 새로 생성합니다 (저장 레이어의
    /// last-write-wins 의미론).
    pub async fn update(
        pool: &PgPool,
        id: i64,
        input: &UserUpsert,
    ) -> Result<UserRecord, sqlx::Error> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (id, user_name, full_name, email)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE
            SET user_name = EXCLUDED.user_name,
                full_name = EXCLUDED.full_name,
                email = EXCLUDED.email,
                updated_at = now()
            RETURNING id, user_name, full_name, email, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&input.user_name)
        .bind(&input.full_name)
        .bind(&input.email)
        .fetch_one(pool)
        .await
    }

    /// ID로 사용자 삭제.
    ///
    /// 존재하지 않는 id는 no-op이며 에러가 아닙니다.
    pub async fn delete_by_id(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_math() {
        let page = UserPage::new(vec![], 0, 20, 45);
        assert_eq!(page.total_pages, 3);

        let exact = UserPage::new(vec![], 1, 20, 40);
        assert_eq!(exact.total_pages, 2);

        let empty = UserPage::new(vec![], 0, 20, 0);
        assert_eq!(empty.total_pages, 0);
    }

    #[test]
    fn test_zero_size_does_not_divide() {
        let page = UserPage::new(vec![], 0, 0, 10);
        assert_eq!(page.total_pages, 0);
    }

    // DATABASE_URL이 설정된 환경에서만 실행되는 통합 테스트.
    mod integration {
        use super::*;

        async fn test_pool() -> PgPool {
            let url = std::env::var("DATABASE_URL").expect("DATABASE_URL not set");
            let pool = PgPool::connect(&url).await.unwrap();
            readhub_data::Database::from_pool(pool.clone())
                .init_schema()
                .await
                .unwrap();
            pool
        }

        fn sample_user(user_name: &str) -> UserUpsert {
            UserUpsert {
                id: None,
                user_name: user_name.to_string(),
                full_name: "Test User".to_string(),
                email: format!("{}@readhub.dev", user_name),
            }
        }

        #[tokio::test]
        #[ignore]
        async fn create_then_find_includes_user() {
            let pool = test_pool().await;

            let created = UserRepository::insert(&pool, &sample_user("create_then_find"))
                .await
                .unwrap();
            assert!(created.id > 0);

            let page = UserRepository::find_page(&pool, 0, 1000).await.unwrap();
            assert!(page.content.iter().any(|u| u.id == created.id));

            UserRepository::delete_by_id(&pool, created.id).await.unwrap();
        }

        #[tokio::test]
        #[ignore]
        async fn delete_then_find_excludes_user() {
            let pool = test_pool().await;

            let created = UserRepository::insert(&pool, &sample_user("delete_then_find"))
                .await
                .unwrap();

            let deleted = UserRepository::delete_by_id(&pool, created.id).await.unwrap();
            assert_eq!(deleted, 1);

            let page = UserRepository::find_page(&pool, 0, 1000).await.unwrap();
            assert!(!page.content.iter().any(|u| u.id == created.id));

            // 존재하지 않는 id 삭제는 no-op
            let again = UserRepository::delete_by_id(&pool, created.id).await.unwrap();
            assert_eq!(again, 0);
        }
    }
}
