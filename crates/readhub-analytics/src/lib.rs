//! 아티클 읽기 통계 엔진.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - 아티클별 통계 파생 (읽은 횟수, 평균 읽기 시간, 총 코인)
//! - 정렬/절단/순위 부여 파이프라인 (작성자별 top 10, 카테고리별 top 5)
//!
//! 모든 계산은 순수 함수이며 I/O가 없습니다. 영속화와 캐싱은
//! `readhub-data` 및 API 크레이트의 서비스 레이어가 담당합니다.

pub mod stats;

pub use stats::{rank_stats, ArticleStats, AUTHOR_RANKING_LIMIT, CATEGORY_RANKING_LIMIT};
