//! 아티클 통계 파생 및 순위 계산.
//!
//! 읽기 기록 목록에서 아티클별 통계를 파생하고, 정렬된 결과 윈도우
//! 안에서 순위를 부여합니다.
//!
//! # 계산 규칙
//!
//! - `times_read`: 읽기 기록 수
//! - `average_seconds_spent`: 읽기 시간의 평균을 사사오입한 정수 (기록이 없으면 0)
//! - `total_coins`: 적립 코인 합계 (기록이 없으면 0)
//! - `rank`: 정렬 후 1부터 순서대로 부여 (영속화되지 않음)

use chrono::{DateTime, Utc};
use readhub_core::{Article, ArticleReadAction, CoinCalculator};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// 작성자별 순위 윈도우 크기.
pub const AUTHOR_RANKING_LIMIT: usize = 10;

/// 카테고리별 순위 윈도우 크기.
pub const CATEGORY_RANKING_LIMIT: usize = 5;

/// 아티클 통계 DTO.
///
/// 요청마다 파생되는 일시적 구조체이며 영속화되지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct ArticleStats {
    /// 아티클 제목
    pub article_title: String,
    /// 아티클 URL
    pub article_url: String,
    /// 본문 줄 수
    pub nr_of_lines: i32,
    /// 읽은 횟수
    pub times_read: u64,
    /// 평균 읽기 시간 (초, 사사오입)
    pub average_seconds_spent: i64,
    /// 적립 코인 합계
    pub total_coins: Decimal,
    /// 발행 시각
    pub published_at: DateTime<Utc>,
    /// 순위 (부여 전에는 0)
    pub rank: u32,
}

impl ArticleStats {
    /// 아티클과 그 읽기 기록에서 통계를 파생합니다.
    ///
    /// 순수 계산이며, `rank`는 0으로 초기화됩니다.
    pub fn derive(article: &Article, actions: &[ArticleReadAction]) -> Self {
        let times_read = actions.len() as u64;

        let average_seconds_spent = if actions.is_empty() {
            0
        } else {
            let total: i64 = actions.iter().map(|a| i64::from(a.seconds_spent)).sum();
            let mean = Decimal::from(total) / Decimal::from(actions.len() as i64);
            CoinCalculator::round(mean)
        };

        let total_coins: Decimal = actions.iter().map(|a| a.nr_of_coins).sum();

        Self {
            article_title: article.title.clone(),
            article_url: article.url.clone(),
            nr_of_lines: article.nr_of_lines,
            times_read,
            average_seconds_spent,
            total_coins,
            published_at: article.published_at,
            rank: 0,
        }
    }

    /// 정렬 키.
    ///
    /// `(times_read, total_coins, average_seconds_spent, article_title)`의
    /// 오름차순 전순서입니다. 제목까지 포함하여 순위가 결정적입니다.
    fn ordering_key(&self) -> (u64, Decimal, i64, &str) {
        (
            self.times_read,
            self.total_coins,
            self.average_seconds_spent,
            self.article_title.as_str(),
        )
    }
}

impl PartialOrd for ArticleStats {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.ordering_key().cmp(&other.ordering_key()))
    }
}

/// 통계 목록을 정렬하고 절단한 뒤 순위를 부여합니다.
///
/// 비교 계약에 따라 오름차순으로 정렬하고 처음 `limit`개만 남긴 뒤,
/// 순서대로 1..=limit의 순위를 부여합니다.
pub fn rank_stats(mut stats: Vec<ArticleStats>, limit: usize) -> Vec<ArticleStats> {
    tracing::debug!(candidates = stats.len(), limit, "Ranking article stats");

    stats.sort_by(|a, b| a.ordering_key().cmp(&b.ordering_key()));
    stats.truncate(limit);

    for (index, entry) in stats.iter_mut().enumerate() {
        entry.rank = (index + 1) as u32;
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn article(title: &str) -> Article {
        Article {
            id: 1,
            title: title.to_string(),
            url: format!("https://readhub.dev/{}", title),
            nr_of_lines: 120,
            category: "rust".to_string(),
            author_id: 1,
            published_at: Utc::now(),
        }
    }

    fn action(seconds: i32, coins: Decimal) -> ArticleReadAction {
        ArticleReadAction {
            id: 0,
            article_id: 1,
            read_at: Utc::now(),
            seconds_spent: seconds,
            nr_of_coins: coins,
        }
    }

    #[test]
    fn test_derive_with_actions() {
        let actions = vec![
            action(10, dec!(1.0)),
            action(20, dec!(2.0)),
            action(30, dec!(3.0)),
        ];

        let stats = ArticleStats::derive(&article("borrowck"), &actions);

        assert_eq!(stats.times_read, 3);
        assert_eq!(stats.average_seconds_spent, 20);
        assert_eq!(stats.total_coins, dec!(6.0));
        assert_eq!(stats.rank, 0);
    }

    #[test]
    fn test_derive_empty_article() {
        let stats = ArticleStats::derive(&article("unread"), &[]);

        assert_eq!(stats.times_read, 0);
        assert_eq!(stats.average_seconds_spent, 0);
        assert_eq!(stats.total_coins, Decimal::ZERO);
    }

    #[test]
    fn test_average_is_rounded_half_up() {
        // (10 + 15) / 2 = 12.5 → 13
        let actions = vec![action(10, dec!(0.5)), action(15, dec!(0.5))];
        let stats = ArticleStats::derive(&article("rounding"), &actions);
        assert_eq!(stats.average_seconds_spent, 13);
    }

    #[test]
    fn test_ordering_is_ascending_by_times_read_first() {
        let mut low = ArticleStats::derive(&article("a"), &[action(10, dec!(1))]);
        let high = ArticleStats::derive(
            &article("b"),
            &[action(10, dec!(1)), action(20, dec!(1))],
        );

        assert!(low < high);

        // 같은 읽은 횟수면 코인 합계로 구분
        low.total_coins = dec!(9.0);
        let mut richer = low.clone();
        richer.total_coins = dec!(10.0);
        assert!(low < richer);
    }
}
