//! 순위 파이프라인 통합 테스트.
//!
//! 정렬, 절단, 순위 부여 파이프라인이 윈도우 크기
//! (작성자별 10, 카테고리별 5)를 지키는지 검증합니다.

use chrono::Utc;
use readhub_analytics::{rank_stats, ArticleStats, AUTHOR_RANKING_LIMIT, CATEGORY_RANKING_LIMIT};
use readhub_core::{Article, ArticleReadAction};
use rust_decimal::Decimal;

fn stats_with_reads(title: &str, reads: usize) -> ArticleStats {
    let article = Article {
        id: 1,
        title: title.to_string(),
        url: format!("https://readhub.dev/articles/{}", title),
        nr_of_lines: 80,
        category: "engineering".to_string(),
        author_id: 1,
        published_at: Utc::now(),
    };

    let actions: Vec<ArticleReadAction> = (0..reads)
        .map(|i| ArticleReadAction {
            id: i as i64,
            article_id: 1,
            read_at: Utc::now(),
            seconds_spent: 30,
            nr_of_coins: Decimal::ONE,
        })
        .collect();

    ArticleStats::derive(&article, &actions)
}

#[test]
fn author_window_truncates_twelve_articles_to_ten() {
    let stats: Vec<ArticleStats> = (0..12)
        .map(|i| stats_with_reads(&format!("article-{:02}", i), i))
        .collect();

    let ranked = rank_stats(stats, AUTHOR_RANKING_LIMIT);

    assert_eq!(ranked.len(), 10);
    for (index, entry) in ranked.iter().enumerate() {
        assert_eq!(entry.rank, (index + 1) as u32);
    }

    // 오름차순: 앞 순위일수록 비교 키가 작다
    for pair in ranked.windows(2) {
        assert!(pair[0] <= pair[1]);
    }
}

#[test]
fn category_window_truncates_seven_articles_to_five() {
    let stats: Vec<ArticleStats> = (0..7)
        .map(|i| stats_with_reads(&format!("article-{}", i), 7 - i))
        .collect();

    let ranked = rank_stats(stats, CATEGORY_RANKING_LIMIT);

    assert_eq!(ranked.len(), 5);
    assert_eq!(ranked.first().unwrap().rank, 1);
    assert_eq!(ranked.last().unwrap().rank, 5);
}

#[test]
fn fewer_articles_than_window_keeps_all() {
    let stats: Vec<ArticleStats> = (0..3)
        .map(|i| stats_with_reads(&format!("short-{}", i), i))
        .collect();

    let ranked = rank_stats(stats, AUTHOR_RANKING_LIMIT);

    assert_eq!(ranked.len(), 3);
    assert_eq!(
        ranked.iter().map(|s| s.rank).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
}

#[test]
fn rank_is_recomputed_not_carried_over() {
    let mut stats: Vec<ArticleStats> = (0..4)
        .map(|i| stats_with_reads(&format!("again-{}", i), i))
        .collect();

    // 이전 실행에서 남은 순위가 있어도 새로 부여된다
    for entry in &mut stats {
        entry.rank = 99;
    }

    let ranked = rank_stats(stats, AUTHOR_RANKING_LIMIT);
    assert!(ranked.iter().all(|s| s.rank >= 1 && s.rank <= 4));
}
