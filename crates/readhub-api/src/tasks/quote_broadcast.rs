//! 인용구 브로드캐스트 백그라운드 태스크.
//!
//! 고정 주기(기본 2초)마다 현재 등록된 모든 세션에 무작위 인용구를
//! 전송합니다.
//!
//! - 인용구 풀은 **세션마다** 다시 로드/셔플됩니다. 따라서 같은 틱에서도
//!   세션별로 다른 인용구를 받을 수 있습니다.
//! - 전송 실패는 재시도나 세션 제거 없이 무시됩니다. 세션 제거는 소켓
//!   핸들러가 연결 종료를 감지했을 때만 일어납니다.

use std::time::Duration;

use rand::seq::SliceRandom;
use readhub_core::Quote;
use tokio::time::interval;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::websocket::SessionRegistry;

/// 번들된 인용구 풀.
const QUOTE_FEED: &str = include_str!("../../resources/quote.json");

/// 브로드캐스터 설정.
#[derive(Debug, Clone)]
pub struct QuoteBroadcasterConfig {
    /// 브로드캐스트 주기 (기본: 2초)
    pub interval: Duration,
}

impl Default for QuoteBroadcasterConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(2),
        }
    }
}

impl QuoteBroadcasterConfig {
    /// 주기(초)로 설정 생성.
    pub fn with_interval_secs(secs: u64) -> Self {
        Self {
            interval: Duration::from_secs(secs),
        }
    }
}

/// 번들 리소스에서 인용구 풀을 로드합니다.
///
/// 파싱에 실패하면 빈 풀을 반환합니다 (전송 쪽에서 기본 인용구로 폴백).
fn load_quote_pool() -> Vec<Quote> {
    match serde_json::from_str(QUOTE_FEED) {
        Ok(quotes) => quotes,
        Err(e) => {
            error!("Failed to parse quote feed: {}", e);
            Vec::new()
        }
    }
}

/// 풀을 셔플해 인용구 하나를 고릅니다.
///
/// 풀이 비어 있으면 빈 기본 인용구를 반환합니다.
fn pick_random(mut pool: Vec<Quote>) -> Quote {
    pool.shuffle(&mut rand::thread_rng());
    pool.into_iter().next().unwrap_or_default()
}

/// 한 틱 분량의 브로드캐스트를 수행합니다.
///
/// 현재 세션 스냅샷을 순차적으로 돌며, 세션마다 풀을 새로 로드/셔플해
/// 인용구 하나를 JSON으로 직렬화하여 큐에 넣습니다.
///
/// # Returns
///
/// 큐에 넣는 데 성공한 메시지 수.
pub async fn broadcast_once(sessions: &SessionRegistry) -> usize {
    let snapshot = sessions.snapshot().await;
    let mut sent = 0;

    for (session_id, tx) in snapshot {
        // 세션마다 풀을 다시 로드하고 다시 셔플한다
        let quote = pick_random(load_quote_pool());

        let json = match quote.to_json() {
            Ok(json) => json,
            Err(e) => {
                warn!("Quote serialization failed: {}", e);
                continue;
            }
        };

        // 실패는 무시: 재시도도, 세션 제거도 하지 않는다
        match tx.send(json) {
            Ok(()) => sent += 1,
            Err(_) => {
                debug!("Quote send failed for session {} (queue closed)", session_id);
            }
        }
    }

    sent
}

/// 인용구 브로드캐스터 시작.
///
/// 서버 시작 시 호출하여 백그라운드에서 주기적으로 인용구를 전송합니다.
/// 단일 태스크가 세션을 순차 순회하며, 세션 간 병렬성은 없습니다.
///
/// # Arguments
///
/// * `sessions` - 공유 세션 레지스트리
/// * `config` - 브로드캐스터 설정
/// * `shutdown` - 종료 시그널 토큰
pub fn start_quote_broadcaster(
    sessions: SessionRegistry,
    config: QuoteBroadcasterConfig,
    shutdown: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        info!(
            interval_secs = config.interval.as_secs(),
            "Quote broadcaster started"
        );

        let mut ticker = interval(config.interval);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let sent = broadcast_once(&sessions).await;
                    if sent > 0 {
                        debug!("Broadcast tick delivered {} quotes", sent);
                    }
                }
                _ = shutdown.cancelled() => {
                    info!("Quote broadcaster stopped");
                    break;
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::websocket::create_session_registry;
    use tokio::sync::mpsc;

    #[test]
    fn test_bundled_pool_parses() {
        let pool = load_quote_pool();
        assert!(!pool.is_empty());
        assert!(pool.iter().all(|q| !q.quote.is_empty()));
    }

    #[test]
    fn test_pick_random_empty_pool_falls_back_to_default() {
        let quote = pick_random(Vec::new());
        assert_eq!(quote, Quote::default());
    }

    #[test]
    fn test_pick_random_returns_pool_member() {
        let pool = load_quote_pool();
        let picked = pick_random(pool.clone());
        assert!(pool.contains(&picked));
    }

    #[tokio::test]
    async fn test_tick_sends_one_message_per_session() {
        let sessions = create_session_registry();
        let mut receivers = Vec::new();

        for i in 0..3 {
            let (tx, rx) = mpsc::unbounded_channel();
            sessions.register(&format!("session-{}", i), tx).await;
            receivers.push(rx);
        }

        let sent = broadcast_once(&sessions).await;
        assert_eq!(sent, 3);

        for rx in &mut receivers {
            let text = rx.try_recv().expect("each session receives a quote");
            // 각 메시지는 유효한 JSON 인용구여야 한다
            let quote: Quote = serde_json::from_str(&text).unwrap();
            assert!(!quote.quote.is_empty());
            // 틱당 정확히 한 건
            assert!(rx.try_recv().is_err());
        }
    }

    #[tokio::test]
    async fn test_failed_send_is_swallowed_and_session_stays() {
        let sessions = create_session_registry();

        let (dead_tx, dead_rx) = mpsc::unbounded_channel();
        drop(dead_rx); // 소켓이 닫힌 세션을 흉내낸다
        sessions.register("dead", dead_tx).await;

        let (live_tx, mut live_rx) = mpsc::unbounded_channel();
        sessions.register("live", live_tx).await;

        let sent = broadcast_once(&sessions).await;
        assert_eq!(sent, 1);
        assert!(live_rx.try_recv().is_ok());

        // 실패한 세션은 제거되지 않고 다음 틱에도 남아 있다
        assert_eq!(sessions.session_count().await, 2);
    }

    #[tokio::test]
    async fn test_broadcaster_honors_shutdown() {
        let sessions = create_session_registry();
        let shutdown = CancellationToken::new();

        let handle = start_quote_broadcaster(
            sessions,
            QuoteBroadcasterConfig::with_interval_secs(1),
            shutdown.clone(),
        );

        shutdown.cancel();
        handle.await.unwrap();
    }
}
