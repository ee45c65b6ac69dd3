//! WebSocket 세션 레지스트리.
//!
//! 활성 인용구 세션의 송신 핸들을 관리합니다. 등록/해제는
//! WebSocket 수명 주기 핸들러가 호출하고, 순회는 브로드캐스트
//! 작업이 수행합니다.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{mpsc, RwLock};

/// 공유 세션 레지스트리 타입.
pub type SessionRegistry = Arc<QuoteSessions>;

/// 활성 인용구 세션 목록.
///
/// 값은 세션별 송신 큐입니다. 소켓으로의 실제 쓰기는 핸들러의
/// 전송 태스크가 담당하므로, 브로드캐스트 쪽에서는 큐에 넣는
/// 것으로 충분합니다.
#[derive(Default)]
pub struct QuoteSessions {
    sessions: RwLock<HashMap<String, mpsc::UnboundedSender<String>>>,
}

impl QuoteSessions {
    /// 빈 레지스트리 생성.
    pub fn new() -> Self {
        Self::default()
    }

    /// 새 세션 등록.
    pub async fn register(&self, session_id: &str, sender: mpsc::UnboundedSender<String>) {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session_id.to_string(), sender);
    }

    /// 세션 제거.
    pub async fn unregister(&self, session_id: &str) {
        let mut sessions = self.sessions.write().await;
        sessions.remove(session_id);
    }

    /// 활성 세션 수.
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// 현재 세션의 스냅샷.
    ///
    /// 브로드캐스트 중 레지스트리 lock을 오래 잡지 않도록
    /// 송신 핸들을 복사해서 반환합니다.
    pub async fn snapshot(&self) -> Vec<(String, mpsc::UnboundedSender<String>)> {
        self.sessions
            .read()
            .await
            .iter()
            .map(|(id, tx)| (id.clone(), tx.clone()))
            .collect()
    }
}

/// 공유 세션 레지스트리 생성.
pub fn create_session_registry() -> SessionRegistry {
    Arc::new(QuoteSessions::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_register_and_unregister() {
        let registry = create_session_registry();
        let (tx, _rx) = mpsc::unbounded_channel();

        registry.register("session-1", tx).await;
        assert_eq!(registry.session_count().await, 1);

        registry.unregister("session-1").await;
        assert_eq!(registry.session_count().await, 0);
    }

    #[tokio::test]
    async fn test_snapshot_returns_all_senders() {
        let registry = create_session_registry();
        let mut receivers = Vec::new();

        for i in 0..3 {
            let (tx, rx) = mpsc::unbounded_channel();
            receivers.push(rx);
            registry.register(&format!("session-{}", i), tx).await;
        }

        let snapshot = registry.snapshot().await;
        assert_eq!(snapshot.len(), 3);
    }

    #[tokio::test]
    async fn test_unregister_unknown_session_is_noop() {
        let registry = create_session_registry();
        registry.unregister("missing").await;
        assert_eq!(registry.session_count().await, 0);
    }
}
