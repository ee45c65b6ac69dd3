//! WebSocket 연결 handler.
//!
//! Axum WebSocket 엔드포인트 및 세션 수명 주기 처리.

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
    routing::get,
    Router,
};
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::state::AppState;

/// 인용구 WebSocket 라우터 생성.
///
/// # 엔드포인트
///
/// `GET /ws/quotes`
pub fn quote_ws_router() -> Router<Arc<AppState>> {
    Router::new().route("/ws/quotes", get(quote_ws_handler))
}

/// WebSocket 업그레이드 핸들러.
///
/// HTTP 연결을 WebSocket으로 업그레이드하고 세션을 등록합니다.
pub async fn quote_ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// WebSocket 연결 처리.
///
/// 세션을 레지스트리에 등록하고, 브로드캐스트 작업이 큐에 넣은
/// 메시지를 소켓으로 전달합니다. 연결이 끊기면 세션을 해제합니다.
async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let session_id = uuid::Uuid::new_v4().to_string();
    info!("Quote session connected: {}", session_id);

    let (tx, mut rx) = mpsc::unbounded_channel::<String>();
    state.sessions.register(&session_id, tx).await;

    let (mut sender, mut receiver) = socket.split();

    // 큐 → 소켓 전송 태스크
    let send_session_id = session_id.clone();
    let send_task = tokio::spawn(async move {
        while let Some(text) = rx.recv().await {
            if sender.send(Message::Text(text.into())).await.is_err() {
                debug!("Send failed, socket closed: {}", send_session_id);
                break;
            }
        }
    });

    // 클라이언트 수신 태스크.
    // 클라이언트가 보내는 내용은 없지만, Close 프레임과 에러를
    // 감지해야 세션을 정리할 수 있습니다.
    let recv_session_id = session_id.clone();
    let recv_task = tokio::spawn(async move {
        while let Some(result) = receiver.next().await {
            match result {
                Ok(Message::Close(_)) => {
                    debug!("Close frame received: {}", recv_session_id);
                    break;
                }
                Ok(_) => {}
                Err(e) => {
                    warn!("WebSocket receive error: {}", e);
                    break;
                }
            }
        }
    });

    // 하나의 태스크가 종료되면 다른 것도 종료
    tokio::select! {
        _ = send_task => {
            debug!("Send task ended for session: {}", session_id);
        }
        _ = recv_task => {
            debug!("Receive task ended for session: {}", session_id);
        }
    }

    state.sessions.unregister(&session_id).await;
    info!("Quote session disconnected: {}", session_id);
}
