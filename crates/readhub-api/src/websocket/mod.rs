//! 인용구 스트리밍을 위한 WebSocket 서버.
//!
//! 명시적인 공유 세션 레지스트리와 업그레이드 핸들러로 구성됩니다.
//!
//! - 레지스트리: 동시 등록/해제/순회가 안전한 세션 맵
//! - 핸들러: `GET /ws/quotes` 업그레이드, 세션 수명 주기 관리
//!
//! 브로드캐스트 자체는 [`crate::tasks::quote_broadcast`]의 주기 작업이
//! 수행합니다.

pub mod handler;
pub mod sessions;

pub use handler::quote_ws_router;
pub use sessions::{create_session_registry, QuoteSessions, SessionRegistry};
