//! 백그라운드 태스크 모듈.
//!
//! 서버 실행 중 주기적으로 실행되는 백그라운드 작업을 정의합니다.
//! - 인용구 브로드캐스트: 활성 WebSocket 세션에 주기적으로 인용구 전송

pub mod quote_broadcast;

pub use quote_broadcast::{start_quote_broadcaster, QuoteBroadcasterConfig};
