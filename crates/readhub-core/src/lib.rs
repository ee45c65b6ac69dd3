//! # Readhub Core
//!
//! 읽기 보상 백엔드의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 시스템 전반에서 사용되는 기본 타입을 제공합니다:
//! - 아티클 및 읽기 기록 도메인 모델
//! - 인용구(Quote) 타입
//! - 코인 계산 헬퍼
//! - 설정 관리
//! - 로깅 인프라

pub mod coins;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;

pub use coins::CoinCalculator;
pub use config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
