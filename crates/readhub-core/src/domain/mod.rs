//! 도메인 모델.
//!
//! 시스템 전반에서 공유되는 엔티티 타입을 정의합니다.

pub mod article;
pub mod quote;

pub use article::{Article, ArticleReadAction, Author};
pub use quote::Quote;
