//! 코인 계산 헬퍼.
//!
//! 평균 읽기 시간의 반올림을 담당합니다.

use rust_decimal::{Decimal, RoundingStrategy};

/// 반올림 계산기.
pub struct CoinCalculator;

impl CoinCalculator {
    /// 값을 가장 가까운 정수로 반올림합니다 (사사오입).
    pub fn round(value: Decimal) -> i64 {
        value
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .try_into()
            .unwrap_or(i64::MAX)
    }
}
