//! 인용구 타입.

use serde::{Deserialize, Serialize};

/// 브로드캐스트되는 인용구.
///
/// 번들 리소스 `quote.json`에서 로드되며, 풀이 비어 있을 때는
/// `Quote::default()`(빈 인용구)가 폴백으로 사용됩니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// 인용구 본문
    #[serde(default)]
    pub quote: String,
    /// 출처 (알 수 없으면 None)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl Quote {
    /// JSON 문자열로 직렬화합니다.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let quote = Quote::default();
        assert!(quote.quote.is_empty());
        assert!(quote.author.is_none());
    }

    #[test]
    fn test_to_json_skips_missing_author() {
        let quote = Quote {
            quote: "Stay hungry".to_string(),
            author: None,
        };
        let json = quote.to_json().unwrap();
        assert!(!json.contains("author"));
    }
}
