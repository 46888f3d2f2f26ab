use serde::{Deserialize, Serialize};

/// 回答に添える参考リンク。`url` と表示用の `text` の組。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
    pub text: String,
}

impl Link {
    pub fn new(url: impl Into<String>, text: impl Into<String>) -> Self {
        Link {
            url: url.into(),
            text: text.into(),
        }
    }
}

/// `POST /api/` のレスポンス本体。
/// `links` は表示順を保持し、空でも `[]` としてシリアライズされる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub answer: String,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl ApiResponse {
    pub fn new(answer: impl Into<String>, links: Vec<Link>) -> Self {
        ApiResponse {
            answer: answer.into(),
            links,
        }
    }
}

/// Liveness payload served at `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

impl HealthStatus {
    pub fn ok(message: impl Into<String>) -> Self {
        HealthStatus {
            status: "ok".to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_response_serialization() {
        let response = ApiResponse::new(
            "Use pandas.",
            vec![Link::new("https://example.com/a", "A"), Link::new("https://example.com/b", "B")],
        );

        let json = serde_json::to_string(&response).expect("Failed to serialize ApiResponse");
        let expected = r#"{"answer":"Use pandas.","links":[{"url":"https://example.com/a","text":"A"},{"url":"https://example.com/b","text":"B"}]}"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_empty_links_serialize_as_array() {
        let response = ApiResponse::new("No links", Vec::new());
        let json = serde_json::to_string(&response).expect("Failed to serialize ApiResponse");
        assert_eq!(json, r#"{"answer":"No links","links":[]}"#);
    }

    #[test]
    fn test_links_default_when_absent() {
        let response: ApiResponse = serde_json::from_str(r#"{"answer":"x"}"#).expect("Failed to deserialize ApiResponse");
        assert!(response.links.is_empty());
    }

    #[test]
    fn test_duplicate_links_are_kept() {
        let link = Link::new("https://example.com", "Example");
        let response = ApiResponse::new("dup", vec![link.clone(), link.clone()]);
        assert_eq!(response.links, vec![link.clone(), link]);
    }

    #[test]
    fn test_health_status_serialization() {
        let json = serde_json::to_string(&HealthStatus::ok("up")).expect("Failed to serialize HealthStatus");
        assert_eq!(json, r#"{"status":"ok","message":"up"}"#);
    }
}
