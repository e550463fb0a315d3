//! Fake AI client for testing.
//!
//! Returns deterministic responses so the generation facade can be exercised
//! without network access: canned success payloads, hard failures, or
//! malformed output.

use async_trait::async_trait;

use super::client::{AiClient, AiError};
use super::types::{ChatRequest, ChatResponse};

/// A fake AI client with a single canned behavior per instance.
#[derive(Debug)]
pub struct FakeAiClient {
    response: Result<String, String>,
}

impl FakeAiClient {
    /// Always respond with the given content.
    pub fn with_response(content: &str) -> Self {
        Self {
            response: Ok(content.to_string()),
        }
    }

    /// Always fail with the given error message.
    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
        }
    }
}

#[async_trait]
impl AiClient for FakeAiClient {
    async fn complete(
        &self,
        _prompt_name: &str,
        _request: ChatRequest,
    ) -> Result<ChatResponse, AiError> {
        match &self.response {
            Ok(content) => Ok(ChatResponse {
                content: content.clone(),
            }),
            Err(message) => Err(AiError::Api(message.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::types::ChatMessage;

    #[tokio::test]
    async fn test_fake_success() {
        let client = FakeAiClient::with_response("{}");
        let request = ChatRequest {
            messages: vec![ChatMessage::user("hello")],
            ..Default::default()
        };
        let response = client.complete("test", request).await.unwrap();
        assert_eq!(response.content, "{}");
    }

    #[tokio::test]
    async fn test_fake_failure() {
        let client = FakeAiClient::failing("boom");
        let request = ChatRequest::default();
        assert!(client.complete("test", request).await.is_err());
    }
}
