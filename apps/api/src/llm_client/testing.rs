//! Canned `GenerativeModel` for tests. Records every request it receives.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use super::{GenerateContentRequest, GenerateContentResponse, GenerativeModel, LlmError};

enum Reply {
    Text(String),
    Blocked(String),
    Api { status: u16, message: String },
}

pub struct CannedModel {
    reply: Reply,
    requests: Mutex<Vec<GenerateContentRequest>>,
}

impl CannedModel {
    fn with(reply: Reply) -> Self {
        Self {
            reply,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn text(text: &str) -> Self {
        Self::with(Reply::Text(text.to_string()))
    }

    pub fn json(value: serde_json::Value) -> Self {
        Self::text(&value.to_string())
    }

    pub fn blocked(reason: &str) -> Self {
        Self::with(Reply::Blocked(reason.to_string()))
    }

    pub fn failing(status: u16, message: &str) -> Self {
        Self::with(Reply::Api {
            status,
            message: message.to_string(),
        })
    }

    pub fn requests(&self) -> Vec<GenerateContentRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The single recorded request, serialized to its wire form.
    pub fn only_request_json(&self) -> serde_json::Value {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one model call");
        serde_json::to_value(&requests[0]).unwrap()
    }
}

#[async_trait]
impl GenerativeModel for CannedModel {
    async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, LlmError> {
        self.requests.lock().unwrap().push(request.clone());

        let body = match &self.reply {
            Reply::Text(text) => json!({
                "candidates": [{"content": {"parts": [{"text": text}]}, "finishReason": "STOP"}]
            }),
            Reply::Blocked(reason) => json!({"promptFeedback": {"blockReason": reason}}),
            Reply::Api { status, message } => {
                return Err(LlmError::Api {
                    status: *status,
                    message: message.clone(),
                })
            }
        };

        Ok(serde_json::from_value(body)?)
    }
}
