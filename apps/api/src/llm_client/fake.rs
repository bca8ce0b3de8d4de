//! In-memory `CompletionModel` used by unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{CompletionModel, LlmError};

pub enum FakeReply {
    Text(String),
    Unauthorized,
    RateLimited,
    Empty,
    Status(u16),
}

pub struct FakeModel {
    reply: FakeReply,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl FakeModel {
    pub fn new(reply: FakeReply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::new(FakeReply::Text(text.to_string()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionModel for FakeModel {
    async fn complete(&self, _system: &str, prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
        match &self.reply {
            FakeReply::Text(text) => Ok(text.trim().to_string()),
            FakeReply::Unauthorized => Err(LlmError::Unauthorized),
            FakeReply::RateLimited => Err(LlmError::RateLimited),
            FakeReply::Empty => Err(LlmError::EmptyContent),
            FakeReply::Status(status) => Err(LlmError::Api {
                status: *status,
                message: "upstream failure".to_string(),
            }),
        }
    }
}
