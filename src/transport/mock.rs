use super::client::Transport;
use super::types::{Response, TransportError};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Scripted transport for tests: replies are served in queue order and every
/// requested URL is recorded.
pub struct MockTransport {
    replies: Mutex<VecDeque<MockReply>>,
    repeat: Option<MockReply>,
    requests: Mutex<Vec<String>>,
    name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockReply {
    Status(u16),
    Error(String),
}

impl MockReply {
    pub fn status(code: u16) -> Self {
        MockReply::Status(code)
    }

    pub fn error(message: impl Into<String>) -> Self {
        MockReply::Error(message.into())
    }

    fn into_result(self) -> Result<Response, TransportError> {
        match self {
            MockReply::Status(code) => Ok(Response::new(code)),
            MockReply::Error(message) => Err(TransportError::Network { message }),
        }
    }
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            repeat: None,
            requests: Mutex::new(Vec::new()),
            name: "mock".to_string(),
        }
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::new()
        }
    }

    /// A transport answering every request with the same reply
    pub fn repeating(reply: MockReply) -> Self {
        Self {
            repeat: Some(reply),
            ..Self::new()
        }
    }

    pub fn add_reply(&self, reply: MockReply) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn add_replies(&self, replies: impl IntoIterator<Item = MockReply>) {
        let mut queue = self.replies.lock().unwrap();
        for reply in replies {
            queue.push_back(reply);
        }
    }

    pub fn remaining_replies(&self) -> usize {
        self.replies.lock().unwrap().len()
    }

    /// URLs requested so far, in call order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for MockTransport {
    fn get(&self, url: &str) -> Result<Response, TransportError> {
        self.requests.lock().unwrap().push(url.to_string());

        if let Some(reply) = &self.repeat {
            return reply.clone().into_result();
        }

        let reply = self.replies.lock().unwrap().pop_front().ok_or_else(|| {
            TransportError::network("MockTransport: No more replies in queue")
        })?;

        reply.into_result()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Debug for MockTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockTransport")
            .field("name", &self.name)
            .field("remaining_replies", &self.remaining_replies())
            .field("repeat", &self.repeat)
            .finish()
    }
}
