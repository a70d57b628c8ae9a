use serde::{Deserialize, Serialize};

/// A single chat message. `id` is always assigned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub user: String,
    pub content: String,
}

impl Message {
    pub fn new(id: u64, user: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            user: user.into(),
            content: content.into(),
        }
    }
}
