use anyhow::Result;
use tracing::debug;

use chatter_types::models::Message;

use crate::MessageStore;

impl MessageStore {
    pub fn list(&self) -> Result<Vec<Message>> {
        self.with_messages(|messages| messages.to_vec())
    }

    pub fn get(&self, id: u64) -> Result<Option<Message>> {
        self.with_messages(|messages| find(messages, id).cloned())
    }

    pub fn contains(&self, id: u64) -> Result<bool> {
        self.with_messages(|messages| find(messages, id).is_some())
    }

    pub fn len(&self) -> Result<usize> {
        self.with_messages(|messages| messages.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        self.with_messages(|messages| messages.is_empty())
    }

    /// Append a new message and return it.
    pub fn create(&self, user: String, content: String) -> Result<Message> {
        self.with_messages_mut(|messages| {
            let message = Message {
                id: next_id(messages),
                user,
                content,
            };
            messages.push(message.clone());
            message
        })
    }

    /// Replace whichever fields are given on the first message with `id`.
    /// Returns `None` if no message matched.
    pub fn update(
        &self,
        id: u64,
        user: Option<String>,
        content: Option<String>,
    ) -> Result<Option<Message>> {
        self.with_messages_mut(|messages| {
            let message = messages.iter_mut().find(|m| m.id == id)?;
            if let Some(user) = user {
                message.user = user;
            }
            if let Some(content) = content {
                message.content = content;
            }
            Some(message.clone())
        })
    }

    /// Remove every message with `id`. Returns how many were removed; zero is
    /// not an error.
    pub fn delete(&self, id: u64) -> Result<usize> {
        self.with_messages_mut(|messages| {
            let before = messages.len();
            messages.retain(|m| m.id != id);
            let removed = before - messages.len();
            debug!("Removed {} message(s) with id {}", removed, id);
            removed
        })
    }
}

fn find(messages: &[Message], id: u64) -> Option<&Message> {
    messages.iter().find(|m| m.id == id)
}

/// One past the id of the last message, or 1 when empty.
///
/// This is not a monotonic counter: deleting the last message frees its id
/// for the next create.
fn next_id(messages: &[Message]) -> u64 {
    messages.last().map_or(1, |last| last.id + 1)
}
