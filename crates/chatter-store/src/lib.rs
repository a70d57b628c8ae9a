pub mod queries;
pub mod seed;

use anyhow::Result;
use std::sync::Mutex;
use tracing::info;

use chatter_types::models::Message;

/// In-memory message collection, kept in insertion order.
///
/// All access goes through a single mutex so that compound operations
/// (find-then-update, compute-id-then-append) never interleave.
pub struct MessageStore {
    messages: Mutex<Vec<Message>>,
}

impl MessageStore {
    /// Empty store; the first created message gets id 1.
    pub fn new() -> Self {
        Self::from_messages(Vec::new())
    }

    /// Store pre-populated with the default conversation.
    pub fn seeded() -> Self {
        let messages = seed::default_messages();
        info!("Message store seeded with {} messages", messages.len());
        Self::from_messages(messages)
    }

    pub fn from_messages(messages: Vec<Message>) -> Self {
        Self {
            messages: Mutex::new(messages),
        }
    }

    pub fn with_messages<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&[Message]) -> T,
    {
        let messages = self
            .messages
            .lock()
            .map_err(|e| anyhow::anyhow!("Message store lock poisoned: {}", e))?;
        Ok(f(&messages))
    }

    pub fn with_messages_mut<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Vec<Message>) -> T,
    {
        let mut messages = self
            .messages
            .lock()
            .map_err(|e| anyhow::anyhow!("Message store lock poisoned: {}", e))?;
        Ok(f(&mut messages))
    }
}

impl Default for MessageStore {
    fn default() -> Self {
        Self::new()
    }
}
