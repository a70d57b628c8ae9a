use serde::{Deserialize, Serialize};

// -- Messages --

/// Body of `POST /messages`. Both fields are required; they are optional here
/// so that a missing key is reported as a bad request instead of a
/// deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct CreateMessageRequest {
    pub user: Option<String>,
    pub content: Option<String>,
}

impl CreateMessageRequest {
    /// Returns `(user, content)` only when both fields were supplied.
    pub fn into_parts(self) -> Option<(String, String)> {
        Some((self.user?, self.content?))
    }
}

/// Body of `PUT /messages/{id}`. Absent fields keep their current value.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateMessageRequest {
    pub user: Option<String>,
    pub content: Option<String>,
}

// -- Health --

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".into(),
        }
    }
}
