//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author payload as it appears on the wire (`firstName`/`lastName`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorPayload {
    pub first_name: String,
    pub last_name: String,
}

/// Request to create a new post. No id - storage assigns one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub author: AuthorPayload,
    pub title: String,
    pub content: String,
}

/// Request to fully replace an existing post. The id must match the id in
/// the request path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub id: Uuid,
    pub author: AuthorPayload,
    pub title: String,
    pub content: String,
}

/// A post as returned by the API. The author is flattened to a single
/// `"first last"` display string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub author: String,
    pub title: String,
    pub content: String,
}
