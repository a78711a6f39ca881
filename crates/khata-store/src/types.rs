//! Wire types for the GitHub contents API.

use serde::{Deserialize, Serialize};

/// A file entry as returned by `GET /repos/{owner}/{repo}/contents/{path}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentFile {
    /// Entry name (filename).
    pub name: String,
    /// Full path from repository root.
    pub path: String,
    /// Git blob SHA; required for conditional updates.
    pub sha: String,
    /// Size in bytes.
    #[serde(default)]
    pub size: u64,
    /// Base64-encoded content (absent for large files).
    #[serde(default)]
    pub content: Option<String>,
    /// Content encoding (e.g. "base64").
    #[serde(default)]
    pub encoding: Option<String>,
}

/// Request body for `PUT /repos/{owner}/{repo}/contents/{path}`.
#[derive(Debug, Clone, Serialize)]
pub struct PutFileRequest {
    /// Commit message.
    pub message: String,
    /// Base64-encoded file content.
    pub content: String,
    /// Current blob SHA when updating an existing file. Omitted on create;
    /// a stale value makes GitHub reject the write with 409.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
}

/// Successful response for a contents PUT.
#[derive(Debug, Clone, Deserialize)]
pub struct PutFileResponse {
    /// Summary of the written file.
    pub content: PutFileContent,
}

/// The `content` object inside a [`PutFileResponse`].
#[derive(Debug, Clone, Deserialize)]
pub struct PutFileContent {
    /// Path of the written file.
    pub path: String,
    /// New blob SHA.
    pub sha: String,
}

/// Error body GitHub attaches to non-success responses.
#[derive(Debug, Clone, Deserialize)]
pub struct GithubApiError {
    /// Human-readable message (e.g. "Bad credentials").
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_file_deserializes_api_shape() {
        let json = r#"{
            "type": "file",
            "name": "products.json",
            "path": "data/products.json",
            "sha": "abc123",
            "size": 2,
            "content": "W10=\n",
            "encoding": "base64"
        }"#;
        let file: ContentFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.path, "data/products.json");
        assert_eq!(file.sha, "abc123");
        assert_eq!(file.encoding.as_deref(), Some("base64"));
    }

    #[test]
    fn test_put_request_omits_sha_on_create() {
        let request = PutFileRequest {
            message: "update settings".to_string(),
            content: "e30=".to_string(),
            sha: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("\"sha\""));
    }
}
