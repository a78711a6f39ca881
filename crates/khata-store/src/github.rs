//! GitHub contents-API gateway.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use reqwest::Client;

use crate::error::{StoreError, StoreResult};
use crate::types::{ContentFile, GithubApiError, PutFileRequest, PutFileResponse};

/// Default GitHub API endpoint.
const DEFAULT_API_URL: &str = "https://api.github.com";

/// Media type GitHub expects from API clients.
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// Pinned REST API version.
const GITHUB_API_VERSION: &str = "2022-11-28";

/// A file read from the remote repository.
///
/// The `sha` is the blob's version marker; it must be sent back on the
/// next write to that path so concurrent edits are rejected instead of
/// silently overwritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteDocument {
    /// Path within the repository.
    pub path: String,
    /// Blob SHA at read time.
    pub sha: String,
    /// Decoded UTF-8 file content.
    pub content: String,
}

/// Client for the contents API of one GitHub repository.
///
/// Cheaply cloneable; every method issues a single request and maps
/// non-success responses into [`StoreError`]. Missing files are `Ok(None)`,
/// never an error.
///
/// # Examples
///
/// ```rust,ignore
/// use khata_store::GithubClient;
///
/// let client = GithubClient::new("ghp_token", "acme/khata-data")?;
/// if let Some(doc) = client.get_file("data/products.json").await? {
///     println!("{} bytes at sha {}", doc.content.len(), doc.sha);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct GithubClient {
    api_url: String,
    token: String,
    owner: String,
    repo: String,
    http: Client,
}

impl GithubClient {
    /// Creates a client for `repo` (`"owner/name"`) using a personal
    /// access token.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Config`] when the token is empty or the
    /// repository is not in `owner/name` form. No request is made here;
    /// an unconfigured install must never touch the network.
    pub fn new(token: impl Into<String>, repo: &str) -> StoreResult<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(StoreError::Config("GitHub token is required".to_string()));
        }

        let (owner, name) = repo
            .split_once('/')
            .ok_or_else(|| invalid_repo(repo))?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(invalid_repo(repo));
        }

        Ok(Self {
            api_url: DEFAULT_API_URL.to_string(),
            token,
            owner: owner.to_string(),
            repo: name.to_string(),
            http: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .user_agent(concat!("khata/", env!("CARGO_PKG_VERSION")))
                .build()?,
        })
    }

    /// Overrides the API endpoint (GitHub Enterprise, tests).
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Returns the configured `owner/name`.
    #[must_use]
    pub fn repo_slug(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    fn contents_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_url, self.owner, self.repo, path
        )
    }

    /// Reads a file from the repository.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when the file does not exist (404); callers treat that
    /// as "nothing to hydrate yet".
    ///
    /// # Errors
    ///
    /// * [`StoreError::Network`] - transport failure
    /// * [`StoreError::Api`] - auth, rate-limit or other API error
    /// * [`StoreError::Parse`] - undecodable content
    pub async fn get_file(&self, path: &str) -> StoreResult<Option<RemoteDocument>> {
        let res = self
            .http
            .get(self.contents_url(path))
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", GITHUB_MEDIA_TYPE)
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .send()
            .await?;

        if res.status().as_u16() == 404 {
            return Ok(None);
        }
        if !res.status().is_success() {
            return Err(api_error(res).await);
        }

        let file: ContentFile = res
            .json()
            .await
            .map_err(|e| StoreError::Parse(format!("{path}: {e}")))?;
        let content = decode_content(&file)?;

        Ok(Some(RemoteDocument {
            path: file.path,
            sha: file.sha,
            content,
        }))
    }

    /// Creates or updates a file in the repository.
    ///
    /// Pass the last-known blob `sha` when the file already exists; GitHub
    /// rejects a stale sha with 409 instead of clobbering a concurrent
    /// edit.
    ///
    /// # Returns
    ///
    /// The new blob sha to use for the next write.
    ///
    /// # Errors
    ///
    /// * [`StoreError::Network`] - transport failure
    /// * [`StoreError::Api`] - auth failure, rate limit, or sha conflict
    pub async fn put_file(
        &self,
        path: &str,
        content: &str,
        message: &str,
        sha: Option<&str>,
    ) -> StoreResult<String> {
        let request = PutFileRequest {
            message: message.to_string(),
            content: BASE64.encode(content.as_bytes()),
            sha: sha.map(str::to_string),
        };

        let res = self
            .http
            .put(self.contents_url(path))
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", GITHUB_MEDIA_TYPE)
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .json(&request)
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(api_error(res).await);
        }

        let put: PutFileResponse = res
            .json()
            .await
            .map_err(|e| StoreError::Parse(format!("{path}: {e}")))?;
        Ok(put.content.sha)
    }
}

fn invalid_repo(repo: &str) -> StoreError {
    StoreError::Config(format!(
        "GitHub repository must be 'owner/name', got '{repo}'"
    ))
}

/// Decodes the base64 `content` field into UTF-8 text.
fn decode_content(file: &ContentFile) -> StoreResult<String> {
    let raw = file
        .content
        .as_deref()
        .ok_or_else(|| StoreError::Parse(format!("{}: no content returned", file.path)))?;

    // GitHub wraps base64 payloads across lines.
    let compact: String = raw.split_whitespace().collect();
    let bytes = BASE64
        .decode(compact.as_bytes())
        .map_err(|e| StoreError::Parse(format!("{}: invalid base64: {e}", file.path)))?;
    String::from_utf8(bytes).map_err(|e| StoreError::Parse(format!("{}: {e}", file.path)))
}

async fn api_error(res: reqwest::Response) -> StoreError {
    let status = res.status().as_u16();
    let body = res.text().await.unwrap_or_default();
    let message = serde_json::from_str::<GithubApiError>(&body)
        .map(|e| e.message)
        .unwrap_or(body);
    StoreError::Api { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> GithubClient {
        GithubClient::new("test-token", "acme/data")
            .unwrap()
            .with_api_url(server.uri())
    }

    #[test]
    fn test_new_rejects_empty_token() {
        let err = GithubClient::new("", "acme/data").unwrap_err();
        assert!(matches!(err, StoreError::Config(_)));
    }

    #[test]
    fn test_new_rejects_malformed_repo() {
        assert!(GithubClient::new("t", "no-slash").is_err());
        assert!(GithubClient::new("t", "/name").is_err());
        assert!(GithubClient::new("t", "owner/").is_err());
        assert!(GithubClient::new("t", "a/b/c").is_err());
        assert!(GithubClient::new("t", "acme/data").is_ok());
    }

    #[tokio::test]
    async fn test_get_file_decodes_content_and_sha() {
        let mock_server = MockServer::start().await;

        // "[]" base64-encoded, wrapped the way GitHub wraps payloads.
        Mock::given(method("GET"))
            .and(path("/repos/acme/data/contents/data/products.json"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "type": "file",
                "name": "products.json",
                "path": "data/products.json",
                "sha": "abc123",
                "size": 2,
                "content": "W1\n0=",
                "encoding": "base64"
            })))
            .mount(&mock_server)
            .await;

        let doc = client_for(&mock_server)
            .get_file("data/products.json")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(doc.content, "[]");
        assert_eq!(doc.sha, "abc123");
        assert_eq!(doc.path, "data/products.json");
    }

    #[tokio::test]
    async fn test_get_file_returns_none_on_404() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/acme/data/contents/data/products.json"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "message": "Not Found"
            })))
            .mount(&mock_server)
            .await;

        let doc = client_for(&mock_server)
            .get_file("data/products.json")
            .await
            .unwrap();

        assert!(doc.is_none());
    }

    #[tokio::test]
    async fn test_get_file_surfaces_auth_error_message() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/acme/data/contents/data/settings.json"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "message": "Bad credentials"
            })))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server)
            .get_file("data/settings.json")
            .await
            .unwrap_err();

        match err {
            StoreError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Bad credentials");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_put_file_sends_sha_and_returns_new_sha() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/repos/acme/data/contents/data/settings.json"))
            .and(body_partial_json(serde_json::json!({
                "message": "update settings",
                "sha": "old-sha"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "content": { "path": "data/settings.json", "sha": "new-sha" },
                "commit": { "sha": "commit-sha" }
            })))
            .mount(&mock_server)
            .await;

        let sha = client_for(&mock_server)
            .put_file("data/settings.json", "{}", "update settings", Some("old-sha"))
            .await
            .unwrap();

        assert_eq!(sha, "new-sha");
    }

    #[tokio::test]
    async fn test_put_file_maps_conflict_to_api_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/repos/acme/data/contents/data/invoices.json"))
            .respond_with(ResponseTemplate::new(409).set_body_json(serde_json::json!({
                "message": "data/invoices.json does not match sha"
            })))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server)
            .put_file("data/invoices.json", "[]", "sync invoices", Some("stale"))
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::Api { status: 409, .. }));
    }
}
