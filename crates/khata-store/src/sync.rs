//! Fetch-all / sync-one orchestration over the contents gateway.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use khata_types::{AppSettings, Estimate, Invoice, Product, StockMovement};

use crate::error::{StoreError, StoreResult};
use crate::github::{GithubClient, RemoteDocument};
use crate::paths;

/// Last-seen blob sha per repository path.
///
/// Writes send the recorded sha back so a stale local copy gets a 409
/// instead of overwriting someone else's commit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentShas {
    shas: HashMap<String, String>,
}

impl DocumentShas {
    /// Sha recorded for `path`, if the document has been seen.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&str> {
        self.shas.get(path).map(String::as_str)
    }

    /// Records the sha returned by the last read or write of `path`.
    pub fn record(&mut self, path: &str, sha: String) {
        self.shas.insert(path.to_string(), sha);
    }

    /// Forgets every recorded sha.
    pub fn clear(&mut self) {
        self.shas.clear();
    }
}

/// Everything hydrated by one [`fetch_all`] round.
///
/// Documents missing from the repository come back empty (or `None` for
/// settings) rather than as errors; a fresh data repository is a valid
/// starting state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub settings: Option<AppSettings>,
    pub products: Vec<Product>,
    pub stock: Vec<StockMovement>,
    pub estimates: Vec<Estimate>,
    pub invoices: Vec<Invoice>,
    pub shas: DocumentShas,
}

/// Fetches all five documents concurrently and parses them into a
/// [`Snapshot`].
///
/// Fails fast: if any fetch errors, the whole round errors and no
/// partial snapshot is produced.
///
/// # Errors
///
/// * [`StoreError::Network`] / [`StoreError::Api`] - any fetch failed
/// * [`StoreError::Parse`] - a document exists but is not valid JSON;
///   the message names the offending path
pub async fn fetch_all(client: &GithubClient) -> StoreResult<Snapshot> {
    let (settings_doc, products_doc, stock_doc, estimates_doc, invoices_doc) = futures::try_join!(
        client.get_file(paths::SETTINGS),
        client.get_file(paths::PRODUCTS),
        client.get_file(paths::STOCK),
        client.get_file(paths::ESTIMATES),
        client.get_file(paths::INVOICES),
    )?;

    let mut shas = DocumentShas::default();
    record(&mut shas, paths::SETTINGS, &settings_doc);
    record(&mut shas, paths::PRODUCTS, &products_doc);
    record(&mut shas, paths::STOCK, &stock_doc);
    record(&mut shas, paths::ESTIMATES, &estimates_doc);
    record(&mut shas, paths::INVOICES, &invoices_doc);

    let settings = settings_doc
        .as_ref()
        .map(|doc| serde_json::from_str::<AppSettings>(&doc.content))
        .transpose()
        .map_err(|e| StoreError::Parse(format!("{}: {e}", paths::SETTINGS)))?;

    let snapshot = Snapshot {
        settings,
        products: parse_collection(paths::PRODUCTS, &products_doc)?,
        stock: parse_collection(paths::STOCK, &stock_doc)?,
        estimates: parse_collection(paths::ESTIMATES, &estimates_doc)?,
        invoices: parse_collection(paths::INVOICES, &invoices_doc)?,
        shas,
    };

    tracing::debug!(
        settings = snapshot.settings.is_some(),
        products = snapshot.products.len(),
        stock = snapshot.stock.len(),
        estimates = snapshot.estimates.len(),
        invoices = snapshot.invoices.len(),
        "fetched remote snapshot"
    );

    Ok(snapshot)
}

/// Serializes `data` and writes it to `path` in one commit.
///
/// `sha` is the last-seen blob sha for the path (`None` when the file is
/// being created). Content is pretty-printed so the repository stays
/// readable and diffable.
///
/// # Returns
///
/// The new blob sha, to be recorded for the next write.
pub async fn sync_one<T>(
    client: &GithubClient,
    path: &str,
    data: &T,
    message: &str,
    sha: Option<&str>,
) -> StoreResult<String>
where
    T: Serialize + ?Sized,
{
    let body = serde_json::to_string_pretty(data)
        .map_err(|e| StoreError::Parse(format!("{path}: {e}")))?;
    client.put_file(path, &body, message, sha).await
}

fn record(shas: &mut DocumentShas, path: &str, doc: &Option<RemoteDocument>) {
    if let Some(doc) = doc {
        shas.record(path, doc.sha.clone());
    }
}

fn parse_collection<T: DeserializeOwned>(
    path: &str,
    doc: &Option<RemoteDocument>,
) -> StoreResult<Vec<T>> {
    match doc {
        Some(doc) => serde_json::from_str(&doc.content)
            .map_err(|e| StoreError::Parse(format!("{path}: {e}"))),
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::STANDARD as BASE64;
    use base64::Engine as _;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> GithubClient {
        GithubClient::new("test-token", "acme/data")
            .unwrap()
            .with_api_url(server.uri())
    }

    fn file_response(repo_path: &str, sha: &str, content: &str) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "type": "file",
            "name": repo_path.rsplit('/').next().unwrap(),
            "path": repo_path,
            "sha": sha,
            "size": content.len(),
            "content": BASE64.encode(content.as_bytes()),
            "encoding": "base64"
        }))
    }

    fn not_found() -> ResponseTemplate {
        ResponseTemplate::new(404).set_body_json(serde_json::json!({ "message": "Not Found" }))
    }

    async fn mount_get(server: &MockServer, repo_path: &str, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(format!("/repos/acme/data/contents/{repo_path}")))
            .respond_with(response)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_fetch_all_hydrates_snapshot_and_shas() {
        let mock_server = MockServer::start().await;

        let settings = r#"{"theme":"dark","githubToken":"t","githubRepo":"acme/data"}"#;
        let products = r#"[{"id":"p-1","name":"Widget","unitPrice":9.5}]"#;
        mount_get(&mock_server, paths::SETTINGS, file_response(paths::SETTINGS, "s1", settings)).await;
        mount_get(&mock_server, paths::PRODUCTS, file_response(paths::PRODUCTS, "s2", products)).await;
        mount_get(&mock_server, paths::STOCK, file_response(paths::STOCK, "s3", "[]")).await;
        mount_get(&mock_server, paths::ESTIMATES, not_found()).await;
        mount_get(&mock_server, paths::INVOICES, file_response(paths::INVOICES, "s5", "[]")).await;

        let snapshot = fetch_all(&client_for(&mock_server)).await.unwrap();

        let settings = snapshot.settings.unwrap();
        assert_eq!(settings.github_repo, "acme/data");
        assert_eq!(snapshot.products.len(), 1);
        assert_eq!(snapshot.products[0].name, "Widget");
        assert!(snapshot.stock.is_empty());
        assert!(snapshot.estimates.is_empty());
        assert!(snapshot.invoices.is_empty());

        assert_eq!(snapshot.shas.get(paths::SETTINGS), Some("s1"));
        assert_eq!(snapshot.shas.get(paths::PRODUCTS), Some("s2"));
        assert_eq!(snapshot.shas.get(paths::ESTIMATES), None);
    }

    #[tokio::test]
    async fn test_fetch_all_of_empty_repository_is_an_empty_snapshot() {
        let mock_server = MockServer::start().await;
        for repo_path in paths::ALL {
            mount_get(&mock_server, repo_path, not_found()).await;
        }

        let snapshot = fetch_all(&client_for(&mock_server)).await.unwrap();

        assert_eq!(snapshot, Snapshot::default());
    }

    #[tokio::test]
    async fn test_fetch_all_fails_when_any_document_fails() {
        let mock_server = MockServer::start().await;

        mount_get(&mock_server, paths::SETTINGS, not_found()).await;
        mount_get(&mock_server, paths::PRODUCTS, not_found()).await;
        mount_get(&mock_server, paths::STOCK, not_found()).await;
        mount_get(&mock_server, paths::ESTIMATES, not_found()).await;
        mount_get(
            &mock_server,
            paths::INVOICES,
            ResponseTemplate::new(500)
                .set_body_json(serde_json::json!({ "message": "boom" })),
        )
        .await;

        let err = fetch_all(&client_for(&mock_server)).await.unwrap_err();

        assert!(matches!(err, StoreError::Api { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_fetch_all_parse_error_names_the_document() {
        let mock_server = MockServer::start().await;

        mount_get(&mock_server, paths::SETTINGS, not_found()).await;
        mount_get(&mock_server, paths::PRODUCTS, file_response(paths::PRODUCTS, "s2", "not json")).await;
        mount_get(&mock_server, paths::STOCK, not_found()).await;
        mount_get(&mock_server, paths::ESTIMATES, not_found()).await;
        mount_get(&mock_server, paths::INVOICES, not_found()).await;

        let err = fetch_all(&client_for(&mock_server)).await.unwrap_err();

        assert!(err.to_string().contains(paths::PRODUCTS), "got: {err}");
    }

    #[tokio::test]
    async fn test_sync_one_writes_pretty_json_with_sha() {
        let mock_server = MockServer::start().await;

        let products = vec![Product::new("Widget", 9.5)];
        let pretty = serde_json::to_string_pretty(&products).unwrap();

        Mock::given(method("PUT"))
            .and(path("/repos/acme/data/contents/data/products.json"))
            .and(body_partial_json(serde_json::json!({
                "message": "sync products",
                "content": BASE64.encode(pretty.as_bytes()),
                "sha": "old"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "content": { "path": "data/products.json", "sha": "new" },
                "commit": { "sha": "c1" }
            })))
            .mount(&mock_server)
            .await;

        let sha = sync_one(
            &client_for(&mock_server),
            paths::PRODUCTS,
            &products,
            "sync products",
            Some("old"),
        )
        .await
        .unwrap();

        assert_eq!(sha, "new");
    }
}
