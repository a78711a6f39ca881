//! GitHub-backed document store for Khata.
//!
//! This crate treats one GitHub repository as a small document database:
//! each record collection lives in a fixed JSON file under `data/`, read
//! and written through the contents API. It provides the [`GithubClient`]
//! gateway, the fixed document [`paths`], and the sync orchestration
//! ([`fetch_all`] / [`sync_one`]) the desktop shell drives.

mod error;
mod github;
pub mod paths;
mod sync;
mod types;

pub use error::{StoreError, StoreResult};
pub use github::{GithubClient, RemoteDocument};
pub use sync::{fetch_all, sync_one, DocumentShas, Snapshot};
pub use types::{ContentFile, PutFileContent, PutFileRequest, PutFileResponse};
