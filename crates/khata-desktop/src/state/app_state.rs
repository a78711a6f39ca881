//! # Application State
//!
//! Global state management using Dioxus signals and context.
//!
//! All record collections live in memory here. They are hydrated from the
//! configured GitHub repository in one fetch round and written back one
//! document per edit, with the last-seen blob shas kept alongside so
//! concurrent edits surface as conflicts instead of silent overwrites.

use dioxus::prelude::*;
use serde::Serialize;

use khata_store::{paths, DocumentShas, GithubClient, Snapshot, StoreResult};
use khata_types::{AppSettings, Estimate, Invoice, Product, StockMovement};

use crate::config;

/// Global application state.
///
/// Shared across all components via Dioxus context.
/// Use `use_context::<AppState>()` to access in components.
///
/// # Examples
///
/// ```rust,ignore
/// #[component]
/// fn MyComponent() -> Element {
///     let state = use_context::<AppState>();
///     let products = state.products.read();
///
///     rsx! {
///         p { "{products.len()} products" }
///     }
/// }
/// ```
#[derive(Clone, Copy)]
pub struct AppState {
    /// Current settings (company identity, theme, GitHub credentials).
    pub settings: Signal<AppSettings>,

    /// Whether working GitHub credentials have been saved.
    pub setup_complete: Signal<bool>,

    /// Product catalog.
    pub products: Signal<Vec<Product>>,

    /// Stock movement journal.
    pub stock: Signal<Vec<StockMovement>>,

    /// Estimates.
    pub estimates: Signal<Vec<Estimate>>,

    /// Invoices.
    pub invoices: Signal<Vec<Invoice>>,

    /// Last-seen blob sha per remote document.
    pub shas: Signal<DocumentShas>,

    /// Whether a full fetch round is in flight.
    pub loading: Signal<bool>,

    /// Whether any write to the repository is in flight.
    pub syncing: Signal<bool>,

    /// Last error message, if any. Shown as a dismissible banner.
    pub error: Signal<Option<String>>,

    /// Monotonic fetch counter. A finished fetch only applies its result
    /// if no newer fetch has started since.
    fetch_epoch: Signal<u64>,
}

impl AppState {
    /// Creates the application state, loading persisted settings from disk.
    ///
    /// No network traffic happens here; the layout triggers the first
    /// fetch once it mounts.
    #[must_use]
    pub fn new() -> Self {
        let settings = config::load();
        let setup_complete = settings.as_ref().is_some_and(AppSettings::is_configured);

        Self {
            settings: Signal::new(settings.unwrap_or_default()),
            setup_complete: Signal::new(setup_complete),
            products: Signal::new(Vec::new()),
            stock: Signal::new(Vec::new()),
            estimates: Signal::new(Vec::new()),
            invoices: Signal::new(Vec::new()),
            shas: Signal::new(DocumentShas::default()),
            loading: Signal::new(false),
            syncing: Signal::new(false),
            error: Signal::new(None),
            fetch_epoch: Signal::new(0),
        }
    }

    /// Creates a [`GithubClient`] from the current credentials.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when no valid credential pair is
    /// saved.
    pub fn client(&self) -> StoreResult<GithubClient> {
        let settings = self.settings.read();
        GithubClient::new(settings.github_token.clone(), &settings.github_repo)
    }

    /// Current shell phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        phase(*self.setup_complete.read(), *self.loading.read())
    }

    /// Starts a full fetch round in the background.
    ///
    /// Safe to call repeatedly; if a newer round starts while an older
    /// one is in flight, the older result is discarded.
    pub fn fetch_all(&mut self) {
        spawn(self.do_fetch());
    }

    async fn do_fetch(mut self) {
        let client = match self.client() {
            Ok(client) => client,
            Err(_) => {
                self.error
                    .set(Some("GitHub not configured. Please go to Settings.".to_string()));
                self.loading.set(false);
                return;
            }
        };

        let epoch = *self.fetch_epoch.read() + 1;
        self.fetch_epoch.set(epoch);
        self.loading.set(true);
        self.error.set(None);

        let result = khata_store::fetch_all(&client).await;

        // A newer round owns the state now; drop this result.
        if *self.fetch_epoch.read() != epoch {
            tracing::debug!(epoch, "discarding stale fetch result");
            return;
        }

        match result {
            Ok(snapshot) => self.apply_snapshot(snapshot),
            Err(e) => {
                tracing::warn!(error = %e, "fetch failed");
                self.error
                    .set(Some(format!("Failed to fetch data from GitHub: {e}")));
            }
        }
        self.loading.set(false);
    }

    fn apply_snapshot(&mut self, snapshot: Snapshot) {
        // The remote settings document replaces the in-memory copy
        // wholesale; the local settings file is only written on an
        // explicit save.
        if let Some(settings) = snapshot.settings {
            self.settings.set(settings);
        }
        self.products.set(snapshot.products);
        self.stock.set(snapshot.stock);
        self.estimates.set(snapshot.estimates);
        self.invoices.set(snapshot.invoices);
        self.shas.set(snapshot.shas);
    }

    /// Validates new settings against GitHub, then commits them.
    ///
    /// The remote write acts as the credential check: only after
    /// `data/settings.json` has been written with the new credentials are
    /// the settings applied in memory and saved locally. On a first-time
    /// setup this also triggers the initial fetch round.
    pub fn save_settings(&mut self, new_settings: AppSettings) {
        let client = match GithubClient::new(
            new_settings.github_token.clone(),
            &new_settings.github_repo,
        ) {
            Ok(client) => client,
            Err(e) => {
                self.error.set(Some(format!("Failed to save settings: {e}")));
                return;
            }
        };

        let first_setup = !self.settings.read().is_configured();
        // The cached sha is only valid if the target repository is the
        // one it was fetched from.
        let cached_sha = if self.settings.read().github_repo == new_settings.github_repo {
            self.shas.read().get(paths::SETTINGS).map(str::to_string)
        } else {
            None
        };

        let mut state = *self;
        self.syncing.set(true);
        spawn(async move {
            let result = async {
                let sha = match cached_sha {
                    Some(sha) => Some(sha),
                    // The document may already exist in a repository this
                    // install has never fetched from.
                    None => client.get_file(paths::SETTINGS).await?.map(|doc| doc.sha),
                };
                khata_store::sync_one(
                    &client,
                    paths::SETTINGS,
                    &new_settings,
                    "update settings",
                    sha.as_deref(),
                )
                .await
            }
            .await;

            match result {
                Ok(new_sha) => {
                    state.shas.write().record(paths::SETTINGS, new_sha);
                    if let Err(e) = config::save(&new_settings) {
                        tracing::warn!("Failed to save settings locally: {e}");
                    }
                    state.settings.set(new_settings);
                    state.setup_complete.set(true);
                    state.error.set(None);
                    if first_setup {
                        state.do_fetch().await;
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "settings save failed");
                    state.error.set(Some(format!("Failed to save settings: {e}")));
                }
            }
            state.syncing.set(false);
        });
    }

    /// Replaces the product catalog and syncs it.
    pub fn save_products(&mut self, products: Vec<Product>) {
        self.products.set(products.clone());
        self.sync_collection(paths::PRODUCTS, products, "update products");
    }

    /// Replaces the stock journal and the product catalog together.
    ///
    /// A stock movement adjusts the quantity on its product, so the two
    /// documents are written in one pass.
    pub fn save_stock(&mut self, stock: Vec<StockMovement>, products: Vec<Product>) {
        self.stock.set(stock.clone());
        self.products.set(products.clone());

        let Ok(client) = self.client() else { return };
        let mut state = *self;
        self.syncing.set(true);
        spawn(async move {
            state
                .sync_doc(&client, paths::STOCK, &stock, "update stock")
                .await;
            state
                .sync_doc(&client, paths::PRODUCTS, &products, "update products")
                .await;
            state.syncing.set(false);
        });
    }

    /// Replaces the estimates and syncs them.
    pub fn save_estimates(&mut self, estimates: Vec<Estimate>) {
        self.estimates.set(estimates.clone());
        self.sync_collection(paths::ESTIMATES, estimates, "update estimates");
    }

    /// Replaces the invoices and syncs them.
    pub fn save_invoices(&mut self, invoices: Vec<Invoice>) {
        self.invoices.set(invoices.clone());
        self.sync_collection(paths::INVOICES, invoices, "update invoices");
    }

    /// Writes one collection document in the background.
    ///
    /// Unconfigured installs skip the write silently; the in-memory edit
    /// is kept either way.
    fn sync_collection<T>(&mut self, path: &'static str, data: T, message: &'static str)
    where
        T: Serialize + 'static,
    {
        let Ok(client) = self.client() else { return };
        let mut state = *self;
        self.syncing.set(true);
        spawn(async move {
            state.sync_doc(&client, path, &data, message).await;
            state.syncing.set(false);
        });
    }

    async fn sync_doc<T: Serialize>(
        mut self,
        client: &GithubClient,
        path: &str,
        data: &T,
        message: &str,
    ) {
        let sha = self.shas.read().get(path).map(str::to_string);
        match khata_store::sync_one(client, path, data, message, sha.as_deref()).await {
            Ok(new_sha) => self.shas.write().record(path, new_sha),
            Err(e) => {
                tracing::warn!(path, error = %e, "sync failed");
                self.error.set(Some(format!("Sync failed for {path}: {e}")));
            }
        }
    }

    /// Flips between light and dark theme.
    ///
    /// The choice is saved locally right away so it survives a restart;
    /// the remote settings document is only touched on an explicit save.
    pub fn toggle_theme(&mut self) {
        let mut settings = self.settings.read().clone();
        settings.theme = settings.theme.toggled();
        self.settings.set(settings);

        if let Err(e) = config::save(&self.settings.read()) {
            tracing::warn!("Failed to save settings locally: {e}");
        }
    }

    /// Clears the error banner.
    pub fn dismiss_error(&mut self) {
        self.error.set(None);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-level shell phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No GitHub credentials saved yet; show the setup screen.
    Setup,
    /// A full fetch round is in flight; show the loading splash.
    Loading,
    /// Normal shell with sidebar and routed views.
    Ready,
}

/// Derives the shell phase from state flags.
///
/// Setup wins over loading so a half-configured install never shows a
/// splash it cannot leave.
#[must_use]
pub fn phase(setup_complete: bool, loading: bool) -> Phase {
    if !setup_complete {
        Phase::Setup
    } else if loading {
        Phase::Loading
    } else {
        Phase::Ready
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfigured_app_is_in_setup_phase() {
        assert_eq!(phase(false, false), Phase::Setup);
    }

    #[test]
    fn test_setup_wins_over_loading() {
        assert_eq!(phase(false, true), Phase::Setup);
    }

    #[test]
    fn test_configured_app_shows_splash_while_loading() {
        assert_eq!(phase(true, true), Phase::Loading);
    }

    #[test]
    fn test_configured_idle_app_is_ready() {
        assert_eq!(phase(true, false), Phase::Ready);
    }
}
