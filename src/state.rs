use crate::domain::error::TransproError;
use crate::domain::model::{FavoriteItem, Language, TranslationResult};
use crate::domain::traits::{KeyValueStore, Translator};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::warn;

/// Store key holding the raw provider credential
pub const CREDENTIAL_KEY: &str = "credential";
/// Store key holding the JSON-encoded favorites list, newest first
pub const FAVORITES_KEY: &str = "favorites";

/// What the user is currently looking at
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub source_text: String,
    pub context: String,
    pub result: Option<TranslationResult>,
    pub active_tab: Language,
}

/// Client application state
///
/// Owns the credential, the transient view and the favorites list. The
/// store and the translator are injected, so a session can run entirely
/// in memory.
pub struct AppState {
    pub(crate) store: Arc<dyn KeyValueStore>,
    pub(crate) translator: Arc<dyn Translator>,
    pub(crate) credential: String,
    pub(crate) favorites: Vec<FavoriteItem>,
    pub(crate) is_loading: bool,
    pub view: ViewState,
}

impl AppState {
    /// Read the credential and favorites from the store.
    ///
    /// Unreadable or corrupt entries are logged and treated as absent.
    pub async fn load(store: Arc<dyn KeyValueStore>, translator: Arc<dyn Translator>) -> Self {
        let credential = match store.get(CREDENTIAL_KEY).await {
            Ok(value) => value.unwrap_or_default(),
            Err(e) => {
                warn!("Failed to read credential: {}", e);
                String::new()
            }
        };

        let favorites = match store.get(FAVORITES_KEY).await {
            Ok(Some(raw)) => parse_favorites(&raw),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to read favorites: {}", e);
                Vec::new()
            }
        };

        Self {
            store,
            translator,
            credential,
            favorites,
            is_loading: false,
            view: ViewState::default(),
        }
    }

    pub fn credential(&self) -> &str {
        &self.credential
    }

    pub fn has_credential(&self) -> bool {
        !self.credential.trim().is_empty()
    }

    /// Newest first
    pub fn favorites(&self) -> &[FavoriteItem] {
        &self.favorites
    }

    pub fn favorite(&self, id: &str) -> Option<&FavoriteItem> {
        self.favorites.iter().find(|item| item.id == id)
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Update the credential and mirror it to the store immediately
    pub async fn set_credential(&mut self, value: &str) -> Result<(), TransproError> {
        self.credential = value.to_string();
        self.store.set(CREDENTIAL_KEY, value).await
    }
}

/// Decode the stored list item by item so one bad entry cannot take the
/// rest down with it. Undecodable items and repeated ids are dropped.
fn parse_favorites(raw: &str) -> Vec<FavoriteItem> {
    let entries = match serde_json::from_str::<Vec<serde_json::Value>>(raw) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Failed to parse favorites: {}", e);
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    let mut favorites = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let item = match serde_json::from_value::<FavoriteItem>(entry) {
            Ok(item) => item,
            Err(e) => {
                warn!("Skipping unreadable favorite #{}: {}", index, e);
                continue;
            }
        };
        if !seen.insert(item.id.clone()) {
            warn!("Dropping favorite with duplicate id {}", item.id);
            continue;
        }
        favorites.push(item);
    }
    favorites
}
