//! Session store
//!
//! Owns the three persisted collections (history, environments, saved
//! requests) plus the active-environment selection. Constructed once per
//! session and passed explicitly to whatever composes requests; there are
//! no ambient globals.
//!
//! Every mutation is write-through: the complete resulting collection is
//! re-serialized and stored before the mutation is considered done.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use quiver_domain::{
    EnvVariable, Environment, HistoryEntry, RequestDraft, RequestHistory, SavedRequest,
};

use crate::ports::{BlobStore, BlobStoreError};

/// Blob key for the history list.
pub const HISTORY_KEY: &str = "quiver_history_v1";
/// Blob key for the environment list.
pub const ENVIRONMENTS_KEY: &str = "quiver_envs_v1";
/// Blob key for the saved-request list.
pub const SAVED_REQUESTS_KEY: &str = "quiver_saved_requests_v1";

/// Failures while persisting a collection.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage boundary failed.
    #[error(transparent)]
    Storage(#[from] BlobStoreError),

    /// A collection could not be serialized.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// The per-session collection store.
///
/// Loading is fault-isolated per blob: an absent, unreadable, or malformed
/// blob falls back to its default without affecting the other two.
#[derive(Debug)]
pub struct SessionStore<S: BlobStore> {
    blobs: S,
    history: RequestHistory,
    environments: Vec<Environment>,
    active_environment: Option<String>,
    saved_requests: Vec<SavedRequest>,
}

impl<S: BlobStore> SessionStore<S> {
    /// Loads a session from the blob store.
    ///
    /// With no stored environments a single "Local" environment is seeded
    /// and made active; otherwise the first stored environment becomes
    /// active. The active id itself is session state and never persisted.
    pub async fn load(blobs: S) -> Self {
        let history = load_blob::<RequestHistory, S>(&blobs, HISTORY_KEY)
            .await
            .unwrap_or_default();

        let environments = load_blob::<Vec<Environment>, S>(&blobs, ENVIRONMENTS_KEY)
            .await
            .unwrap_or_else(|| vec![Environment::new("Local")]);
        let active_environment = environments.first().map(|env| env.id.clone());

        let saved_requests = load_blob::<Vec<SavedRequest>, S>(&blobs, SAVED_REQUESTS_KEY)
            .await
            .unwrap_or_default();

        Self {
            blobs,
            history,
            environments,
            active_environment,
            saved_requests,
        }
    }

    /// Returns the history, newest first.
    #[must_use]
    pub const fn history(&self) -> &RequestHistory {
        &self.history
    }

    /// Prepends a history entry (capped) and persists the list.
    ///
    /// # Errors
    ///
    /// Returns an error if the truncated list cannot be stored.
    pub async fn push_history(&mut self, entry: HistoryEntry) -> Result<(), StoreError> {
        self.history.push(entry);
        self.persist(HISTORY_KEY, &self.history).await
    }

    /// Clears the history and removes its persisted blob.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored blob cannot be removed.
    pub async fn clear_history(&mut self) -> Result<(), StoreError> {
        self.history.clear();
        self.blobs.remove(HISTORY_KEY).await?;
        Ok(())
    }

    /// Returns all environments.
    #[must_use]
    pub fn environments(&self) -> &[Environment] {
        &self.environments
    }

    /// Returns the active environment, if one is selected.
    #[must_use]
    pub fn active_environment(&self) -> Option<&Environment> {
        let id = self.active_environment.as_deref()?;
        self.environments.iter().find(|env| env.id == id)
    }

    /// Returns the active environment's variables.
    ///
    /// A strict id match: a stale or absent selection yields an empty
    /// slice, never a fallback environment.
    #[must_use]
    pub fn active_variables(&self) -> &[EnvVariable] {
        self.active_environment()
            .map_or(&[], |env| env.variables.as_slice())
    }

    /// Selects the active environment (or none). Not persisted.
    pub fn set_active_environment(&mut self, id: Option<String>) {
        self.active_environment = id;
    }

    /// Appends a new empty environment and persists; returns its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment list cannot be stored.
    pub async fn add_environment(&mut self) -> Result<String, StoreError> {
        let environment = Environment::new(format!("Env {}", self.environments.len() + 1));
        let id = environment.id.clone();
        self.environments.push(environment);
        self.persist(ENVIRONMENTS_KEY, &self.environments).await?;
        Ok(id)
    }

    /// Replaces the environment with the same id and persists.
    /// No-op if the id is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment list cannot be stored.
    pub async fn update_environment(&mut self, environment: Environment) -> Result<(), StoreError> {
        if let Some(existing) = self
            .environments
            .iter_mut()
            .find(|env| env.id == environment.id)
        {
            *existing = environment;
        }
        self.persist(ENVIRONMENTS_KEY, &self.environments).await
    }

    /// Removes an environment and persists.
    ///
    /// Removing the active environment reassigns "active" to the first
    /// remaining environment, or to none if the list becomes empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment list cannot be stored.
    pub async fn remove_environment(&mut self, id: &str) -> Result<(), StoreError> {
        self.environments.retain(|env| env.id != id);
        if self.active_environment.as_deref() == Some(id) {
            self.active_environment = self.environments.first().map(|env| env.id.clone());
        }
        self.persist(ENVIRONMENTS_KEY, &self.environments).await
    }

    /// Returns all saved requests, newest first.
    #[must_use]
    pub fn saved_requests(&self) -> &[SavedRequest] {
        &self.saved_requests
    }

    /// Returns a saved request by id.
    #[must_use]
    pub fn get_saved_request(&self, id: &str) -> Option<&SavedRequest> {
        self.saved_requests.iter().find(|req| req.id == id)
    }

    /// Snapshots the draft under `name`, prepends it, and persists;
    /// returns the new id.
    ///
    /// # Errors
    ///
    /// Returns an error if the saved-request list cannot be stored.
    pub async fn save_request(
        &mut self,
        name: impl Into<String> + Send,
        draft: &RequestDraft,
    ) -> Result<String, StoreError> {
        let saved = SavedRequest::from_draft(name, draft);
        let id = saved.id.clone();
        self.saved_requests.insert(0, saved);
        self.persist(SAVED_REQUESTS_KEY, &self.saved_requests).await?;
        Ok(id)
    }

    /// Removes a saved request by id and persists.
    ///
    /// # Errors
    ///
    /// Returns an error if the saved-request list cannot be stored.
    pub async fn remove_request(&mut self, id: &str) -> Result<(), StoreError> {
        self.saved_requests.retain(|req| req.id != id);
        self.persist(SAVED_REQUESTS_KEY, &self.saved_requests).await
    }

    async fn persist<T: Serialize + Sync>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(value)?;
        self.blobs.save(key, &bytes).await?;
        Ok(())
    }
}

/// Loads and deserializes one blob, degrading to `None` on any fault.
async fn load_blob<T: DeserializeOwned, S: BlobStore>(blobs: &S, key: &str) -> Option<T> {
    let bytes = match blobs.load(key).await {
        Ok(Some(bytes)) => bytes,
        Ok(None) => return None,
        Err(error) => {
            tracing::warn!(key, %error, "failed to load stored blob, using defaults");
            return None;
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(value) => Some(value),
        Err(error) => {
            tracing::warn!(key, %error, "stored blob is malformed, using defaults");
            None
        }
    }
}
