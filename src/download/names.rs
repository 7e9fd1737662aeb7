//! Run-scoped uploader name cache.

use std::collections::HashMap;

use crate::api::WorkspaceApi;
use crate::error::Result;

/// Maps user identifiers to display names for the duration of one run.
#[derive(Debug, Default)]
pub struct NameCache {
    users: HashMap<String, String>,
    lookups: u64,
}

impl NameCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a user name, asking the API only on a cache miss.
    ///
    /// Failed lookups are not cached.
    pub async fn user_name(&mut self, api: &dyn WorkspaceApi, user_id: &str) -> Result<String> {
        if let Some(name) = self.users.get(user_id) {
            return Ok(name.clone());
        }

        self.lookups += 1;
        let name = api.user_name(user_id).await?;
        tracing::debug!("Resolved user {} -> {}", user_id, name);
        self.users.insert(user_id.to_string(), name.clone());
        Ok(name)
    }

    /// Number of remote lookups performed so far.
    pub fn lookups(&self) -> u64 {
        self.lookups
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
