use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ApiError, ApiResult};
use crate::models::{AddEntryRequest, EntryStatus, WhitelistEntry, WhitelistStats};
use crate::store::WhitelistStore;
use crate::utils;

/// Allow-list operations on top of the repository: request validation,
/// search filtering, and the summary counts.
pub struct WhitelistService {
    store: Arc<dyn WhitelistStore>,
}

impl WhitelistService {
    pub fn new(store: Arc<dyn WhitelistStore>) -> Self {
        Self { store }
    }

    /// Validate and insert a new entry. New entries start out `pending`
    /// until the on-chain hook state is confirmed.
    pub async fn add(&self, req: AddEntryRequest) -> ApiResult<WhitelistEntry> {
        req.validate()
            .map_err(|e| ApiError::Validation(e.to_string()))?;

        if !utils::is_valid_pubkey(&req.address) {
            return Err(ApiError::Validation(format!(
                "invalid Solana address: {}",
                req.address
            )));
        }

        let name = req.name.trim().to_string();
        if name.is_empty() {
            return Err(ApiError::Validation("name must not be empty".to_string()));
        }

        let entry = WhitelistEntry {
            id: Uuid::new_v4(),
            address: req.address,
            name,
            description: req.description.filter(|d| !d.trim().is_empty()),
            added_at: Utc::now(),
            status: EntryStatus::Pending,
        };

        let entry = self.store.insert(entry).await?;

        tracing::info!(
            id = %entry.id,
            address = %utils::truncate_address(&entry.address),
            status = %entry.status,
            "added address to whitelist"
        );

        Ok(entry)
    }

    pub async fn remove(&self, id: Uuid) -> ApiResult<WhitelistEntry> {
        let entry = self.store.remove(id).await?;

        tracing::info!(
            id = %entry.id,
            address = %utils::truncate_address(&entry.address),
            "removed address from whitelist"
        );

        Ok(entry)
    }

    pub async fn get(&self, id: Uuid) -> ApiResult<WhitelistEntry> {
        Ok(self.store.get(id).await?)
    }

    /// List entries, optionally filtered by a case-insensitive substring
    /// match on address or name. A blank search term returns everything.
    pub async fn list(&self, search: Option<&str>) -> Vec<WhitelistEntry> {
        let entries = self.store.list().await;

        match search.map(str::trim).filter(|s| !s.is_empty()) {
            None => entries,
            Some(term) => {
                let term = term.to_lowercase();
                entries
                    .into_iter()
                    .filter(|e| {
                        e.address.to_lowercase().contains(&term)
                            || e.name.to_lowercase().contains(&term)
                    })
                    .collect()
            }
        }
    }

    pub async fn stats(&self) -> WhitelistStats {
        let entries = self.store.list().await;

        WhitelistStats {
            total: entries.len(),
            active: entries
                .iter()
                .filter(|e| e.status == EntryStatus::Active)
                .count(),
            pending: entries
                .iter()
                .filter(|e| e.status == EntryStatus::Pending)
                .count(),
        }
    }
}
