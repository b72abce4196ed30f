use std::collections::HashMap;

use axum::async_trait;
use chrono::{TimeZone, Utc};
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{EntryStatus, WhitelistEntry};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("address {0} is already whitelisted")]
    DuplicateAddress(String),

    #[error("whitelist entry {0} not found")]
    NotFound(Uuid),
}

/// Repository boundary for the allow-list.
///
/// Production wiring uses [`InMemoryStore`]; tests can inject fakes through
/// the same trait. A database-backed implementation would slot in here.
#[async_trait]
pub trait WhitelistStore: Send + Sync {
    async fn insert(&self, entry: WhitelistEntry) -> Result<WhitelistEntry, StoreError>;
    async fn remove(&self, id: Uuid) -> Result<WhitelistEntry, StoreError>;
    async fn get(&self, id: Uuid) -> Result<WhitelistEntry, StoreError>;
    async fn list(&self) -> Vec<WhitelistEntry>;
}

#[derive(Default)]
pub struct InMemoryStore {
    entries: RwLock<HashMap<Uuid, WhitelistEntry>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with the sample wallets the dashboard ships with,
    /// so a fresh dev instance has something to show.
    pub fn with_demo_entries() -> Self {
        let seeds = [
            (
                "9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM",
                "Treasury Wallet",
                (2024, 1, 15),
                EntryStatus::Active,
            ),
            (
                "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU",
                "Team Wallet",
                (2024, 1, 14),
                EntryStatus::Active,
            ),
            (
                "5Q544fKrFoe6tsEbD7S8EmxGTJYAKtTVhAW5Q5pge4j1",
                "Marketing Wallet",
                (2024, 1, 13),
                EntryStatus::Pending,
            ),
            (
                "3xNweLHLqrxmofjLmMcL5HjHq6KXf1J8J5J5J5J5J5J5",
                "Old Partner",
                (2024, 1, 10),
                EntryStatus::Expired,
            ),
        ];

        let entries: HashMap<Uuid, WhitelistEntry> = seeds
            .into_iter()
            .map(|(address, name, (y, m, d), status)| {
                let entry = WhitelistEntry {
                    id: Uuid::new_v4(),
                    address: address.to_string(),
                    name: name.to_string(),
                    description: None,
                    // Utc never yields an ambiguous local time
                    added_at: Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap(),
                    status,
                };
                (entry.id, entry)
            })
            .collect();

        Self {
            entries: RwLock::new(entries),
        }
    }
}

#[async_trait]
impl WhitelistStore for InMemoryStore {
    async fn insert(&self, entry: WhitelistEntry) -> Result<WhitelistEntry, StoreError> {
        let mut entries = self.entries.write().await;

        // Duplicate detection happens under the write lock
        if entries.values().any(|e| e.address == entry.address) {
            return Err(StoreError::DuplicateAddress(entry.address));
        }

        entries.insert(entry.id, entry.clone());
        Ok(entry)
    }

    async fn remove(&self, id: Uuid) -> Result<WhitelistEntry, StoreError> {
        let mut entries = self.entries.write().await;
        entries.remove(&id).ok_or(StoreError::NotFound(id))
    }

    async fn get(&self, id: Uuid) -> Result<WhitelistEntry, StoreError> {
        let entries = self.entries.read().await;
        entries.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    async fn list(&self) -> Vec<WhitelistEntry> {
        let entries = self.entries.read().await;
        let mut all: Vec<WhitelistEntry> = entries.values().cloned().collect();
        // Newest first, matching the dashboard table order
        all.sort_by(|a, b| b.added_at.cmp(&a.added_at));
        all
    }
}
