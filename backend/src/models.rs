use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// ==================== Whitelist Models ====================

/// Display-only lifecycle label for a whitelist entry. The value is fixed
/// at creation; there is no transition logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    Active,
    Pending,
    Expired,
}

impl std::fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryStatus::Active => write!(f, "active"),
            EntryStatus::Pending => write!(f, "pending"),
            EntryStatus::Expired => write!(f, "expired"),
        }
    }
}

/// A wallet permitted to transfer the hooked token.
///
/// `id` is the only enforced invariant: it is unique within the collection
/// (the store is keyed by it). Addresses are checked for base58
/// well-formedness and deduplicated at insertion time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhitelistEntry {
    pub id: Uuid,
    pub address: String,
    pub name: String,
    pub description: Option<String>,
    pub added_at: DateTime<Utc>,
    pub status: EntryStatus,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddEntryRequest {
    #[validate(length(min = 32, max = 44, message = "address must be a base58 pubkey"))]
    pub address: String,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub search: Option<String>,
}

/// Single-entry response with the explorer link for the configured cluster.
#[derive(Debug, Serialize)]
pub struct EntryDetail {
    #[serde(flatten)]
    pub entry: WhitelistEntry,
    pub explorer_url: String,
}

/// The three dashboard summary cards.
#[derive(Debug, Serialize)]
pub struct WhitelistStats {
    pub total: usize,
    pub active: usize,
    pub pending: usize,
}
