use chrono::{DateTime, Utc};

use crate::models::coin::CoinRecord;

/// In-memory snapshot of the normalized ticker list.
///
/// Order is the provider's rank order and is never changed. `load_all`
/// replaces the snapshot wholesale; records are never merged.
#[derive(Debug, Clone, Default)]
pub struct CoinRepository {
    coins: Vec<CoinRecord>,
    loaded_at: Option<DateTime<Utc>>,
}

impl CoinRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire collection, keeping the given order.
    pub fn load_all(&mut self, records: Vec<CoinRecord>) {
        self.coins = records;
        self.loaded_at = Some(Utc::now());
    }

    /// Exact match on the coin identifier.
    pub fn find_by_id(&self, id: &str) -> Option<&CoinRecord> {
        self.coins.iter().find(|c| c.id == id)
    }

    /// Case-insensitive substring match against name or symbol, with the
    /// term taken as typed. An empty (or whitespace-only) term returns the
    /// whole collection.
    pub fn search(&self, term: &str) -> Vec<&CoinRecord> {
        if term.trim().is_empty() {
            return self.coins.iter().collect();
        }
        let needle = term.to_lowercase();
        self.coins.iter().filter(|c| c.matches(&needle)).collect()
    }

    pub fn all(&self) -> &[CoinRecord] {
        &self.coins
    }

    pub fn first(&self) -> Option<&CoinRecord> {
        self.coins.first()
    }

    pub fn len(&self) -> usize {
        self.coins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }

    /// `true` once `load_all` has run at least once (even with zero records).
    pub fn is_loaded(&self) -> bool {
        self.loaded_at.is_some()
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }
}
