//! Watchlist Repository
//!
//! The watchlist is an ordered list of WatchEntry values serialized as one
//! JSON blob. Every mutator holds the connection lock across its whole
//! read-compute-write sequence, so concurrent mutations serialize instead
//! of overwriting each other.

use async_trait::async_trait;

use crate::domain::{DomainResult, Entity, WatchEntry, WatchStatus};

use super::db::{read_value, write_value, StoreHandle};
use super::traits::Repository;

pub const WATCHLIST_KEY: &str = "WATCHLIST_V1";

pub struct WatchlistRepository {
    conn: StoreHandle,
}

impl WatchlistRepository {
    pub fn new(conn: StoreHandle) -> Self {
        Self { conn }
    }

    /// Set the episodes-watched counter for an entry, clamped to the known
    /// episode count
    pub async fn update_progress(&self, id: u32, progress: u32) -> DomainResult<Option<WatchEntry>> {
        let conn = self.conn.lock().await;
        let mut list: Vec<WatchEntry> = read_value(&conn, WATCHLIST_KEY)?;

        let updated = list.iter_mut().find(|e| e.id == id).map(|entry| {
            entry.progress = entry.clamp_progress(progress);
            entry.clone()
        });

        if updated.is_some() {
            write_value(&conn, WATCHLIST_KEY, &list)?;
        }
        Ok(updated)
    }

    /// Move an entry to a different tracking status
    pub async fn update_status(&self, id: u32, status: WatchStatus) -> DomainResult<Option<WatchEntry>> {
        let conn = self.conn.lock().await;
        let mut list: Vec<WatchEntry> = read_value(&conn, WATCHLIST_KEY)?;

        let updated = list.iter_mut().find(|e| e.id == id).map(|entry| {
            entry.status = status;
            entry.clone()
        });

        if updated.is_some() {
            write_value(&conn, WATCHLIST_KEY, &list)?;
        }
        Ok(updated)
    }
}

#[async_trait]
impl Repository<WatchEntry> for WatchlistRepository {
    async fn create(&self, entity: &WatchEntry) -> DomainResult<WatchEntry> {
        let conn = self.conn.lock().await;
        let mut list: Vec<WatchEntry> = read_value(&conn, WATCHLIST_KEY)?;

        // Idempotent: one entry per title id.
        if let Some(existing) = list.iter().find(|e| e.id == entity.id()) {
            return Ok(existing.clone());
        }

        list.insert(0, entity.clone());
        write_value(&conn, WATCHLIST_KEY, &list)?;
        Ok(entity.clone())
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<WatchEntry>> {
        let conn = self.conn.lock().await;
        let list: Vec<WatchEntry> = read_value(&conn, WATCHLIST_KEY)?;
        Ok(list.into_iter().find(|e| e.id == id))
    }

    async fn list(&self) -> DomainResult<Vec<WatchEntry>> {
        let conn = self.conn.lock().await;
        read_value(&conn, WATCHLIST_KEY)
    }

    async fn update(&self, entity: &WatchEntry) -> DomainResult<WatchEntry> {
        let conn = self.conn.lock().await;
        let mut list: Vec<WatchEntry> = read_value(&conn, WATCHLIST_KEY)?;

        if let Some(slot) = list.iter_mut().find(|e| e.id == entity.id()) {
            *slot = entity.clone();
            write_value(&conn, WATCHLIST_KEY, &list)?;
        }
        Ok(entity.clone())
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let conn = self.conn.lock().await;
        let mut list: Vec<WatchEntry> = read_value(&conn, WATCHLIST_KEY)?;

        let before = list.len();
        list.retain(|e| e.id != id);
        if list.len() != before {
            write_value(&conn, WATCHLIST_KEY, &list)?;
        }
        Ok(())
    }
}
