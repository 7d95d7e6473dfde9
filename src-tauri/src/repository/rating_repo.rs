//! Rating Repository
//!
//! One rating per title id, stored as a JSON object keyed by id. A new
//! write overwrites the previous value; no deletion is exposed.

use std::collections::HashMap;

use crate::domain::DomainResult;

use super::db::{read_value, write_value, StoreHandle};

pub const RATINGS_KEY: &str = "RATINGS_V1";

pub struct RatingRepository {
    conn: StoreHandle,
}

impl RatingRepository {
    pub fn new(conn: StoreHandle) -> Self {
        Self { conn }
    }

    pub async fn set(&self, mal_id: u32, rating: u8) -> DomainResult<()> {
        let conn = self.conn.lock().await;
        let mut ratings: HashMap<u32, u8> = read_value(&conn, RATINGS_KEY)?;
        ratings.insert(mal_id, rating);
        write_value(&conn, RATINGS_KEY, &ratings)
    }

    pub async fn get(&self, mal_id: u32) -> DomainResult<Option<u8>> {
        let conn = self.conn.lock().await;
        let ratings: HashMap<u32, u8> = read_value(&conn, RATINGS_KEY)?;
        Ok(ratings.get(&mal_id).copied())
    }

    pub async fn all(&self) -> DomainResult<HashMap<u32, u8>> {
        let conn = self.conn.lock().await;
        read_value(&conn, RATINGS_KEY)
    }
}
