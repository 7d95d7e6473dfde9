//! Like Repository
//!
//! Membership set of liked title ids, stored as a JSON list in toggle
//! order.

use crate::domain::DomainResult;

use super::db::{read_value, write_value, StoreHandle};

pub const LIKES_KEY: &str = "LIKES_V1";

pub struct LikeRepository {
    conn: StoreHandle,
}

impl LikeRepository {
    pub fn new(conn: StoreHandle) -> Self {
        Self { conn }
    }

    /// Flip membership for an id and report the state after the toggle
    pub async fn toggle(&self, mal_id: u32) -> DomainResult<bool> {
        let conn = self.conn.lock().await;
        let mut likes: Vec<u32> = read_value(&conn, LIKES_KEY)?;

        let liked = match likes.iter().position(|&id| id == mal_id) {
            Some(index) => {
                likes.remove(index);
                false
            }
            None => {
                likes.push(mal_id);
                true
            }
        };

        write_value(&conn, LIKES_KEY, &likes)?;
        Ok(liked)
    }

    pub async fn is_liked(&self, mal_id: u32) -> DomainResult<bool> {
        let conn = self.conn.lock().await;
        let likes: Vec<u32> = read_value(&conn, LIKES_KEY)?;
        Ok(likes.contains(&mal_id))
    }

    pub async fn all(&self) -> DomainResult<Vec<u32>> {
        let conn = self.conn.lock().await;
        read_value(&conn, LIKES_KEY)
    }
}
