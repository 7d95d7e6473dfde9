//! Comment Repository
//!
//! Free-text comments per title id, insertion order preserved. Append
//! only; editing and deleting are not exposed.

use std::collections::HashMap;

use crate::domain::DomainResult;

use super::db::{read_value, write_value, StoreHandle};

pub const COMMENTS_KEY: &str = "COMMENTS_V1";

pub struct CommentRepository {
    conn: StoreHandle,
}

impl CommentRepository {
    pub fn new(conn: StoreHandle) -> Self {
        Self { conn }
    }

    pub async fn append(&self, mal_id: u32, text: String) -> DomainResult<Vec<String>> {
        let conn = self.conn.lock().await;
        let mut comments: HashMap<u32, Vec<String>> = read_value(&conn, COMMENTS_KEY)?;
        let thread = comments.entry(mal_id).or_default();
        thread.push(text);
        let result = thread.clone();
        write_value(&conn, COMMENTS_KEY, &comments)?;
        Ok(result)
    }

    pub async fn for_title(&self, mal_id: u32) -> DomainResult<Vec<String>> {
        let conn = self.conn.lock().await;
        let comments: HashMap<u32, Vec<String>> = read_value(&conn, COMMENTS_KEY)?;
        Ok(comments.get(&mal_id).cloned().unwrap_or_default())
    }
}
