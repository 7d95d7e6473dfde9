//! Repository Integration Tests
//!
//! Preference-store behavior against an in-memory SQLite database.

#[cfg(test)]
mod tests {
    use std::path::Path;

    use rusqlite::params;

    use crate::domain::{Anime, Entity, WatchEntry, WatchStatus};
    use crate::repository::{
        init_db, CommentRepository, LikeRepository, RatingRepository, Repository, StoreHandle,
        WatchlistRepository,
    };

    fn setup_store() -> StoreHandle {
        init_db(Path::new(":memory:")).expect("Failed to init test store")
    }

    fn sample_anime(mal_id: u32, title: &str, episodes: Option<u32>) -> Anime {
        Anime {
            mal_id,
            title: title.to_string(),
            episodes,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_add_defaults() {
        let repo = WatchlistRepository::new(setup_store());

        let entry = WatchEntry::from_anime(&sample_anime(5, "X", Some(12)), 1_000);
        repo.create(&entry).await.expect("Failed to add");

        let list = repo.list().await.expect("List failed");
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id(), 5);
        assert_eq!(list[0].progress, 0);
        assert_eq!(list[0].status, WatchStatus::PlanToWatch);
    }

    #[tokio::test]
    async fn test_add_is_idempotent() {
        let repo = WatchlistRepository::new(setup_store());

        let entry = WatchEntry::from_anime(&sample_anime(21, "One Piece", None), 1_000);
        repo.create(&entry).await.unwrap();
        repo.create(&entry).await.unwrap();

        let list = repo.list().await.unwrap();
        assert_eq!(list.len(), 1);
    }

    #[tokio::test]
    async fn test_newest_entry_first() {
        let repo = WatchlistRepository::new(setup_store());

        repo.create(&WatchEntry::from_anime(&sample_anime(1, "First", None), 1)).await.unwrap();
        repo.create(&WatchEntry::from_anime(&sample_anime(2, "Second", None), 2)).await.unwrap();

        let list = repo.list().await.unwrap();
        assert_eq!(list[0].id, 2);
        assert_eq!(list[1].id, 1);
    }

    #[tokio::test]
    async fn test_remove_absent_id_is_noop() {
        let repo = WatchlistRepository::new(setup_store());

        repo.create(&WatchEntry::from_anime(&sample_anime(1, "Keep", None), 0)).await.unwrap();
        repo.delete(999).await.expect("Delete failed");

        let list = repo.list().await.unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, 1);
    }

    #[tokio::test]
    async fn test_update_progress_leaves_others_unchanged() {
        let repo = WatchlistRepository::new(setup_store());

        repo.create(&WatchEntry::from_anime(&sample_anime(1, "A", Some(26)), 0)).await.unwrap();
        repo.create(&WatchEntry::from_anime(&sample_anime(2, "B", Some(13)), 0)).await.unwrap();

        let updated = repo.update_progress(1, 7).await.expect("Update failed");
        assert_eq!(updated.unwrap().progress, 7);

        let list = repo.list().await.unwrap();
        let a = list.iter().find(|e| e.id == 1).unwrap();
        let b = list.iter().find(|e| e.id == 2).unwrap();
        assert_eq!(a.progress, 7);
        assert_eq!(b.progress, 0);
    }

    #[tokio::test]
    async fn test_update_progress_clamps_to_total() {
        let repo = WatchlistRepository::new(setup_store());

        repo.create(&WatchEntry::from_anime(&sample_anime(1, "A", Some(12)), 0)).await.unwrap();

        let updated = repo.update_progress(1, 99).await.unwrap();
        assert_eq!(updated.unwrap().progress, 12);
    }

    #[tokio::test]
    async fn test_update_status() {
        let repo = WatchlistRepository::new(setup_store());

        repo.create(&WatchEntry::from_anime(&sample_anime(1, "A", None), 0)).await.unwrap();
        repo.update_status(1, WatchStatus::Watching).await.unwrap();

        let found = repo.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(found.status, WatchStatus::Watching);
    }

    #[tokio::test]
    async fn test_rating_set_and_get() {
        let repo = RatingRepository::new(setup_store());

        repo.set(21, 4).await.expect("Set failed");
        assert_eq!(repo.get(21).await.unwrap(), Some(4));
        assert_eq!(repo.get(22).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_rating_overwrites() {
        let repo = RatingRepository::new(setup_store());

        repo.set(21, 2).await.unwrap();
        repo.set(21, 5).await.unwrap();
        assert_eq!(repo.get(21).await.unwrap(), Some(5));
    }

    #[tokio::test]
    async fn test_comments_keep_insertion_order() {
        let repo = CommentRepository::new(setup_store());

        repo.append(7, "x".to_string()).await.unwrap();
        repo.append(7, "y".to_string()).await.unwrap();

        let thread = repo.for_title(7).await.unwrap();
        assert_eq!(thread, vec!["x".to_string(), "y".to_string()]);
        assert!(repo.for_title(8).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_toggle_like_twice_restores_state() {
        let repo = LikeRepository::new(setup_store());

        assert!(!repo.is_liked(3).await.unwrap());
        assert!(repo.toggle(3).await.unwrap());
        assert!(repo.is_liked(3).await.unwrap());
        assert!(!repo.toggle(3).await.unwrap());
        assert!(!repo.is_liked(3).await.unwrap());
    }

    #[tokio::test]
    async fn test_malformed_stored_value_reads_as_empty() {
        let store = setup_store();

        {
            let conn = store.lock().await;
            conn.execute(
                "INSERT INTO prefs (key, value) VALUES (?1, ?2)",
                params!["WATCHLIST_V1", "{not json"],
            )
            .unwrap();
            conn.execute(
                "INSERT INTO prefs (key, value) VALUES (?1, ?2)",
                params!["RATINGS_V1", "[1, 2, 3]"],
            )
            .unwrap();
        }

        let watchlist = WatchlistRepository::new(store.clone());
        assert!(watchlist.list().await.unwrap().is_empty());

        // Well-formed JSON of the wrong shape is also treated as absent.
        let ratings = RatingRepository::new(store);
        assert_eq!(ratings.get(1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_collections_are_independent() {
        let store = setup_store();

        // A rating and a comment may reference a title the watchlist
        // has never seen.
        RatingRepository::new(store.clone()).set(42, 3).await.unwrap();
        CommentRepository::new(store.clone()).append(42, "solid".to_string()).await.unwrap();

        let watchlist = WatchlistRepository::new(store);
        assert!(watchlist.list().await.unwrap().is_empty());
    }
}
