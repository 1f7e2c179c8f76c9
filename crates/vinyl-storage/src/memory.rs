use async_trait::async_trait;
use parking_lot::RwLock;
use vinyl_core::{Album, AlbumStore, NewAlbum, Result};

/// In-memory implementation of [`AlbumStore`] backed by an ordered `Vec`.
///
/// Ids are whatever the caller supplied on create; a missing id is stored as
/// the empty string. Ids are not checked for uniqueness, so two albums can
/// share one, and [`AlbumStore::get`] then returns the first inserted.
///
/// Writers take the lock exclusively, so concurrent creates never lose an
/// append.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    albums: RwLock<Vec<Album>>,
}

impl InMemoryStore {
    /// Creates a new, empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new in-memory store with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            albums: RwLock::new(Vec::with_capacity(capacity)),
        }
    }
}

#[async_trait]
impl AlbumStore for InMemoryStore {
    fn backend(&self) -> &'static str {
        "in-memory"
    }

    async fn list(&self) -> Result<Vec<Album>> {
        Ok(self.albums.read().clone())
    }

    async fn get(&self, id: &str) -> Result<Option<Album>> {
        let albums = self.albums.read();
        Ok(albums.iter().find(|album| album.id.matches(id)).cloned())
    }

    async fn create(&self, album: NewAlbum) -> Result<Album> {
        let id = album.id.clone().unwrap_or_default();
        let album = album.into_album(id);

        self.albums.write().push(album.clone());
        Ok(album)
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.albums.read().len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use vinyl_core::{seed_albums, AlbumId};

    fn album(id: &str, title: &str) -> NewAlbum {
        NewAlbum::new(title, "Some Artist", 9.99).with_id(id)
    }

    #[tokio::test]
    async fn create_and_get() {
        let store = InMemoryStore::new();

        let created = store.create(album("4", "Giant Steps")).await.unwrap();
        assert_eq!(created.id, AlbumId::Text("4".to_string()));

        let result = store.get("4").await.unwrap().unwrap();
        assert_eq!(result, created);
    }

    #[tokio::test]
    async fn get_nonexistent() {
        let store = InMemoryStore::new();

        assert!(store.get("999").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn get_is_exact_match() {
        let store = InMemoryStore::new();
        store.create(album("abc", "Giant Steps")).await.unwrap();

        assert!(store.get("ABC").await.unwrap().is_none());
        assert!(store.get("ab").await.unwrap().is_none());
        assert!(store.get("abc").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn list_keeps_insertion_order() {
        let store = InMemoryStore::new();
        store.seed_if_empty(&seed_albums()).await.unwrap();
        store.create(album("4", "Giant Steps")).await.unwrap();

        let ids: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|album| album.id.to_string())
            .collect();
        assert_eq!(ids, ["1", "2", "3", "4"]);
    }

    #[tokio::test]
    async fn duplicate_ids_are_accepted_and_first_wins() {
        let store = InMemoryStore::new();
        store.create(album("1", "First")).await.unwrap();
        store.create(album("1", "Second")).await.unwrap();

        assert_eq!(store.count().await.unwrap(), 2);
        assert_eq!(store.get("1").await.unwrap().unwrap().title, "First");
    }

    #[tokio::test]
    async fn missing_id_becomes_empty_text() {
        let store = InMemoryStore::new();

        let created = store
            .create(NewAlbum::new("Untitled", "Nobody", 1.0))
            .await
            .unwrap();
        assert_eq!(created.id, AlbumId::Text(String::new()));
    }

    #[tokio::test]
    async fn negative_price_is_kept() {
        let store = InMemoryStore::new();

        let created = store
            .create(NewAlbum::new("Refund", "Nobody", -5.0).with_id("x"))
            .await
            .unwrap();
        assert_eq!(created.price, -5.0);
    }

    #[tokio::test]
    async fn seed_only_once() {
        let store = InMemoryStore::new();

        assert!(store.seed_if_empty(&seed_albums()).await.unwrap());
        assert!(!store.seed_if_empty(&seed_albums()).await.unwrap());
        assert_eq!(store.list().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn concurrent_creates() {
        let store = Arc::new(InMemoryStore::with_capacity(10));
        let mut handles = vec![];

        for i in 0..10u64 {
            let store = Arc::clone(&store);
            let handle = tokio::spawn(async move {
                let id = format!("album-{:03}", i);
                store
                    .create(NewAlbum::new(format!("Title {i}"), "Artist", 1.0).with_id(id))
                    .await
                    .unwrap();
            });
            handles.push(handle);
        }

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.count().await.unwrap(), 10);
        for i in 0..10u64 {
            let result = store.get(&format!("album-{:03}", i)).await.unwrap().unwrap();
            assert_eq!(result.title, format!("Title {i}"));
        }
    }
}
