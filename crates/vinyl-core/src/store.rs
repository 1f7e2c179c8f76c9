use crate::album::{Album, NewAlbum};
use crate::error::Result;
use async_trait::async_trait;

/// The persistence contract for the album catalog.
///
/// A store exclusively owns the album collection; callers only go through
/// these operations. Implementations are shared across concurrently handled
/// requests, hence `Send + Sync`.
#[async_trait]
pub trait AlbumStore: Send + Sync + 'static {
    /// Short backend name, used in logs.
    fn backend(&self) -> &'static str;

    /// Returns every stored album.
    async fn list(&self) -> Result<Vec<Album>>;

    /// Retrieves the album whose id renders exactly as `id`.
    /// Returns `None` if there is no such album.
    async fn get(&self, id: &str) -> Result<Option<Album>>;

    /// Persists a new album and returns it with its id.
    async fn create(&self, album: NewAlbum) -> Result<Album>;

    /// Returns the number of stored albums.
    async fn count(&self) -> Result<u64>;

    /// Inserts `seed` in order if the store holds no albums yet.
    /// Returns `true` if seeding happened.
    ///
    /// Not safe against two processes seeding the same backend at once.
    async fn seed_if_empty(&self, seed: &[NewAlbum]) -> Result<bool> {
        if self.count().await? > 0 {
            return Ok(false);
        }

        for album in seed {
            self.create(album.clone()).await?;
        }

        Ok(true)
    }
}
