use crate::sql::{
    count_from_row, map_sqlx_error, parse_row_id, AlbumRow, COUNT_ALBUMS, INSERT_ALBUM,
    SELECT_ALBUMS, SELECT_ALBUM_BY_ID,
};
use async_trait::async_trait;
use sqlx::MySqlPool;
use tracing::debug;
use vinyl_core::{Album, AlbumId, AlbumStore, NewAlbum, Result, StoreError};

/// MySQL implementation of [`AlbumStore`].
///
/// Expects an existing `albums` table (see `ddl/mysql/albums.sql`) whose
/// `id` column is `AUTO_INCREMENT`. Concurrent access is left to the
/// server; no statement here spans a transaction.
#[derive(Debug, Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    /// Creates a store from an existing MySQL connection pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Creates a store by opening a new MySQL connection pool.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = MySqlPool::connect(database_url)
            .await
            .map_err(map_sqlx_error)?;
        Ok(Self::new(pool))
    }

    /// Returns a reference to the underlying pool.
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

#[async_trait]
impl AlbumStore for MySqlStore {
    fn backend(&self) -> &'static str {
        "mysql"
    }

    async fn list(&self) -> Result<Vec<Album>> {
        let rows = sqlx::query_as::<_, AlbumRow>(SELECT_ALBUMS)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(Album::from).collect())
    }

    async fn get(&self, id: &str) -> Result<Option<Album>> {
        let Some(row_id) = parse_row_id(id) else {
            debug!(id, "album id is not an integer");
            return Ok(None);
        };

        let row = sqlx::query_as::<_, AlbumRow>(SELECT_ALBUM_BY_ID)
            .bind(row_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(Album::from))
    }

    async fn create(&self, album: NewAlbum) -> Result<Album> {
        let result = sqlx::query(INSERT_ALBUM)
            .bind(&album.title)
            .bind(&album.artist)
            .bind(album.price)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        let id = i64::try_from(result.last_insert_id()).map_err(|_| {
            StoreError::InvalidData(format!(
                "assigned id {} does not fit a signed integer",
                result.last_insert_id()
            ))
        })?;

        Ok(album.into_album(AlbumId::Int(id)))
    }

    async fn count(&self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar(COUNT_ALBUMS)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        count_from_row(count)
    }
}
