use crate::sql::{
    count_from_row, map_sqlx_error, parse_row_id, AlbumRow, COUNT_ALBUMS, INSERT_ALBUM,
    SELECT_ALBUMS, SELECT_ALBUM_BY_ID,
};
use async_trait::async_trait;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::debug;
use vinyl_core::{Album, AlbumId, AlbumStore, NewAlbum, Result};

/// Embedded SQLite implementation of [`AlbumStore`].
///
/// Expects an existing `albums` table (see `ddl/sqlite/albums.sql`). Ids are
/// assigned by SQLite on insert.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Creates a store from an existing SQLite connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens the database at `database_url`, creating the file if it does
    /// not exist, and checks that it answers.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(map_sqlx_error)?
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(options)
            .await
            .map_err(map_sqlx_error)?;

        sqlx::query("SELECT 1")
            .execute(&pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(Self::new(pool))
    }

    /// Returns a reference to the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl AlbumStore for SqliteStore {
    fn backend(&self) -> &'static str {
        "sqlite"
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

        Ok(album.into_album(AlbumId::Int(result.last_insert_rowid())))
    }

    async fn count(&self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar(COUNT_ALBUMS)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        count_from_row(count)
    }
}
