//! Pieces shared by the SQL backends.

use vinyl_core::{Album, AlbumId, StoreError};

pub(crate) const SELECT_ALBUMS: &str = "SELECT id, title, artist, price FROM albums";
pub(crate) const SELECT_ALBUM_BY_ID: &str =
    "SELECT id, title, artist, price FROM albums WHERE id = ?";
pub(crate) const INSERT_ALBUM: &str = "INSERT INTO albums (title, artist, price) VALUES (?, ?, ?)";
pub(crate) const COUNT_ALBUMS: &str = "SELECT COUNT(*) FROM albums";

/// One row of the `albums` table.
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct AlbumRow {
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl From<AlbumRow> for Album {
    fn from(row: AlbumRow) -> Self {
        Album {
            id: AlbumId::Int(row.id),
            title: row.title,
            artist: row.artist,
            price: row.price,
        }
    }
}

/// Parses a path id into a row id.
///
/// Rows only ever have integer ids, so anything else cannot match. The id
/// must also be the canonical rendering of that integer: `"01"` or `"+1"`
/// do not name row 1.
pub(crate) fn parse_row_id(id: &str) -> Option<i64> {
    id.parse()
        .ok()
        .filter(|row_id: &i64| row_id.to_string() == id)
}

pub(crate) fn count_from_row(count: i64) -> Result<u64, StoreError> {
    u64::try_from(count)
        .map_err(|_| StoreError::InvalidData(format!("negative album count: {count}")))
}

pub(crate) fn map_sqlx_error(err: sqlx::Error) -> StoreError {
    let message = err.to_string();

    match err {
        sqlx::Error::PoolTimedOut => StoreError::Timeout(message),
        sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StoreError::Unavailable(message),
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::RowNotFound => StoreError::InvalidData(message),
        _ => StoreError::Query(message),
    }
}
