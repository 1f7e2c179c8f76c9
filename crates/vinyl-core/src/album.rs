use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier of an album.
///
/// Database backends assign integer ids on insert. The in-memory backend
/// keeps whatever id the caller supplied, so ids there are opaque text.
/// On the wire the id is a bare JSON number or string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AlbumId {
    /// A backend-assigned, monotonically increasing id.
    Int(i64),
    /// A caller-supplied id, stored as-is.
    Text(String),
}

impl AlbumId {
    /// Returns `true` if this id renders exactly as `raw`.
    ///
    /// Path parameters arrive as text, so matching is exact string
    /// equality against the rendered id. No case folding or trimming.
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            AlbumId::Text(text) => text == raw,
            AlbumId::Int(value) => value.to_string() == raw,
        }
    }
}

impl Default for AlbumId {
    fn default() -> Self {
        AlbumId::Text(String::new())
    }
}

impl Display for AlbumId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlbumId::Int(value) => write!(f, "{value}"),
            AlbumId::Text(text) => f.write_str(text),
        }
    }
}

impl From<i64> for AlbumId {
    fn from(value: i64) -> Self {
        AlbumId::Int(value)
    }
}

impl From<&str> for AlbumId {
    fn from(value: &str) -> Self {
        AlbumId::Text(value.to_owned())
    }
}

impl From<String> for AlbumId {
    fn from(value: String) -> Self {
        AlbumId::Text(value)
    }
}

/// A stored album.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    pub artist: String,
    /// Not validated by any store; negative prices are kept as given.
    pub price: f64,
}

/// The payload accepted when creating an album.
///
/// `title`, `artist` and `price` must all be present. `id` is only honoured
/// by the in-memory store; database stores assign their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAlbum {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<AlbumId>,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl NewAlbum {
    pub fn new(title: impl Into<String>, artist: impl Into<String>, price: f64) -> Self {
        Self {
            id: None,
            title: title.into(),
            artist: artist.into(),
            price,
        }
    }

    pub fn with_id(mut self, id: impl Into<AlbumId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Turns the payload into a stored album with the given id.
    pub fn into_album(self, id: AlbumId) -> Album {
        Album {
            id,
            title: self.title,
            artist: self.artist,
            price: self.price,
        }
    }
}
