//! Storage backends for the Vinyl album catalog.
//!
//! Every backend implements [`AlbumStore`]; the gateway picks one at
//! startup.

pub mod memory;
pub mod mysql;
pub mod sqlite;
mod sql;

pub use memory::InMemoryStore;
pub use mysql::MySqlStore;
pub use sqlite::SqliteStore;
pub use vinyl_core::{AlbumStore, Result, StoreError};
