//! Core types and traits for the Vinyl album catalog.
//!
//! This crate provides the album model and the store contract shared by
//! every storage backend and by the HTTP gateway.

pub mod album;
pub mod error;
pub mod seed;
pub mod store;

pub use album::{Album, AlbumId, NewAlbum};
pub use error::{Result, StoreError};
pub use seed::seed_albums;
pub use store::AlbumStore;
