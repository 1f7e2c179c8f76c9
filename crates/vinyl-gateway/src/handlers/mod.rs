mod album;
mod health;

pub use album::{create_album_handler, get_album_handler, list_albums_handler};
pub use health::health_handler;
