//! HTTP gateway for the Vinyl album catalog.
//!
//! Exposes the album store over a small JSON API:
//!
//! - `GET /albums` lists every album
//! - `GET /albums/{id}` fetches one album
//! - `POST /albums` creates an album

pub mod app;
pub mod error;
pub mod handlers;
pub mod json;
pub mod model;
pub mod state;

pub use app::App;
pub use state::AppState;
