use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    create_album_handler, get_album_handler, health_handler, list_albums_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route(
                "/albums",
                get(list_albums_handler).post(create_album_handler),
            )
            .route("/albums/{id}", get(get_album_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
