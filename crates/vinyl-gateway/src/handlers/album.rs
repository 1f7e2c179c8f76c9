use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;
use vinyl_core::{Album, NewAlbum};

use crate::error::{AppError, Result};
use crate::json::PrettyJson;
use crate::state::AppState;

pub async fn list_albums_handler(State(state): State<AppState>) -> Result<PrettyJson<Vec<Album>>> {
    let albums = state
        .store()
        .list()
        .await
        .map_err(|source| AppError::store("Failed to query albums", source))?;

    Ok(PrettyJson::ok(albums))
}

pub async fn get_album_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<PrettyJson<Album>> {
    let album = state
        .store()
        .get(&id)
        .await
        .map_err(|source| AppError::store_indented("Failed to query album", source))?
        .ok_or(AppError::NotFound)?;

    Ok(PrettyJson::ok(album))
}

pub async fn create_album_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<NewAlbum>, JsonRejection>,
) -> Result<(StatusCode, Json<Album>)> {
    let Json(request) = payload?;

    let album = state
        .store()
        .create(request)
        .await
        .map_err(|source| AppError::store("Failed to insert album", source))?;

    info!(id = %album.id, title = %album.title, "created album");
    Ok((StatusCode::CREATED, Json(album)))
}
