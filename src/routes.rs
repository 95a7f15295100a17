use std::sync::Arc;

use axum::{
    Json,
    extract::{Form, FromRequest, Request, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

use crate::{
    AppState,
    entities::{movies, watched, watchlist},
    error::{AppError, AppResult},
    models::{MovieRef, NewMovie, RatingUpsert},
};

/// Body extractor accepting JSON or the legacy url-encoded form encoding.
/// Anything that fails to parse into `T` rejects with a bare 400.
pub struct JsonOrForm<T>(pub T);

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = StatusCode;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(value) =
                Form::from_request(req, state).await.map_err(|_| StatusCode::BAD_REQUEST)?;
            Ok(Self(value))
        } else {
            let Json(value) =
                Json::from_request(req, state).await.map_err(|_| StatusCode::BAD_REQUEST)?;
            Ok(Self(value))
        }
    }
}

pub async fn index() -> &'static str {
    "Hello World!"
}

pub async fn list_movies(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<Vec<movies::Model>>> {
    Ok(Json(state.store.list_movies().await?))
}

pub async fn list_watchlist(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<Vec<watchlist::Model>>> {
    Ok(Json(state.store.list_watchlist().await?))
}

pub async fn list_watched(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<Vec<watched::Model>>> {
    Ok(Json(state.store.list_watched().await?))
}

// Unlike the other routes this one reports the store error message to the
// client, which the UI displays verbatim.
pub async fn list_ratings(State(state): State<Arc<AppState>>) -> Response {
    match state.store.list_ratings().await {
        Ok(rows) => Json(rows).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to list ratings");
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Error occurred: {err}")).into_response()
        }
    }
}

pub async fn new_movie(
    State(state): State<Arc<AppState>>,
    JsonOrForm(movie): JsonOrForm<NewMovie>,
) -> AppResult<(StatusCode, Json<NewMovie>)> {
    if !movie.has_required_fields() {
        return Err(AppError::MissingFields);
    }

    if state.store.find_movie_by_title(&movie.title).await?.is_some() {
        return Err(AppError::DuplicateTitle);
    }

    state.store.insert_movie(&movie).await?;
    Ok((StatusCode::CREATED, Json(movie)))
}

pub async fn add_to_watchlist(
    State(state): State<Arc<AppState>>,
    JsonOrForm(req): JsonOrForm<MovieRef>,
) -> AppResult<(StatusCode, &'static str)> {
    state.store.add_to_watchlist(req.movie_id).await?;
    Ok((StatusCode::CREATED, "Added to watchlist"))
}

pub async fn remove_from_watchlist(
    State(state): State<Arc<AppState>>,
    JsonOrForm(req): JsonOrForm<MovieRef>,
) -> AppResult<&'static str> {
    state.store.remove_from_watchlist(req.movie_id).await?;
    Ok("Removed from watchlist")
}

pub async fn add_to_watched(
    State(state): State<Arc<AppState>>,
    JsonOrForm(req): JsonOrForm<MovieRef>,
) -> AppResult<(StatusCode, &'static str)> {
    state.store.mark_watched(req.movie_id).await?;
    Ok((StatusCode::CREATED, "Added to watched list and removed from watchlist"))
}

pub async fn remove_from_watched(
    State(state): State<Arc<AppState>>,
    JsonOrForm(req): JsonOrForm<MovieRef>,
) -> AppResult<&'static str> {
    state.store.remove_from_watched(req.movie_id).await?;
    Ok("Removed from watched list")
}

pub async fn add_update_rating(
    State(state): State<Arc<AppState>>,
    JsonOrForm(req): JsonOrForm<RatingUpsert>,
) -> AppResult<(StatusCode, &'static str)> {
    let inserted = state.store.set_rating(req.movie_id, req.rating).await?;
    if inserted {
        Ok((StatusCode::CREATED, "Rating added"))
    } else {
        Ok((StatusCode::OK, "Rating updated"))
    }
}

pub async fn remove_rating(
    State(state): State<Arc<AppState>>,
    JsonOrForm(req): JsonOrForm<MovieRef>,
) -> AppResult<&'static str> {
    state.store.remove_rating(req.movie_id).await?;
    Ok("Rating removed")
}
