//! Handlers for the `/movies` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use movie_db::models::movie::{CreateMovie, Movie, UpdateMovie};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Earliest accepted release year.
const MIN_YEAR: i32 = 1911;

/// Response body for a single create.
#[derive(Debug, Serialize)]
pub struct CreateMovieResponse {
    pub id: Uuid,
}

/// Request body for a batch create.
#[derive(Debug, Deserialize)]
pub struct CreateMoviesRequest {
    pub movies: Vec<CreateMovie>,
}

/// Response body for a batch create. IDs are in the same order as the
/// submitted movies.
#[derive(Debug, Serialize)]
pub struct CreateMoviesResponse {
    pub ids: Vec<Uuid>,
}

/// Response body for a delete. `deleted` is `false` when no row matched.
#[derive(Debug, Serialize)]
pub struct DeleteMovieResponse {
    pub deleted: bool,
}

/// POST /api/v1/movies
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMovie>,
) -> AppResult<(StatusCode, Json<CreateMovieResponse>)> {
    validate_create(&input)?;

    let id = state.service.create_movie(&input).await?;
    Ok((StatusCode::CREATED, Json(CreateMovieResponse { id })))
}

/// POST /api/v1/movies/batch
///
/// Creates all submitted movies or none of them; the returned ids match
/// the input order.
pub async fn create_batch(
    State(state): State<AppState>,
    Json(input): Json<CreateMoviesRequest>,
) -> AppResult<(StatusCode, Json<CreateMoviesResponse>)> {
    if input.movies.is_empty() {
        return Err(AppError::Validation("movies must not be empty".into()));
    }
    for movie in &input.movies {
        validate_create(movie)?;
    }

    let ids = state.service.create_movies(&input.movies).await?;
    Ok((StatusCode::CREATED, Json(CreateMoviesResponse { ids })))
}

/// GET /api/v1/movies
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Movie>>> {
    let movies = state.service.get_movies().await?;
    Ok(Json(movies))
}

/// GET /api/v1/movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Movie>> {
    let movie = state.service.get_movie(id).await?;
    Ok(Json(movie))
}

/// PUT /api/v1/movies/{id}
///
/// Partial update: omitted fields are left unchanged. Returns the full
/// updated movie.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateMovie>,
) -> AppResult<Json<Movie>> {
    validate_update(&input)?;

    let movie = state.service.update_movie(id, &input).await?;
    Ok(Json(movie))
}

/// DELETE /api/v1/movies/{id}
///
/// Deleting an ID that does not exist is a successful no-op; the response
/// body reports whether a row was actually removed.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<DeleteMovieResponse>> {
    let deleted = state.service.delete_movie(id).await?;
    Ok(Json(DeleteMovieResponse { deleted }))
}

fn validate_create(input: &CreateMovie) -> Result<(), AppError> {
    if input.title.trim().is_empty() {
        return Err(AppError::Validation("title must not be empty".into()));
    }
    if input.genre.trim().is_empty() {
        return Err(AppError::Validation("genre must not be empty".into()));
    }
    if input.director.trim().is_empty() {
        return Err(AppError::Validation("director must not be empty".into()));
    }
    validate_year(input.year)
}

fn validate_update(input: &UpdateMovie) -> Result<(), AppError> {
    if matches!(&input.title, Some(t) if t.trim().is_empty()) {
        return Err(AppError::Validation("title must not be empty".into()));
    }
    if matches!(&input.genre, Some(g) if g.trim().is_empty()) {
        return Err(AppError::Validation("genre must not be empty".into()));
    }
    if matches!(&input.director, Some(d) if d.trim().is_empty()) {
        return Err(AppError::Validation("director must not be empty".into()));
    }
    if let Some(year) = input.year {
        validate_year(year)?;
    }
    Ok(())
}

fn validate_year(year: i32) -> Result<(), AppError> {
    if year < MIN_YEAR {
        return Err(AppError::Validation(format!(
            "year must be {MIN_YEAR} or later"
        )));
    }
    Ok(())
}
