//! Movie entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A movie row from the `movies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    /// Generated by the database at insert time; immutable afterwards.
    pub id: Uuid,
    pub title: String,
    pub genre: String,
    pub director: String,
    /// Release year. INTEGER in the database.
    pub year: i32,
}

/// DTO for creating a new movie. The id is never caller-supplied.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMovie {
    pub title: String,
    pub genre: String,
    pub director: String,
    pub year: i32,
}

/// DTO for updating an existing movie. Only non-`None` fields are applied;
/// `None` always means "leave unchanged", so an explicit value is
/// distinguishable from an absent one.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMovie {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub director: Option<String>,
    pub year: Option<i32>,
}
