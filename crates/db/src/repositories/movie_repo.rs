//! Repository for the `movies` table.

use sqlx::{PgPool, Postgres, QueryBuilder, Transaction};
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use crate::models::movie::{CreateMovie, Movie, UpdateMovie};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, genre, director, year";

/// Rows per INSERT statement when creating movies in bulk. Bounds the
/// statement's bind-parameter count; atomicity comes from the surrounding
/// transaction, not the chunk size.
pub const INSERT_CHUNK_SIZE: usize = 50;

/// Provides CRUD operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Fetch a movie by ID.
    ///
    /// Fails with [`DbError::NotFound`] when no row matches.
    pub async fn get(pool: &PgPool, id: Uuid) -> DbResult<Movie> {
        const OP: &str = "movie_repo.get";

        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| DbError::storage(OP, e))?
            .ok_or(DbError::NotFound { id })
    }

    /// List all movies, in storage order. No pagination; callers must not
    /// rely on any particular ordering.
    pub async fn list(pool: &PgPool) -> DbResult<Vec<Movie>> {
        const OP: &str = "movie_repo.list";

        let query = format!("SELECT {COLUMNS} FROM movies");
        sqlx::query_as::<_, Movie>(&query)
            .fetch_all(pool)
            .await
            .map_err(|e| DbError::storage(OP, e))
    }

    /// Insert a single movie, returning the database-generated ID.
    pub async fn create(pool: &PgPool, input: &CreateMovie) -> DbResult<Uuid> {
        const OP: &str = "movie_repo.create";

        sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO movies (title, genre, director, year)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(&input.title)
        .bind(&input.genre)
        .bind(&input.director)
        .bind(input.year)
        .fetch_one(pool)
        .await
        .map_err(|e| DbError::storage(OP, e))
    }

    /// Insert many movies atomically, returning generated IDs in input order.
    ///
    /// The whole batch is one transaction: either every row is committed or
    /// none are. Rows are submitted in chunks of [`INSERT_CHUNK_SIZE`]; a
    /// failed chunk rolls the entire batch back before the error is
    /// returned, and a rollback failure surfaces as
    /// [`DbError::RollbackFailed`] with both errors attached.
    pub async fn create_many(pool: &PgPool, movies: &[CreateMovie]) -> DbResult<Vec<Uuid>> {
        const OP: &str = "movie_repo.create_many";

        if movies.is_empty() {
            return Ok(Vec::new());
        }

        let mut tx = pool.begin().await.map_err(|e| DbError::storage(OP, e))?;

        let mut ids = Vec::with_capacity(movies.len());
        for chunk in movies.chunks(INSERT_CHUNK_SIZE) {
            match Self::insert_chunk(&mut tx, chunk).await {
                Ok(chunk_ids) => ids.extend(chunk_ids),
                Err(err) => return Err(Self::rollback(tx, OP, err).await),
            }
        }

        tx.commit().await.map_err(|e| DbError::storage(OP, e))?;
        Ok(ids)
    }

    /// Insert one chunk with a multi-row VALUES clause, returning generated
    /// IDs in insertion order.
    async fn insert_chunk(
        tx: &mut Transaction<'_, Postgres>,
        chunk: &[CreateMovie],
    ) -> Result<Vec<Uuid>, sqlx::Error> {
        let mut builder =
            QueryBuilder::<Postgres>::new("INSERT INTO movies (title, genre, director, year) ");
        builder.push_values(chunk, |mut row, movie| {
            row.push_bind(&movie.title)
                .push_bind(&movie.genre)
                .push_bind(&movie.director)
                .push_bind(movie.year);
        });
        builder.push(" RETURNING id");

        builder.build_query_scalar::<Uuid>().fetch_all(&mut **tx).await
    }

    /// Roll the transaction back after a failed chunk and fold the outcome
    /// into the error that will propagate.
    async fn rollback(
        tx: Transaction<'_, Postgres>,
        op: &'static str,
        source: sqlx::Error,
    ) -> DbError {
        match tx.rollback().await {
            Ok(()) => DbError::Storage { op, source },
            Err(rollback_source) => {
                tracing::warn!(error = %rollback_source, "rollback failed after batch insert error");
                DbError::RollbackFailed {
                    op,
                    source,
                    rollback_source,
                }
            }
        }
    }

    /// Update a movie. Only non-`None` fields in `input` are applied; an
    /// input with no fields set is a valid no-op that returns the row
    /// unchanged.
    ///
    /// Fails with [`DbError::NotFound`] when no row matches.
    pub async fn update(pool: &PgPool, id: Uuid, input: &UpdateMovie) -> DbResult<Movie> {
        const OP: &str = "movie_repo.update";

        let query = format!(
            "UPDATE movies SET
                title = COALESCE($2, title),
                genre = COALESCE($3, genre),
                director = COALESCE($4, director),
                year = COALESCE($5, year)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.genre)
            .bind(&input.director)
            .bind(input.year)
            .fetch_optional(pool)
            .await
            .map_err(|e| DbError::storage(OP, e))?
            .ok_or(DbError::NotFound { id })
    }

    /// Delete a movie by ID. Returns `true` if a row was removed; deleting
    /// an ID that does not exist is a no-op, not an error.
    pub async fn delete(pool: &PgPool, id: Uuid) -> DbResult<bool> {
        const OP: &str = "movie_repo.delete";

        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| DbError::storage(OP, e))?;
        Ok(result.rows_affected() > 0)
    }
}
