//! Service facade between the HTTP transport and the movie repository.

use async_trait::async_trait;
use uuid::Uuid;

use movie_db::error::DbResult;
use movie_db::models::movie::{CreateMovie, Movie, UpdateMovie};
use movie_db::repositories::MovieRepo;
use movie_db::DbPool;

/// The operations the transport layer needs, one per repository method.
///
/// Handlers depend on this trait rather than on [`MovieRepo`] directly so
/// tests can substitute an implementation with no database behind it.
#[async_trait]
pub trait MovieService: Send + Sync {
    async fn get_movie(&self, id: Uuid) -> DbResult<Movie>;
    async fn get_movies(&self) -> DbResult<Vec<Movie>>;
    async fn create_movie(&self, input: &CreateMovie) -> DbResult<Uuid>;
    async fn create_movies(&self, input: &[CreateMovie]) -> DbResult<Vec<Uuid>>;
    async fn update_movie(&self, id: Uuid, input: &UpdateMovie) -> DbResult<Movie>;
    async fn delete_movie(&self, id: Uuid) -> DbResult<bool>;
}

/// Production implementation backed by the Postgres repository.
///
/// Pure delegation: results and errors pass through unchanged.
pub struct PgMovieService {
    pool: DbPool,
}

impl PgMovieService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieService for PgMovieService {
    async fn get_movie(&self, id: Uuid) -> DbResult<Movie> {
        MovieRepo::get(&self.pool, id).await
    }

    async fn get_movies(&self) -> DbResult<Vec<Movie>> {
        MovieRepo::list(&self.pool).await
    }

    async fn create_movie(&self, input: &CreateMovie) -> DbResult<Uuid> {
        MovieRepo::create(&self.pool, input).await
    }

    async fn create_movies(&self, input: &[CreateMovie]) -> DbResult<Vec<Uuid>> {
        MovieRepo::create_many(&self.pool, input).await
    }

    async fn update_movie(&self, id: Uuid, input: &UpdateMovie) -> DbResult<Movie> {
        MovieRepo::update(&self.pool, id, input).await
    }

    async fn delete_movie(&self, id: Uuid) -> DbResult<bool> {
        MovieRepo::delete(&self.pool, id).await
    }
}
