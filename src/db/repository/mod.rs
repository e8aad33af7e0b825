//! Repository Module
//!
//! CRUD operations over the embedded SurrealDB tables.
//!
//! Record ids are numeric (`candy:1`, `manufacturer:3`) so that page URLs
//! can be integer-keyed; they are allocated from the `counter` table with an
//! atomic UPSERT increment.

pub mod candy;
pub mod manufacturer;

pub use candy::CandyRepository;
pub use manufacturer::ManufacturerRepository;

use serde::Deserialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use surrealdb::sql::{Id, Thing};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Common repository trait for basic CRUD
#[allow(async_fn_in_trait)]
pub trait Repository<T, CreateDto, UpdateDto> {
    async fn find_all(&self) -> RepoResult<Vec<T>>;
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<T>>;
    async fn create(&self, data: CreateDto) -> RepoResult<T>;
    async fn update(&self, id: i64, data: UpdateDto) -> RepoResult<T>;
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

/// Build a record pointer for a numeric id
pub fn make_thing(table: &str, id: i64) -> Thing {
    Thing::from((table.to_string(), Id::from(id)))
}

/// Extract the numeric key from a record pointer (0 if non-numeric)
pub fn numeric_id(thing: &Thing) -> i64 {
    match &thing.id {
        Id::Number(n) => *n,
        other => other.to_string().parse().unwrap_or(0),
    }
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }

    /// Allocate the next numeric id for a table
    pub async fn next_id(&self, table: &str) -> RepoResult<i64> {
        #[derive(Deserialize)]
        struct Counter {
            n: i64,
        }

        let mut result = self
            .db
            .query("UPSERT type::thing('counter', $table) SET n += 1 RETURN AFTER")
            .bind(("table", table.to_string()))
            .await?;
        let counters: Vec<Counter> = result.take(0)?;
        counters
            .first()
            .map(|c| c.n)
            .ok_or_else(|| RepoError::Database(format!("Counter increment failed for {table}")))
    }
}
