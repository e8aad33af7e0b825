//! Database Module
//!
//! Embedded SurrealDB storage: connection setup plus the models and
//! repositories built on top of it.

pub mod models;
pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

use crate::utils::AppError;

const NAMESPACE: &str = "confiserie";
const DATABASE: &str = "catalog";

/// Open the on-disk database under the working directory
pub async fn connect(work_dir: &str) -> Result<Surreal<Db>, AppError> {
    let path = format!("{work_dir}/catalog.db");
    let db = Surreal::new::<RocksDb>(path.as_str())
        .await
        .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
    setup(&db).await?;
    tracing::info!(path = %path, "Database connection established");
    Ok(db)
}

/// Open an in-memory database, 常用于测试场景
pub async fn connect_memory() -> Result<Surreal<Db>, AppError> {
    let db = Surreal::new::<Mem>(())
        .await
        .map_err(|e| AppError::database(format!("Failed to open in-memory database: {e}")))?;
    setup(&db).await?;
    Ok(db)
}

async fn setup(db: &Surreal<Db>) -> Result<(), AppError> {
    db.use_ns(NAMESPACE)
        .use_db(DATABASE)
        .await
        .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;
    define_schema(db).await
}

/// Declare the tables up front. SurrealDB is schemaless by default; the
/// DEFINE statements make the catalog tables explicit and idempotent.
async fn define_schema(db: &Surreal<Db>) -> Result<(), AppError> {
    db.query(
        "DEFINE TABLE IF NOT EXISTS candy SCHEMALESS;
         DEFINE TABLE IF NOT EXISTS manufacturer SCHEMALESS;
         DEFINE TABLE IF NOT EXISTS counter SCHEMALESS;",
    )
    .await
    .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?;
    Ok(())
}
