//! 服务器状态 - shared handles for all request handlers
//!
//! `ServerState` holds the shared references every handler needs. Cloning is
//! cheap: the database handle is internally reference counted and the
//! template registry sits behind an `Arc`.
//!
//! | Field | Type | 说明 |
//! |-------|------|------|
//! | config | `Arc<Config>` | 配置项 (不可变) |
//! | db | `Surreal<Db>` | 嵌入式数据库 |
//! | templates | `Arc<Tera>` | compiled page templates |

use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use tera::Tera;

use crate::core::Config;
use crate::db;
use crate::utils::AppError;

#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub db: Surreal<Db>,
    pub templates: Arc<Tera>,
}

impl ServerState {
    /// Initialize state for a real server: on-disk database under
    /// `config.work_dir` plus the compiled template registry.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let database = db::connect(&config.work_dir).await?;
        Ok(Self {
            config: Arc::new(config.clone()),
            db: database,
            templates: Arc::new(load_templates()?),
        })
    }

    /// State over an in-memory database, 常用于测试场景
    pub async fn in_memory() -> Result<Self, AppError> {
        let database = db::connect_memory().await?;
        Ok(Self {
            config: Arc::new(Config::with_overrides("", 0)),
            db: database,
            templates: Arc::new(load_templates()?),
        })
    }
}

fn load_templates() -> Result<Tera, AppError> {
    Tera::new(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*"))
        .map_err(|e| AppError::Template(format!("Tera initialization failed: {e}")))
}
