//! Confiserie - candy catalog server
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── core/      # 配置、状态、HTTP 服务器
//! ├── db/        # 嵌入式 SurrealDB 存储 (models + repositories)
//! ├── forms/     # declared form schemas + validation engine
//! ├── api/       # JSON API (candies, manufacturers, admin)
//! ├── web/       # HTML pages (tera templates, flash messages)
//! └── utils/     # 错误类型、日志
//! ```
//!
//! The HTML surface mirrors the catalog pages (`/view_all`, `/view_one/{id}`,
//! `/formulaire`); the JSON surface under `/api` exposes per-entity CRUD and
//! the administrative browse/bulk-edit operations.

pub mod api;
pub mod core;
pub mod db;
pub mod forms;
pub mod utils;
pub mod web;

// Re-export 公共类型
pub use core::{Config, Server, ServerState};
pub use utils::logger::init_logger;
pub use utils::{AppError, AppResult};
