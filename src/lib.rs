//! Movies API Library
//!
//! # Overview
//!
//! 영화 / 감독 / 장르 세 엔티티에 대한 CRUD HTTP API.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                         API                              │
//! │                                                          │
//! │  ┌─────────┐   ┌─────────┐   ┌─────────┐   ┌─────────┐  │
//! │  │ Routes  │──▶│Handlers │──▶│   DB    │   │  Error  │  │
//! │  └─────────┘   └─────────┘   └────┬────┘   └─────────┘  │
//! │                                   │                      │
//! └───────────────────────────────────┼──────────────────────┘
//!                                     ▼
//!                         ┌──────────────────────┐
//!                         │ SQLite (peliculas.db)│
//!                         └──────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `config`: 환경 설정 관리
//! - `error`: 에러 타입, 에러 바운더리
//! - `routes`: 라우터 및 HTTP 핸들러
//! - `db`: 데이터베이스 연동 (파라미터 바인딩 쿼리)
//! - `types`: 공통 응답 타입
//!
//! ## Usage
//!
//! ```rust,ignore
//! use movies_api::{config::Config, db::Database, routes::create_router};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let db = Database::open(&config.database_path, 1).await?;
//!     db.init_schema().await?;
//!
//!     // ... 서버 시작
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

pub mod config;
pub mod db;
pub mod error;
pub mod routes;
pub mod types;

// Re-exports for convenience
pub use config::Config;
pub use db::Database;
pub use error::ApiError;

/// 애플리케이션 상태
///
/// 저장소 핸들은 시작 시 한 번 생성되어 모든 핸들러에 주입됨
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub config: Arc<Config>,
}
