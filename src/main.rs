//! Movies API Server
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                  Client                       │
//! └──────────────────────────────────────────────┘
//!                       │
//!                       ▼
//! ┌──────────────────────────────────────────────┐
//! │               Axum Web Server                 │
//! │   /movies/*   /directors/*   /genres/*        │
//! │   Trace → CORS → CatchPanic (error boundary)  │
//! └──────────────────────────────────────────────┘
//!                       │
//!                       ▼
//! ┌──────────────────────────────────────────────┐
//! │        SQLite (./database/peliculas.db)       │
//! └──────────────────────────────────────────────┘
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use movies_api::{routes, AppState, Config, Database};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 환경변수 로드
    dotenvy::dotenv().ok();

    // 로깅 초기화
    // RUST_LOG=debug,sqlx=warn 형태로 레벨 제어 가능
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movies_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Movies API Server");

    // 설정 로드
    let config = Config::from_env()?;
    tracing::info!(?config, "Configuration loaded");

    // 데이터베이스 연결
    let db = Database::open(&config.database_path, config.database_max_connections).await?;
    tracing::info!(path = %config.database_path.display(), "Database connected");

    // 테이블 생성 (이미 있으면 건너뜀)
    db.init_schema().await?;
    tracing::info!("Schema ready");

    let state = AppState {
        db: Arc::new(db),
        config: Arc::new(config.clone()),
    };

    let app = routes::create_router(state);

    // 서버 시작
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
