//! Database Module
//!
//! # Interview Q&A
//!
//! Q: 왜 SQLite인가?
//! A: 단일 프로세스, 단일 파일 저장소로 충분한 규모
//!    - 별도 DB 서버 불필요
//!    - 파일 하나로 백업/이동
//!    - SQLx로 비동기 접근 (요청별 non-blocking)
//!
//! Q: 외래 키 제약을 끄는 이유는?
//! A: 기존 데이터 동작과의 호환
//!    - 쓰기 시 director_id / genre_id 존재 여부를 확인하지 않음
//!    - 감독/장르 삭제 시 영화는 그대로 남음 (dangling reference)
//!    - 읽기 경로(INNER JOIN)가 매칭되지 않는 행을 건너뜀
//!
//! Q: 커넥션은 어떻게 관리하는가?
//! A: 시작 시 한 번 열고 프로세스 종료까지 재사용
//!    - 기본 max_connections = 1
//!    - 모든 쿼리는 `?` 파라미터 바인딩 (문자열 조합 없음)

mod directors;
mod genres;
mod models;
mod movies;

pub use models::*;

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};

/// 저장소 연산 결과 (에러는 드라이버 에러 그대로 전달)
pub type StoreResult<T> = std::result::Result<T, sqlx::Error>;

const CREATE_DIRECTORS: &str = r#"
    CREATE TABLE IF NOT EXISTS directors (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL
    )
"#;

const CREATE_GENRES: &str = r#"
    CREATE TABLE IF NOT EXISTS genres (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL
    )
"#;

const CREATE_MOVIES: &str = r#"
    CREATE TABLE IF NOT EXISTS movies (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        director_id INTEGER REFERENCES directors (id),
        genre_id INTEGER REFERENCES genres (id),
        score REAL,
        rating TEXT,
        release_year INTEGER
    )
"#;

/// 커넥션 대기 상한 (사실상 무제한, 느린 쿼리 뒤에서도 요청이 실패하지 않음)
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(60 * 60 * 24 * 365);

/// 커넥션 풀 설정
///
/// 시작 시 연 커넥션을 프로세스 종료까지 유지: idle/lifetime 만료 없음
fn pool_options(max_connections: u32) -> SqlitePoolOptions {
    SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .min_connections(1)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .idle_timeout(None)
        .max_lifetime(None)
}

/// 데이터베이스 연결 및 쿼리 담당
///
/// 핸들러에는 `AppState`를 통해 주입됨 (전역 싱글톤 없음)
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// 파일 기반 데이터베이스 열기
    ///
    /// 상위 디렉터리와 파일이 없으면 생성
    pub async fn open(path: &Path, max_connections: u32) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(false);

        let pool = pool_options(max_connections)
            .connect_with(options)
            .await
            .with_context(|| format!("failed to open database at {}", path.display()))?;

        Ok(Self { pool })
    }

    /// 인메모리 데이터베이스 (테스트용)
    ///
    /// `sqlite::memory:`는 커넥션마다 별도 DB이므로 커넥션 1개를 만료 없이 유지
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(false);

        let pool = pool_options(1).connect_with(options).await?;

        Ok(Self { pool })
    }

    /// 테이블 생성 (멱등)
    ///
    /// movies는 다른 두 테이블을 참조하므로 마지막에 생성
    pub async fn init_schema(&self) -> Result<()> {
        for statement in [CREATE_DIRECTORS, CREATE_GENRES, CREATE_MOVIES] {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .context("failed to create tables")?;
        }
        Ok(())
    }
}
