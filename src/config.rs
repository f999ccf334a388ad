//! Configuration Module
//!
//! # Interview Q&A
//!
//! Q: 포트를 CLI 플래그가 아닌 환경변수로 받는 이유는?
//! A: 프로세스 시작 시 한 번 고정되면 충분
//!    - `.env` 파일 또는 컨테이너 환경에서 주입
//!    - 실행 인자 파싱 코드가 필요 없음
//!
//! Q: 설정 검증은 어떻게 하는가?
//! A: from_env()에서 숫자 값 파싱 → 실패하면 즉시 종료 (fail-fast)

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// 애플리케이션 설정
#[derive(Debug, Clone)]
pub struct Config {
    /// 서버 포트 (기본값: 3000)
    pub port: u16,

    /// SQLite 데이터베이스 파일 경로
    pub database_path: PathBuf,

    /// 커넥션 수 (기본값: 1, 프로세스 수명 동안 재사용되는 단일 커넥션)
    pub database_max_connections: u32,

    /// 프로덕션 CORS 허용 origin 목록
    pub allowed_origins: Vec<String>,

    /// 환경 (development, staging, production)
    pub environment: Environment,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Config {
    /// 환경변수에서 설정 로드
    ///
    /// # Optional Environment Variables
    ///
    /// - `PORT`: 서버 포트 (기본값: 3000)
    /// - `DATABASE_PATH`: SQLite 파일 경로 (기본값: ./database/peliculas.db)
    /// - `DATABASE_MAX_CONNECTIONS`: 커넥션 수 (기본값: 1)
    /// - `ALLOWED_ORIGINS`: 콤마로 구분된 origin 목록
    /// - `ENVIRONMENT`: development | staging | production
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 키 조회 함수로부터 설정 생성 (없는 키는 기본값)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let environment = match var("ENVIRONMENT", "development")
            .to_lowercase()
            .as_str()
        {
            "production" => Environment::Production,
            "staging" => Environment::Staging,
            _ => Environment::Development,
        };

        Ok(Config {
            port: var("PORT", "3000")
                .parse()
                .context("PORT must be a valid number")?,

            database_path: var("DATABASE_PATH", "./database/peliculas.db").into(),

            database_max_connections: var("DATABASE_MAX_CONNECTIONS", "1")
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a valid number")?,

            allowed_origins: lookup("ALLOWED_ORIGINS")
                .map(|origins| parse_origins(&origins))
                .unwrap_or_default(),

            environment,
        })
    }

    /// 프로덕션 환경인지 확인
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
