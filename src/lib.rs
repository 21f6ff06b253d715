//! LSRC 설정 로더
//!
//! Listen.Sound.Reflect.Create 웹 앱의 설정을 읽고, 병합하고, 검증하는 라이브러리입니다.
//! Supabase 접속 정보, Telegram 봇 토큰, 배포 URL, 오디오 업로드 제한,
//! 기능 플래그를 하나의 불변 [`AppConfig`] 로 제공합니다.
//!
//! # Features
//!
//! - **Environment Reader**: dotenv 형식 리소스를 파일 또는 HTTP 로 조회, 실패해도 중단하지 않음
//! - **Config Merger**: 환경 변수를 내장 기본값 위에 필드 단위로 병합
//! - **Validator**: 필수 필드가 placeholder 로 남아 있는지 검사
//! - **CORS 연동**: 보안 설정을 `actix_cors::Cors` 로 변환
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   EnvSource     │ ← 파일 / HTTP
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Env Reader     │ ← KEY=VALUE 파싱
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Config Merger  │ ← DEFAULT_CONFIG 병합
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Validator     │ ← placeholder 검사
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use lsrc_config::{initialize_config, validate_config, FileEnvSource};
//!
//! let config = initialize_config(&FileEnvSource::current_dir(), ".env").await;
//! let report = validate_config(&config);
//! if !report.is_valid {
//!     for error in &report.errors {
//!         log::warn!("{}", error);
//!     }
//! }
//! ```

pub mod config;
pub mod errors;
pub mod middlewares;
pub mod utils;

pub use config::{
    AppConfig, DEFAULT_CONFIG, EnvSource, EnvVars, FileEnvSource, HttpEnvSource,
    ValidationReport, get_config, initialize_config, load_env_variables, validate_config,
    validate_default_config,
};
pub use errors::{AppError, AppResult};
