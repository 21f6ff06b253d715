//! # Configuration Module
//!
//! LSRC 웹 앱의 설정 로딩, 병합, 검증을 담당하는 모듈입니다.
//!
//! ## 처리 흐름
//!
//! ```text
//! EnvSource (파일 / HTTP)
//!        │  fetch_text(".env")
//!        ▼
//! ┌──────────────────┐
//! │ Environment      │ ← 실패 시 경고 로그 + 빈 맵
//! │ Reader           │
//! └──────────────────┘
//!        │  EnvVars
//!        ▼
//! ┌──────────────────┐
//! │ Config Merger    │ ← DEFAULT_CONFIG 위에 필드 단위 병합
//! └──────────────────┘
//!        │  AppConfig
//!        ▼
//! ┌──────────────────┐
//! │ Validator        │ ← placeholder 검사, 결과는 데이터
//! └──────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - [`app_config`] - 설정 구조체와 기본값 ([`DEFAULT_CONFIG`])
//! - [`env_source`] - env 리소스 조회 추상화 ([`EnvSource`])
//! - [`env_loader`] - dotenv 파싱과 초기화 ([`load_env_variables`], [`initialize_config`])
//! - [`merger`] - 환경 변수 병합 ([`get_config`])
//! - [`validator`] - 필수 필드 검증 ([`validate_config`])
//! - [`profile`] - `PROFILE` 기반 리소스 선택 ([`EnvProfile`])
//!
//! ## 환경 변수 설정 가이드
//!
//! ### 필수 환경 변수 (배포 전)
//!
//! ```bash
//! SUPABASE_URL=https://abcd.supabase.co
//! SUPABASE_ANON_KEY=eyJhbGciOi...
//! VERCEL_URL=https://lsrc.vercel.app
//! ```
//!
//! ### 선택적 환경 변수
//!
//! ```bash
//! SUPABASE_SERVICE_ROLE_KEY=...        # 서버 사이드 전용
//! TELEGRAM_BOT_TOKEN=123456:ABC...     # 서버 사이드 전용
//! MAX_AUDIO_FILE_SIZE_MB=10
//! ALLOWED_AUDIO_FORMATS=webm,wav,mp3,m4a
//! ENABLE_ANALYTICS=true
//! ```

pub mod app_config;
pub mod env_source;
pub mod env_loader;
pub mod merger;
pub mod validator;
pub mod profile;

pub use app_config::*;
pub use env_source::*;
pub use env_loader::*;
pub use merger::{get_config, merge_with_defaults};
pub use validator::*;
pub use profile::*;
