//! 실행 프로필 관리 모듈
//!
//! `PROFILE` 환경 변수에 따라 읽을 env 리소스 이름을 결정합니다.

use std::env;

use super::env_loader::DEFAULT_ENV_RESOURCE;

/// env 리소스 선택용 실행 프로필
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvProfile {
    /// 개발 환경 - `.env.dev`
    Development,
    /// 운영 환경 - `.env.prod`
    Production,
    /// 그 외 - 기본 `.env`
    Default,
}

impl EnvProfile {
    /// 현재 프로필을 감지합니다.
    ///
    /// `PROFILE` 환경 변수를 확인하며, 설정되지 않은 경우 `Development` 를 사용합니다.
    ///
    /// # Examples
    ///
    /// ```bash
    /// # 개발 환경 (.env.dev)
    /// PROFILE=dev cargo run
    ///
    /// # 운영 환경 (.env.prod)
    /// PROFILE=prod cargo run
    /// ```
    pub fn current() -> Self {
        match env::var("PROFILE") {
            Ok(value) => Self::from_str(&value),
            Err(_) => EnvProfile::Development,
        }
    }

    /// 문자열에서 프로필을 생성합니다 (대소문자 무관).
    ///
    /// 알 수 없는 값은 `Default` 가 됩니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "dev" | "development" => EnvProfile::Development,
            "prod" | "production" => EnvProfile::Production,
            _ => EnvProfile::Default,
        }
    }

    /// 이 프로필이 읽을 env 리소스 이름
    pub fn env_file_name(&self) -> &'static str {
        match self {
            EnvProfile::Development => ".env.dev",
            EnvProfile::Production => ".env.prod",
            EnvProfile::Default => DEFAULT_ENV_RESOURCE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EnvProfile::Development => "dev",
            EnvProfile::Production => "prod",
            EnvProfile::Default => "default",
        }
    }
}
