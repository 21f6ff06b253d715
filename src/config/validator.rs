//! # Config Validator
//!
//! 배포 전에 반드시 바꿔야 하는 필수 필드가 비어 있거나 예시 문구(placeholder)로
//! 남아 있는지 검사합니다.
//!
//! 검사 대상은 세 필드뿐입니다:
//!
//! | 필드 | placeholder |
//! |------|-------------|
//! | `supabase.url` | `your-project` |
//! | `supabase.anon_key` | `your-anon-key` |
//! | `deployment.vercel_url` | `your-project` |
//!
//! 봇 토큰, API 키 등은 검사하지 않습니다. 부분 문자열 일치이므로 실제 URL 에
//! `your-project` 가 들어 있으면 설정되지 않은 것으로 판단됩니다.

use serde::Serialize;

use super::app_config::{AppConfig, DEFAULT_CONFIG};
use crate::errors::{AppError, AppResult};
use crate::utils::string_utils::is_missing_or_placeholder;

const PROJECT_PLACEHOLDER: &str = "your-project";
const ANON_KEY_PLACEHOLDER: &str = "your-anon-key";

/// 검증 결과
///
/// 검증 실패는 에러가 아니라 데이터로 표현됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// `?` 로 전파하고 싶은 호출자를 위해 [`AppResult`] 로 변환합니다.
    pub fn into_result(self) -> AppResult<()> {
        if self.is_valid {
            Ok(())
        } else {
            Err(AppError::ValidationError(self.errors.join(", ")))
        }
    }
}

/// 필수 필드를 검사합니다.
pub fn validate_config(config: &AppConfig) -> ValidationReport {
    let mut errors = Vec::new();

    if is_missing_or_placeholder(&config.supabase.url, PROJECT_PLACEHOLDER) {
        errors.push("SUPABASE_URL is not configured".to_string());
    }

    if is_missing_or_placeholder(&config.supabase.anon_key, ANON_KEY_PLACEHOLDER) {
        errors.push("SUPABASE_ANON_KEY is not configured".to_string());
    }

    if is_missing_or_placeholder(&config.deployment.vercel_url, PROJECT_PLACEHOLDER) {
        errors.push("VERCEL_URL is not configured".to_string());
    }

    ValidationReport::from_errors(errors)
}

/// 내장 기본 설정을 검사합니다.
pub fn validate_default_config() -> ValidationReport {
    validate_config(&DEFAULT_CONFIG)
}
