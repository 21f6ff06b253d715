//! # Environment Reader
//!
//! dotenv 형식 텍스트를 평면 `KEY -> VALUE` 맵으로 읽어들입니다.
//!
//! ## 파싱 규칙
//!
//! ```text
//! # 주석 줄은 건너뜁니다
//! SUPABASE_URL=https://abc.supabase.co     → ("SUPABASE_URL", "https://abc.supabase.co")
//!   DEFAULT_LANGUAGE = ru                  → ("DEFAULT_LANGUAGE", "ru")
//! TELEGRAM_WEBAPP_URL=https://t.me/a?b=c   → 값 안의 '=' 는 유지
//! NO_EQUALS_SIGN                           → 무시
//! =orphan                                  → 무시 (빈 키)
//! ```
//!
//! 키는 대소문자를 구분하며, 같은 키가 여러 번 나오면 마지막 값이 남습니다.
//!
//! 리소스를 가져오지 못해도 [`load_env_variables`] 는 실패하지 않습니다.
//! 경고 로그를 남기고 빈 맵을 반환하며, 이 경우 모든 필드가 기본값을 사용합니다.

use std::collections::HashMap;

use log::{info, warn};

use super::app_config::AppConfig;
use super::env_source::EnvSource;
use super::merger::get_config;

/// 환경 변수 맵
pub type EnvVars = HashMap<String, String>;

/// 기본 env 리소스 이름
pub const DEFAULT_ENV_RESOURCE: &str = ".env";

/// dotenv 형식 텍스트를 파싱합니다.
///
/// # 예제
///
/// ```rust,ignore
/// let vars = parse_env_text("# comment\nA=1\nB = x=y\n");
/// assert_eq!(vars["A"], "1");
/// assert_eq!(vars["B"], "x=y");
/// ```
pub fn parse_env_text(text: &str) -> EnvVars {
    let mut vars = EnvVars::new();

    for line in text.split('\n') {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }

        vars.insert(key.to_string(), value.trim().to_string());
    }

    vars
}

/// env 리소스를 가져와 파싱합니다.
///
/// 조회나 디코딩에 실패하면 경고 로그를 남기고 빈 맵을 반환합니다.
/// 재시도나 타임아웃은 없습니다.
///
/// # Arguments
///
/// * `source` - 리소스 조회 방식 (파일, HTTP 등)
/// * `name` - 리소스 이름 (예: `.env`, `.env.prod`)
pub async fn load_env_variables<S>(source: &S, name: &str) -> EnvVars
where
    S: EnvSource + ?Sized,
{
    match source.fetch_text(name).await {
        Ok(text) => {
            let vars = parse_env_text(&text);
            info!("✅ {} 로드 완료: {}개 항목", name, vars.len());
            vars
        }
        Err(e) => {
            warn!("⚠️ {} 파일을 불러오지 못했습니다. 기본 설정을 사용합니다: {}", name, e);
            EnvVars::new()
        }
    }
}

/// env 리소스를 읽고 기본 설정과 병합한 최종 설정을 반환합니다.
///
/// [`load_env_variables`] 와 [`get_config`] 를 차례로 호출하는 것과 같습니다.
pub async fn initialize_config<S>(source: &S, name: &str) -> AppConfig
where
    S: EnvSource + ?Sized,
{
    let env_vars = load_env_variables(source, name).await;
    get_config(&env_vars)
}
