//! # Config Merger
//!
//! 환경 변수 맵을 기본 설정 위에 필드 단위로 병합합니다.
//!
//! ## 필드별 규칙
//!
//! | 종류 | 규칙 |
//! |------|------|
//! | 문자열 | 값이 있고 비어 있지 않으면 사용, 아니면 기본값 |
//! | 정수 | 앞부분 정수 파싱, 실패/0/음수/`u32` 초과/누락이면 기본값 |
//! | 불리언 | `"true"` → true, `"false"` → false, 그 외는 기본값 |
//! | 목록 | 값이 있으면 `,` 로 분할, 아니면 기본 목록 |
//!
//! 정수 필드(파일 크기, 길이)는 `u32` 이므로 음수나 범위를 넘는 값은 담을 수 없습니다.
//! 이런 값은 파싱 실패와 같이 취급되어 기본값을 사용합니다.
//!
//! 보안 그룹([`SecurityConfig`](crate::config::SecurityConfig))에는 환경 변수 키가 없으며 기본값이 그대로 복사됩니다.
//!
//! 병합은 순수 함수이며 실패하지 않습니다.

use log::debug;

use super::app_config::{
    AppConfig, AppSettings, AudioConfig, DEFAULT_CONFIG, DeploymentConfig,
    ExternalServicesConfig, SupabaseConfig, TelegramConfig,
};
use super::env_loader::EnvVars;
use crate::utils::string_utils::{non_empty, parse_leading_int, split_comma_list};

/// 환경 변수 키 이름
pub mod keys {
    pub const SUPABASE_URL: &str = "SUPABASE_URL";
    pub const SUPABASE_ANON_KEY: &str = "SUPABASE_ANON_KEY";
    pub const SUPABASE_SERVICE_ROLE_KEY: &str = "SUPABASE_SERVICE_ROLE_KEY";

    pub const TELEGRAM_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";
    pub const TELEGRAM_BOT_USERNAME: &str = "TELEGRAM_BOT_USERNAME";
    pub const TELEGRAM_WEBAPP_URL: &str = "TELEGRAM_WEBAPP_URL";

    pub const VERCEL_URL: &str = "VERCEL_URL";
    pub const DOMAIN: &str = "DOMAIN";

    pub const MAX_AUDIO_FILE_SIZE_MB: &str = "MAX_AUDIO_FILE_SIZE_MB";
    pub const MAX_AUDIO_DURATION_SECONDS: &str = "MAX_AUDIO_DURATION_SECONDS";
    pub const ALLOWED_AUDIO_FORMATS: &str = "ALLOWED_AUDIO_FORMATS";
    pub const AUDIO_STORAGE_BUCKET: &str = "AUDIO_STORAGE_BUCKET";

    pub const DEFAULT_LANGUAGE: &str = "DEFAULT_LANGUAGE";
    pub const ENABLE_ANALYTICS: &str = "ENABLE_ANALYTICS";
    pub const DEBUG_MODE: &str = "DEBUG_MODE";
    pub const APP_VERSION: &str = "APP_VERSION";

    pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
    pub const GOOGLE_CLOUD_API_KEY: &str = "GOOGLE_CLOUD_API_KEY";
    pub const ENABLE_TRANSCRIPTION: &str = "ENABLE_TRANSCRIPTION";
}

/// 환경 변수를 [`DEFAULT_CONFIG`] 위에 병합합니다.
///
/// # 예제
///
/// ```rust,ignore
/// use lsrc_config::config::{get_config, EnvVars};
///
/// let mut env = EnvVars::new();
/// env.insert("SUPABASE_URL".into(), "https://x".into());
///
/// let config = get_config(&env);
/// assert_eq!(config.supabase.url, "https://x");
/// ```
pub fn get_config(env: &EnvVars) -> AppConfig {
    merge_with_defaults(env, &DEFAULT_CONFIG)
}

/// 환경 변수를 주어진 기본 설정 위에 병합합니다.
///
/// `defaults` 는 읽기만 하며, 결과는 항상 새 값입니다.
pub fn merge_with_defaults(env: &EnvVars, defaults: &AppConfig) -> AppConfig {
    let overrides = EnvOverrides { env };

    AppConfig {
        supabase: SupabaseConfig {
            url: overrides.string(keys::SUPABASE_URL, &defaults.supabase.url),
            anon_key: overrides.string(keys::SUPABASE_ANON_KEY, &defaults.supabase.anon_key),
            service_role_key: overrides.string(
                keys::SUPABASE_SERVICE_ROLE_KEY,
                &defaults.supabase.service_role_key,
            ),
        },
        telegram: TelegramConfig {
            bot_token: overrides.string(keys::TELEGRAM_BOT_TOKEN, &defaults.telegram.bot_token),
            bot_username: overrides
                .string(keys::TELEGRAM_BOT_USERNAME, &defaults.telegram.bot_username),
            webapp_url: overrides.string(keys::TELEGRAM_WEBAPP_URL, &defaults.telegram.webapp_url),
        },
        deployment: DeploymentConfig {
            vercel_url: overrides.string(keys::VERCEL_URL, &defaults.deployment.vercel_url),
            domain: overrides.string(keys::DOMAIN, &defaults.deployment.domain),
        },
        audio: AudioConfig {
            max_file_size_mb: overrides
                .positive_int(keys::MAX_AUDIO_FILE_SIZE_MB, defaults.audio.max_file_size_mb),
            allowed_formats: overrides
                .list(keys::ALLOWED_AUDIO_FORMATS, &defaults.audio.allowed_formats),
            storage_bucket: overrides
                .string(keys::AUDIO_STORAGE_BUCKET, &defaults.audio.storage_bucket),
            max_duration_seconds: overrides.positive_int(
                keys::MAX_AUDIO_DURATION_SECONDS,
                defaults.audio.max_duration_seconds,
            ),
        },
        app: AppSettings {
            default_language: overrides
                .string(keys::DEFAULT_LANGUAGE, &defaults.app.default_language),
            enable_analytics: overrides.flag(keys::ENABLE_ANALYTICS, defaults.app.enable_analytics),
            debug_mode: overrides.flag(keys::DEBUG_MODE, defaults.app.debug_mode),
            version: overrides.string(keys::APP_VERSION, &defaults.app.version),
        },
        security: defaults.security.clone(),
        external_services: ExternalServicesConfig {
            openai_api_key: overrides.string(
                keys::OPENAI_API_KEY,
                &defaults.external_services.openai_api_key,
            ),
            google_cloud_api_key: overrides.string(
                keys::GOOGLE_CLOUD_API_KEY,
                &defaults.external_services.google_cloud_api_key,
            ),
            enable_transcription: overrides.flag(
                keys::ENABLE_TRANSCRIPTION,
                defaults.external_services.enable_transcription,
            ),
        },
    }
}

/// 필드 종류별 값 해석기
struct EnvOverrides<'a> {
    env: &'a EnvVars,
}

impl EnvOverrides<'_> {
    fn string(&self, key: &str, default: &str) -> String {
        match non_empty(self.env.get(key)) {
            Some(value) => {
                debug!("{} 환경 변수 적용", key);
                value.to_string()
            }
            None => default.to_string(),
        }
    }

    fn positive_int(&self, key: &str, default: u32) -> u32 {
        let parsed = self
            .env
            .get(key)
            .and_then(|raw| parse_leading_int(raw))
            .and_then(|n| u32::try_from(n).ok())
            .filter(|n| *n > 0);

        match parsed {
            Some(value) => {
                debug!("{} 환경 변수 적용: {}", key, value);
                value
            }
            None => {
                if self.env.contains_key(key) {
                    debug!("{} 값을 해석할 수 없어 기본값 {} 사용", key, default);
                }
                default
            }
        }
    }

    // "false" 도 기본값 true 를 덮어씁니다
    fn flag(&self, key: &str, default: bool) -> bool {
        match self.env.get(key).map(String::as_str) {
            Some("true") => true,
            Some("false") => false,
            _ => default,
        }
    }

    fn list(&self, key: &str, default: &[String]) -> Vec<String> {
        match non_empty(self.env.get(key)) {
            Some(value) => split_comma_list(value),
            None => default.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> EnvVars {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_env_yields_defaults() {
        assert_eq!(get_config(&EnvVars::new()), *DEFAULT_CONFIG);
    }

    #[test]
    fn test_single_string_override() {
        let config = get_config(&env(&[("SUPABASE_URL", "https://x")]));

        let mut expected = AppConfig::default();
        expected.supabase.url = "https://x".to_string();
        assert_eq!(config, expected);
    }

    #[test]
    fn test_empty_string_falls_back_to_default() {
        let config = get_config(&env(&[("VERCEL_URL", ""), ("DOMAIN", "")]));

        assert_eq!(config.deployment, DEFAULT_CONFIG.deployment);
    }

    #[test]
    fn test_all_string_keys_are_applied() {
        let config = get_config(&env(&[
            ("SUPABASE_ANON_KEY", "anon"),
            ("SUPABASE_SERVICE_ROLE_KEY", "service"),
            ("TELEGRAM_BOT_TOKEN", "123:abc"),
            ("TELEGRAM_BOT_USERNAME", "OtherBot"),
            ("TELEGRAM_WEBAPP_URL", "https://t.me/OtherBot/app"),
            ("VERCEL_URL", "https://lsrc.vercel.app"),
            ("DOMAIN", "lsrc.app"),
            ("AUDIO_STORAGE_BUCKET", "recordings"),
            ("DEFAULT_LANGUAGE", "ru"),
            ("APP_VERSION", "2.0.0"),
            ("OPENAI_API_KEY", "sk-test"),
            ("GOOGLE_CLOUD_API_KEY", "gc-test"),
        ]));

        assert_eq!(config.supabase.anon_key, "anon");
        assert_eq!(config.supabase.service_role_key, "service");
        assert_eq!(config.telegram.bot_token, "123:abc");
        assert_eq!(config.telegram.bot_username, "OtherBot");
        assert_eq!(config.telegram.webapp_url, "https://t.me/OtherBot/app");
        assert_eq!(config.deployment.vercel_url, "https://lsrc.vercel.app");
        assert_eq!(config.deployment.domain, "lsrc.app");
        assert_eq!(config.audio.storage_bucket, "recordings");
        assert_eq!(config.app.default_language, "ru");
        assert_eq!(config.app.version, "2.0.0");
        assert_eq!(config.external_services.openai_api_key, "sk-test");
        assert_eq!(config.external_services.google_cloud_api_key, "gc-test");
    }

    #[test]
    fn test_integer_parse_failure_falls_back() {
        let config = get_config(&env(&[("MAX_AUDIO_FILE_SIZE_MB", "not-a-number")]));

        assert_eq!(config.audio.max_file_size_mb, 10);
    }

    #[test]
    fn test_integer_overrides() {
        let config = get_config(&env(&[
            ("MAX_AUDIO_FILE_SIZE_MB", "25"),
            ("MAX_AUDIO_DURATION_SECONDS", "600s"),
        ]));

        assert_eq!(config.audio.max_file_size_mb, 25);
        assert_eq!(config.audio.max_duration_seconds, 600);
    }

    #[test]
    fn test_integer_zero_and_negative_fall_back() {
        let config = get_config(&env(&[
            ("MAX_AUDIO_FILE_SIZE_MB", "0"),
            ("MAX_AUDIO_DURATION_SECONDS", "-30"),
        ]));

        assert_eq!(config.audio.max_file_size_mb, 10);
        assert_eq!(config.audio.max_duration_seconds, 300);
    }

    #[test]
    fn test_integer_out_of_u32_range_falls_back() {
        let config = get_config(&env(&[("MAX_AUDIO_FILE_SIZE_MB", "99999999999")]));

        assert_eq!(config.audio.max_file_size_mb, 10);
    }

    #[test]
    fn test_boolean_false_stays_false() {
        let config = get_config(&env(&[("ENABLE_ANALYTICS", "false")]));

        assert!(!config.app.enable_analytics);
    }

    #[test]
    fn test_boolean_true_turns_flag_on() {
        let config = get_config(&env(&[
            ("ENABLE_ANALYTICS", "true"),
            ("DEBUG_MODE", "true"),
            ("ENABLE_TRANSCRIPTION", "true"),
        ]));

        assert!(config.app.enable_analytics);
        assert!(config.app.debug_mode);
        assert!(config.external_services.enable_transcription);
    }

    #[test]
    fn test_boolean_false_overrides_true_default() {
        let mut defaults = AppConfig::default();
        defaults.app.debug_mode = true;

        let config = merge_with_defaults(&env(&[("DEBUG_MODE", "false")]), &defaults);

        assert!(!config.app.debug_mode);
    }

    #[test]
    fn test_boolean_unrecognised_value_keeps_default() {
        let mut defaults = AppConfig::default();
        defaults.app.debug_mode = true;

        let config = merge_with_defaults(
            &env(&[("DEBUG_MODE", "TRUE"), ("ENABLE_ANALYTICS", "yes")]),
            &defaults,
        );

        assert!(config.app.debug_mode);
        assert!(!config.app.enable_analytics);
    }

    #[test]
    fn test_list_override_is_split_on_commas() {
        let config = get_config(&env(&[("ALLOWED_AUDIO_FORMATS", "ogg,flac")]));

        assert_eq!(config.audio.allowed_formats, vec!["ogg", "flac"]);
    }

    #[test]
    fn test_empty_list_value_falls_back_to_default_list() {
        let config = get_config(&env(&[("ALLOWED_AUDIO_FORMATS", "")]));

        assert_eq!(config.audio.allowed_formats, DEFAULT_CONFIG.audio.allowed_formats);
    }

    #[test]
    fn test_security_group_ignores_environment() {
        let config = get_config(&env(&[
            ("CORS_ORIGINS", "https://evil.example"),
            ("RATE_LIMIT_PER_MINUTE", "1"),
        ]));

        assert_eq!(config.security, DEFAULT_CONFIG.security);
    }

    #[test]
    fn test_security_group_copied_from_given_defaults() {
        let mut defaults = AppConfig::default();
        defaults.security.cors_origins = vec!["https://lsrc.vercel.app".to_string()];
        defaults.security.rate_limit_per_minute = 120;

        let config = merge_with_defaults(&EnvVars::new(), &defaults);

        assert_eq!(config.security, defaults.security);
    }

    #[test]
    fn test_merge_does_not_touch_defaults() {
        let defaults = AppConfig::default();

        let _ = merge_with_defaults(&env(&[("SUPABASE_URL", "https://x")]), &defaults);

        assert_eq!(defaults, AppConfig::default());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let config = get_config(&env(&[("PATH", "/usr/bin"), ("supabase_url", "https://x")]));

        assert_eq!(config, *DEFAULT_CONFIG);
    }
}
