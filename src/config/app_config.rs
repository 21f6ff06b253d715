//! # Application Configuration Types
//!
//! LSRC 웹 앱이 사용하는 설정 구조체와 기본값을 정의합니다.
//!
//! 모든 그룹은 불변 값으로 다뤄집니다. 한 번 병합된 [`AppConfig`] 는 수정되지 않으며,
//! 로드할 때마다 새 값이 만들어집니다.
//!
//! ## 설정 그룹
//!
//! | 그룹 | 구조체 | 용도 |
//! |------|--------|------|
//! | Supabase | [`SupabaseConfig`] | 스토리지 백엔드 접속 정보 |
//! | Telegram | [`TelegramConfig`] | 봇 토큰, WebApp URL |
//! | Deployment | [`DeploymentConfig`] | Vercel URL, 커스텀 도메인 |
//! | Audio | [`AudioConfig`] | 업로드 크기/길이 제한, 허용 포맷 |
//! | App | [`AppSettings`] | 언어, 기능 플래그, 버전 |
//! | Security | [`SecurityConfig`] | CORS 허용 Origin, Rate limit |
//! | External | [`ExternalServicesConfig`] | 음성 인식 API 키 |

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::utils::string_utils::mask_secret;

/// 내장 기본 설정
///
/// 환경 변수로 덮어쓰지 않은 필드의 fallback 값이자
/// [`crate::config::validate_default_config`] 의 검증 대상입니다.
/// 읽기 전용이며 스레드 간에 안전하게 공유됩니다.
pub static DEFAULT_CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::default);

/// 애플리케이션 전체 설정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub supabase: SupabaseConfig,
    pub telegram: TelegramConfig,
    pub deployment: DeploymentConfig,
    pub audio: AudioConfig,
    pub app: AppSettings,
    pub security: SecurityConfig,
    pub external_services: ExternalServicesConfig,
}

/// Supabase 스토리지 백엔드 설정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupabaseConfig {
    pub url: String,
    /// 공개 가능한 anon 키. 보안은 RLS 로 보장됩니다.
    pub anon_key: String,
    /// 서버 사이드 전용 키. 로그에 출력하지 마세요.
    pub service_role_key: String,
}

/// Telegram 봇 설정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelegramConfig {
    /// 서버 사이드 전용 토큰
    pub bot_token: String,
    pub bot_username: String,
    pub webapp_url: String,
}

/// 배포 URL 설정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentConfig {
    pub vercel_url: String,
    pub domain: String,
}

/// 오디오 업로드 제한
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioConfig {
    pub max_file_size_mb: u32,
    pub allowed_formats: Vec<String>,
    pub storage_bucket: String,
    pub max_duration_seconds: u32,
}

impl AudioConfig {
    /// 업로드 허용 최대 크기를 바이트 단위로 반환합니다.
    pub fn max_file_size_bytes(&self) -> u64 {
        u64::from(self.max_file_size_mb) * 1024 * 1024
    }

    /// 확장자가 허용된 오디오 포맷인지 확인합니다.
    ///
    /// 대소문자를 구분하지 않으며 앞의 `.` 은 무시합니다 (`".WAV"` → `wav`).
    pub fn is_format_allowed(&self, extension: &str) -> bool {
        let extension = extension.trim().trim_start_matches('.');
        self.allowed_formats
            .iter()
            .any(|format| format.trim().eq_ignore_ascii_case(extension))
    }
}

/// 애플리케이션 동작 설정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    pub default_language: String,
    pub enable_analytics: bool,
    pub debug_mode: bool,
    pub version: String,
}

/// 보안 설정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub cors_origins: Vec<String>,
    pub rate_limit_per_minute: u32,
}

/// 선택적 외부 서비스 설정
///
/// 키가 비어 있으면 해당 서비스를 사용하지 않는다는 의미입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalServicesConfig {
    /// 오디오 전사용 OpenAI 키
    pub openai_api_key: String,
    /// speech-to-text 대체용 Google Cloud 키
    pub google_cloud_api_key: String,
    pub enable_transcription: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            supabase: SupabaseConfig {
                url: "https://your-project.supabase.co".to_string(),
                anon_key: "your-anon-key-here".to_string(),
                service_role_key: "your-service-role-key-here".to_string(),
            },
            telegram: TelegramConfig {
                bot_token: "your-bot-token-here".to_string(),
                bot_username: "ListenSoundReflectCreateBot".to_string(),
                webapp_url: "https://t.me/ListenSoundReflectCreateBot/LSRC".to_string(),
            },
            deployment: DeploymentConfig {
                vercel_url: "https://your-project.vercel.app".to_string(),
                domain: "your-custom-domain.com".to_string(),
            },
            audio: AudioConfig {
                max_file_size_mb: 10,
                allowed_formats: ["webm", "wav", "mp3", "m4a"]
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
                storage_bucket: "audio".to_string(),
                // 5분
                max_duration_seconds: 300,
            },
            app: AppSettings {
                default_language: "en".to_string(),
                enable_analytics: false,
                debug_mode: false,
                version: "1.0.0".to_string(),
            },
            security: SecurityConfig {
                cors_origins: vec![
                    "https://your-project.vercel.app".to_string(),
                    "https://t.me".to_string(),
                ],
                rate_limit_per_minute: 60,
            },
            external_services: ExternalServicesConfig {
                openai_api_key: String::new(),
                google_cloud_api_key: String::new(),
                enable_transcription: false,
            },
        }
    }
}

impl AppConfig {
    /// 비밀 값을 가린 사본을 반환합니다.
    ///
    /// 로그나 터미널 출력 전에 사용합니다. 가려지는 필드:
    /// `service_role_key`, `bot_token`, `openai_api_key`, `google_cloud_api_key`.
    /// 비어 있는 값은 그대로 빈 문자열로 남습니다.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        copy.supabase.service_role_key = mask_secret(&self.supabase.service_role_key);
        copy.telegram.bot_token = mask_secret(&self.telegram.bot_token);
        copy.external_services.openai_api_key =
            mask_secret(&self.external_services.openai_api_key);
        copy.external_services.google_cloud_api_key =
            mask_secret(&self.external_services.google_cloud_api_key);
        copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = AppConfig::default();

        assert_eq!(config.supabase.url, "https://your-project.supabase.co");
        assert_eq!(config.telegram.bot_username, "ListenSoundReflectCreateBot");
        assert_eq!(config.audio.max_file_size_mb, 10);
        assert_eq!(config.audio.max_duration_seconds, 300);
        assert_eq!(config.audio.allowed_formats, vec!["webm", "wav", "mp3", "m4a"]);
        assert_eq!(config.app.default_language, "en");
        assert!(!config.app.enable_analytics);
        assert!(!config.app.debug_mode);
        assert_eq!(config.security.rate_limit_per_minute, 60);
        assert_eq!(config.security.cors_origins.len(), 2);
        assert!(config.external_services.openai_api_key.is_empty());
        assert!(!config.external_services.enable_transcription);
    }

    #[test]
    fn test_default_config_static_matches_default() {
        assert_eq!(*DEFAULT_CONFIG, AppConfig::default());
    }

    #[test]
    fn test_max_file_size_bytes() {
        let audio = AppConfig::default().audio;
        assert_eq!(audio.max_file_size_bytes(), 10 * 1024 * 1024);
    }

    #[test]
    fn test_is_format_allowed() {
        let audio = AppConfig::default().audio;

        assert!(audio.is_format_allowed("wav"));
        assert!(audio.is_format_allowed(".WAV"));
        assert!(audio.is_format_allowed("m4a"));
        assert!(!audio.is_format_allowed("flac"));
        assert!(!audio.is_format_allowed(""));
    }

    #[test]
    fn test_redacted_masks_secrets_only() {
        let mut config = AppConfig::default();
        config.external_services.openai_api_key = "sk-test".to_string();

        let redacted = config.redacted();

        assert_eq!(redacted.supabase.service_role_key, "********");
        assert_eq!(redacted.telegram.bot_token, "********");
        assert_eq!(redacted.external_services.openai_api_key, "********");
        assert_eq!(redacted.external_services.google_cloud_api_key, "");
        assert_eq!(redacted.supabase.url, config.supabase.url);
        assert_eq!(redacted.supabase.anon_key, config.supabase.anon_key);
        // 원본은 그대로
        assert_eq!(config.external_services.openai_api_key, "sk-test");
    }

    #[test]
    fn test_serializes_to_json() {
        let json = serde_json::to_value(AppConfig::default()).unwrap();

        assert_eq!(json["audio"]["max_file_size_mb"], 10);
        assert_eq!(json["security"]["cors_origins"][1], "https://t.me");
    }
}
