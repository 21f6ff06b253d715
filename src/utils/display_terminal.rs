//! 터미널 출력 포맷팅 유틸리티
//!
//! 설정 점검 바이너리에서 사용되는 터미널 출력 함수들을 제공합니다.
//! 박스 형태의 제목, 설정 요약, 검증 결과를 시각적으로 표현합니다.
//!
//! 비밀 값은 출력 전에 [`AppConfig::redacted`] 로 가려집니다.

use crate::config::{AppConfig, ValidationReport};

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// 텍스트는 자동으로 중앙 정렬됩니다.
///
/// Output:
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                LSRC Configuration                ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    println!("{}", boxed_title(title));
}

fn boxed_title(title: &str) -> String {
    // 고정 너비 50칸 사용 (박스 내부 콘텐츠)
    let content_width = 50;
    let border = "═".repeat(content_width);

    format!("╔{}╗\n║{:^50}║\n╚{}╝", border, title, border)
}

/// 설정 요약을 출력합니다
///
/// Output:
/// ```text
///    ├─ Supabase: https://abcd.supabase.co
///    ├─ Telegram Bot: @ListenSoundReflectCreateBot
///    ...
/// ```
pub fn print_config_summary(config: &AppConfig) {
    for line in config_summary_lines(config) {
        println!("{}", line);
    }
}

fn config_summary_lines(config: &AppConfig) -> Vec<String> {
    let config = config.redacted();
    let secret = |value: &str| {
        if value.is_empty() {
            "(not set)".to_string()
        } else {
            value.to_string()
        }
    };

    vec![
        sub_task("Supabase", &config.supabase.url),
        sub_task("Supabase Service Key", &secret(&config.supabase.service_role_key)),
        sub_task("Telegram Bot", &format!("@{}", config.telegram.bot_username)),
        sub_task("Telegram Token", &secret(&config.telegram.bot_token)),
        sub_task("Vercel URL", &config.deployment.vercel_url),
        sub_task("Domain", &config.deployment.domain),
        sub_task(
            "Audio",
            &format!(
                "{} MB, {} s, [{}] → bucket '{}'",
                config.audio.max_file_size_mb,
                config.audio.max_duration_seconds,
                config.audio.allowed_formats.join(", "),
                config.audio.storage_bucket
            ),
        ),
        sub_task(
            "App",
            &format!(
                "v{} ({}), analytics={}, debug={}",
                config.app.version,
                config.app.default_language,
                config.app.enable_analytics,
                config.app.debug_mode
            ),
        ),
        sub_task(
            "Security",
            &format!(
                "{} origins, {} req/min",
                config.security.cors_origins.len(),
                config.security.rate_limit_per_minute
            ),
        ),
        sub_task(
            "Transcription",
            &format!(
                "enabled={}, openai={}, google={}",
                config.external_services.enable_transcription,
                secret(&config.external_services.openai_api_key),
                secret(&config.external_services.google_cloud_api_key)
            ),
        ),
    ]
}

/// 검증 결과를 출력합니다
///
/// Output:
/// ```text
/// ✓ Configuration is valid
/// ```
/// 또는
/// ```text
/// ✗ Configuration has 3 problem(s)
///    ├─ SUPABASE_URL is not configured
/// ```
pub fn print_validation_report(report: &ValidationReport) {
    for line in validation_report_lines(report) {
        println!("{}", line);
    }
}

fn validation_report_lines(report: &ValidationReport) -> Vec<String> {
    if report.is_valid {
        return vec!["✓ Configuration is valid".to_string()];
    }

    let mut lines = vec![format!(
        "✗ Configuration has {} problem(s)",
        report.errors.len()
    )];
    lines.extend(report.errors.iter().map(|error| format!("   ├─ {}", error)));
    lines
}

fn sub_task(name: &str, status: &str) -> String {
    format!("   ├─ {}: {}", name, status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{validate_config, validate_default_config};

    #[test]
    fn test_boxed_title_is_centered() {
        let title = boxed_title("LSRC");
        let lines: Vec<&str> = title.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with('║'));
        assert!(lines[1].contains("LSRC"));
        assert_eq!(lines[0].chars().count(), lines[1].chars().count());
    }

    #[test]
    fn test_summary_never_contains_secrets() {
        let mut config = AppConfig::default();
        config.telegram.bot_token = "123456:SECRET".to_string();
        config.external_services.openai_api_key = "sk-SECRET".to_string();

        let summary = config_summary_lines(&config).join("\n");

        assert!(!summary.contains("SECRET"));
        assert!(summary.contains("********"));
        assert!(summary.contains("(not set)"));
        assert!(summary.contains("@ListenSoundReflectCreateBot"));
    }

    #[test]
    fn test_validation_report_lines() {
        let invalid = validation_report_lines(&validate_default_config());
        assert_eq!(invalid.len(), 4);
        assert!(invalid[0].contains("3 problem(s)"));

        let mut config = AppConfig::default();
        config.supabase.url = "https://real.example".to_string();
        config.supabase.anon_key = "realkey".to_string();
        config.deployment.vercel_url = "https://real.example".to_string();
        let valid = validation_report_lines(&validate_config(&config));
        assert_eq!(valid, vec!["✓ Configuration is valid"]);
    }
}
