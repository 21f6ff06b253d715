//! LSRC 설정 점검 도구
//!
//! 현재 프로필의 env 리소스를 읽어 최종 설정을 만들고, 요약과 검증 결과를 출력합니다.
//! 필수 설정이 누락되면 종료 코드 1 로 끝나므로 배포 파이프라인에서 사전 점검에 사용할 수 있습니다.

use env_logger::Env;
use log::{error, info};
use lsrc_config::config::{EnvProfile, EnvSource, FileEnvSource, HttpEnvSource};
use lsrc_config::errors::{AppResult, ErrorContext};
use lsrc_config::utils::display_terminal::{
    print_boxed_title, print_config_summary, print_validation_report,
};
use lsrc_config::{AppConfig, initialize_config, validate_config};

#[actix_web::main]
async fn main() {
    init_logging();

    info!("🚀 LSRC 설정 로딩 시작...");

    let profile = EnvProfile::current();
    info!("Current profile: {}", profile.as_str());

    let source = select_env_source();
    let config = initialize_config(source.as_ref(), profile.env_file_name()).await;

    print_boxed_title("LSRC Configuration");
    print_config_summary(&config);

    if let Err(e) = log_config_json(&config) {
        error!("{}", e);
    }

    let report = validate_config(&config);
    print_validation_report(&report);

    match report.into_result() {
        Ok(()) => info!("✅ 설정 검증 통과"),
        Err(e) => {
            error!("❌ {}", e);
            std::process::exit(1);
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info")
///
/// ```bash
/// # 필드별 병합 로그까지 확인
/// RUST_LOG=lsrc_config=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
}

/// env 리소스 조회 방식을 선택합니다
///
/// * `ENV_SOURCE_URL` 이 설정되어 있으면 해당 URL 에서 HTTP 로 조회
/// * 그 외에는 현재 작업 디렉터리의 파일을 읽음
fn select_env_source() -> Box<dyn EnvSource> {
    match std::env::var("ENV_SOURCE_URL") {
        Ok(url) if !url.trim().is_empty() => {
            info!("🌐 env 리소스 원격 조회: {}", url);
            Box::new(HttpEnvSource::new(url))
        }
        _ => Box::new(FileEnvSource::current_dir()),
    }
}

/// 비밀 값을 가린 설정을 debug 레벨 JSON 으로 남깁니다
fn log_config_json(config: &AppConfig) -> AppResult<()> {
    let json = serde_json::to_string_pretty(&config.redacted()).context("설정 직렬화 실패")?;
    log::debug!("최종 설정:\n{}", json);
    Ok(())
}
