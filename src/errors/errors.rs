//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 설정 로더를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`를 사용하여 타입 안전하고 일관된 에러 처리를 제공합니다.
//!
//! 환경 리소스 조회 실패는 [`crate::config::load_env_variables`]에서 흡수되므로
//! 호출자에게 전파되지 않습니다. 이 타입은 [`crate::config::EnvSource`] 구현체와
//! 검증 결과를 `?` 로 다루고 싶은 호출자를 위한 것입니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use lsrc_config::errors::{AppError, AppResult};
//!
//! fn require_supabase(config: &AppConfig) -> AppResult<()> {
//!     validate_config(config).into_result()
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 설정 로딩 과정에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 요청한 환경 리소스가 존재하지 않음
    #[error("Not found: {0}")]
    NotFound(String),

    /// 파일 시스템 에러 (읽기 실패, 권한 부족 등)
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// 외부 서비스 에러 (HTTP 전송 실패, 2xx 이외의 응답)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 설정 검증 에러 (필수 값 누락 또는 placeholder 값)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 내부 에러
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
