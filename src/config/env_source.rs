//! # Environment Resource Sources
//!
//! dotenv 형식의 텍스트 리소스를 이름으로 가져오는 추상화입니다.
//!
//! | 구현체 | 리소스 위치 |
//! |--------|-------------|
//! | [`FileEnvSource`] | `<base_dir>/<name>` 로컬 파일 |
//! | [`HttpEnvSource`] | `GET <base_url>/<name>` 원격 리소스 |
//!
//! 조회 실패는 [`AppError`] 로 반환되며, 이를 흡수할지는 호출자가 결정합니다.
//! [`crate::config::load_env_variables`] 는 모든 실패를 경고 로그와 빈 맵으로 바꿉니다.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::debug;

use crate::errors::{AppError, AppResult};

/// 이름으로 텍스트 리소스를 조회하는 기능
///
/// # 예제
///
/// ```rust,ignore
/// use lsrc_config::config::{EnvSource, FileEnvSource};
///
/// let source = FileEnvSource::new("/etc/lsrc");
/// let text = source.fetch_text(".env.prod").await?;
/// ```
#[async_trait]
pub trait EnvSource: Send + Sync {
    /// 리소스 전체를 UTF-8 텍스트로 가져옵니다.
    async fn fetch_text(&self, name: &str) -> AppResult<String>;
}

/// 로컬 디렉터리에서 env 파일을 읽는 소스
#[derive(Debug, Clone)]
pub struct FileEnvSource {
    base_dir: PathBuf,
}

impl FileEnvSource {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// 현재 작업 디렉터리 기준 소스
    pub fn current_dir() -> Self {
        Self::new(".")
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

#[async_trait]
impl EnvSource for FileEnvSource {
    async fn fetch_text(&self, name: &str) -> AppResult<String> {
        let path = self.base_dir.join(name);
        debug!("env 파일 읽기: {}", path.display());

        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(AppError::NotFound(
                format!("env 파일이 없습니다: {}", path.display()),
            )),
            Err(e) => Err(e.into()),
        }
    }
}

/// HTTP 로 env 리소스를 가져오는 소스
///
/// 정적 호스팅된 프론트엔드가 `fetch('.env')` 로 설정을 받던 방식과 같습니다.
#[derive(Debug, Clone)]
pub struct HttpEnvSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpEnvSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// 공유 클라이언트(커넥션 풀)를 재사용할 때 사용합니다.
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    /// 리소스 이름에 대한 전체 URL
    pub fn resource_url(&self, name: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            name.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl EnvSource for HttpEnvSource {
    async fn fetch_text(&self, name: &str) -> AppResult<String> {
        let url = self.resource_url(name);
        debug!("env 리소스 요청: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("env 리소스 요청 실패: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!("env 리소스가 없습니다: {}", url)));
        }
        if !status.is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "env 리소스 응답 오류: {} ({})",
                url, status
            )));
        }

        response
            .text()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("env 리소스 본문 읽기 실패: {}", e)))
    }
}
