//! CORS 미들웨어 구성
//!
//! [`SecurityConfig::cors_origins`] 를 `actix_cors::Cors` 로 변환합니다.
//! 설정을 소비하는 웹 서버가 그대로 `App::wrap` 에 넘길 수 있습니다.

use actix_cors::Cors;
use actix_web::http::{Uri, header};
use log::{debug, warn};

use crate::config::SecurityConfig;

/// 보안 설정으로 CORS 미들웨어를 구성합니다
///
/// - 빈 항목은 무시합니다.
/// - URI 로 해석되지 않는 항목은 경고 로그를 남기고 무시합니다.
/// - `*` 가 포함되면 모든 Origin 을 허용하고 와일드카드 헤더를 보냅니다.
///   이때는 자격 증명(쿠키)을 지원하지 않습니다.
/// - 그 외에는 나열된 Origin 만 허용하고 자격 증명을 지원합니다.
///
/// # Examples
///
/// ```rust,ignore
/// let config = lsrc_config::get_config(&env_vars);
///
/// HttpServer::new(move || {
///     App::new()
///         .wrap(configure_cors(&config.security))
///         .configure(routes)
/// })
/// ```
pub fn configure_cors(security: &SecurityConfig) -> Cors {
    let origins: Vec<&str> = security
        .cors_origins
        .iter()
        .map(|origin| origin.trim())
        .filter(|origin| !origin.is_empty())
        .filter(|origin| {
            if *origin == "*" {
                return true;
            }
            match origin.parse::<Uri>() {
                Ok(_) => true,
                Err(e) => {
                    warn!("CORS: 잘못된 Origin 무시: {} ({})", origin, e);
                    false
                }
            }
        })
        .collect();

    let cors = if origins.contains(&"*") {
        debug!("CORS: 모든 Origin 허용");
        Cors::default().allow_any_origin().send_wildcard()
    } else {
        debug!("CORS 허용 Origin: {:?}", origins);
        origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .supports_credentials()
    };

    cors
        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        // 허용할 헤더
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
