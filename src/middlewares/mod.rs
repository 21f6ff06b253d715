//! 미들웨어 모듈
//!
//! 설정 값을 ActixWeb 요청 처리 파이프라인의 미들웨어로 변환합니다.
//! 설정을 소비하는 웹 서버가 `App::wrap` 으로 등록해 사용합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. CORS ([`cors::configure_cors`])
//! - `SecurityConfig::cors_origins` 기반 허용 Origin 구성
//! - `*` 지정 시 와일드카드 모드
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{App, HttpServer};
//! use lsrc_config::middlewares::configure_cors;
//!
//! let config = lsrc_config::get_config(&env_vars);
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .wrap(configure_cors(&config.security))
//!         .service(/* 라우트들 */)
//! })
//! ```

pub mod cors;

pub use cors::configure_cors;
