//! 에러 타입 모듈
//!
//! - [`errors`] - 애플리케이션 전역 에러 타입 [`AppError`] 와 [`ErrorContext`] 확장 trait

pub mod errors;

pub use errors::*;
