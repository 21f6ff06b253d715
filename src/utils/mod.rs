//! 공통 유틸리티 함수 모듈
//!
//! 설정 로더 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//! 문자열 처리, 터미널 출력 등의 기능을 포함합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 환경 변수 값 변환, placeholder 검사, 비밀 값 마스킹
//! - [`display_terminal`] - 설정 요약과 검증 결과 터미널 출력
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::parse_leading_int;
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! let size = parse_leading_int("10MB");
//!
//! print_boxed_title("LSRC Configuration");
//! ```

pub mod string_utils;
pub mod display_terminal;
