//! # 문자열 유틸리티
//!
//! 환경 변수 값 변환과 placeholder 검사에 쓰이는 공통 유틸리티 함수들입니다.

/// 비어 있지 않은 값만 통과시킵니다
///
/// 환경 변수 맵에서 꺼낸 값이 없거나 빈 문자열이면 `None` 을 반환합니다.
/// 공백 문자열은 그대로 통과합니다. 로더가 이미 값을 trim 하기 때문입니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::non_empty;
///
/// let value = "https://x".to_string();
/// assert_eq!(non_empty(Some(&value)), Some("https://x"));
/// assert_eq!(non_empty(Some(&String::new())), None);
/// assert_eq!(non_empty(None), None);
/// ```
pub fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

/// 문자열 앞부분의 정수를 관대하게 파싱합니다
///
/// 앞쪽 공백을 무시하고, 선택적인 부호(`+`/`-`) 다음에 오는 연속된 숫자만
/// 읽습니다. 숫자 뒤에 오는 문자는 무시합니다 (`"10MB"` → `10`).
/// 숫자가 하나도 없거나 `i64` 범위를 넘으면 `None` 을 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::parse_leading_int;
///
/// assert_eq!(parse_leading_int("  42"), Some(42));
/// assert_eq!(parse_leading_int("10MB"), Some(10));
/// assert_eq!(parse_leading_int("-5"), Some(-5));
/// assert_eq!(parse_leading_int("not-a-number"), None);
/// ```
pub fn parse_leading_int(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// 쉼표로 구분된 문자열을 목록으로 나눕니다
///
/// 각 항목은 입력된 그대로 유지됩니다 (trim 하지 않음).
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::split_comma_list;
///
/// assert_eq!(split_comma_list("webm,wav"), vec!["webm", "wav"]);
/// ```
pub fn split_comma_list(value: &str) -> Vec<String> {
    value.split(',').map(str::to_string).collect()
}

/// 값이 비어 있거나 placeholder 문구를 포함하는지 확인합니다
///
/// 부분 문자열 일치로 검사하므로 실제 값이 우연히 placeholder 문구를
/// 포함해도 `true` 가 됩니다.
pub fn is_missing_or_placeholder(value: &str, placeholder: &str) -> bool {
    value.is_empty() || value.contains(placeholder)
}

/// 민감한 값을 로그 출력용으로 가립니다
///
/// 빈 문자열은 그대로 두어 "설정되지 않음" 상태가 드러나도록 합니다.
pub fn mask_secret(value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        "********".to_string()
    }
}
