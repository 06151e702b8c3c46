use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::teachers::entities::Qualification;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

/// 最小年龄
pub const MIN_AGE: i32 = 6;

/// 姓名最小长度（去除首尾空白后按字符计）
pub const MIN_NAME_LEN: usize = 3;

pub fn validate_positive_id(id: i64) -> Result<(), &'static str> {
    if id <= 0 {
        return Err("ID must be a positive integer");
    }
    Ok(())
}

/// 校验姓名并返回首字母大写后的规范写法
pub fn validate_person_name(name: &str) -> Result<String, &'static str> {
    let name = name.trim();
    if name.chars().count() < MIN_NAME_LEN {
        return Err("Name must be at least 3 characters long");
    }
    // 只能包含字母
    if !name.chars().all(char::is_alphabetic) {
        return Err("Name must contain only alphabetic characters");
    }
    Ok(capitalize(name))
}

pub fn validate_age(age: i32) -> Result<(), &'static str> {
    if age < MIN_AGE {
        return Err("Age must be at least 6");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    // 正则允许的连续点号与重复 @ 仍视为非法
    if email.contains("..") || email.contains("@@") {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 校验学历并返回规范写法
pub fn normalize_qualification(qualification: &str) -> Result<&'static str, String> {
    Qualification::from_input(qualification)
        .map(|q| q.as_str())
        .ok_or_else(|| {
            format!(
                "Invalid qualification '{}'. Supported qualifications: {}",
                qualification.trim(),
                Qualification::supported()
            )
        })
}

pub fn validate_grade_name(grade_name: &str) -> Result<String, &'static str> {
    let grade_name = grade_name.trim();
    if grade_name.is_empty() {
        return Err("Grade name must not be empty");
    }
    Ok(grade_name.to_string())
}

/// 首字母大写，其余字母小写
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_id() {
        assert!(validate_positive_id(1).is_ok());
        assert!(validate_positive_id(0).is_err());
        assert!(validate_positive_id(-7).is_err());
    }

    #[test]
    fn test_person_name_is_capitalized() {
        assert_eq!(validate_person_name("ann"), Ok("Ann".to_string()));
        assert_eq!(validate_person_name("  bOB  "), Ok("Bob".to_string()));
        assert_eq!(validate_person_name("JOSÉ"), Ok("José".to_string()));
    }

    #[test]
    fn test_person_name_too_short() {
        assert_eq!(
            validate_person_name("al"),
            Err("Name must be at least 3 characters long")
        );
        assert_eq!(
            validate_person_name("  ab   "),
            Err("Name must be at least 3 characters long")
        );
    }

    #[test]
    fn test_person_name_must_be_alphabetic() {
        assert_eq!(
            validate_person_name("ann1"),
            Err("Name must contain only alphabetic characters")
        );
        assert!(validate_person_name("mary jane").is_err());
        assert!(validate_person_name("o'neil").is_err());
    }

    #[test]
    fn test_age() {
        assert!(validate_age(6).is_ok());
        assert!(validate_age(17).is_ok());
        assert!(validate_age(5).is_err());
        assert!(validate_age(-1).is_err());
    }

    #[test]
    fn test_valid_emails() {
        assert!(validate_email("a@b.com").is_ok());
        assert!(validate_email("first.last+tag@school.edu.in").is_ok());
        assert!(validate_email("x_y%z@mail-server.org").is_ok());
    }

    #[test]
    fn test_invalid_emails() {
        assert!(validate_email("plainaddress").is_err());
        assert!(validate_email("a@b").is_err());
        assert!(validate_email("a@b.c").is_err());
        assert!(validate_email("a..b@school.com").is_err());
        assert!(validate_email("a@school..com").is_err());
        assert!(validate_email("a@@school.com").is_err());
        assert!(validate_email("a b@school.com").is_err());
    }

    #[test]
    fn test_normalize_qualification() {
        assert_eq!(normalize_qualification("bsc"), Ok("BSc"));
        assert_eq!(normalize_qualification("MSC M.ED"), Ok("MSc M.ed"));
        let err = normalize_qualification("phd").unwrap_err();
        assert!(err.contains("phd"));
    }

    #[test]
    fn test_grade_name() {
        assert_eq!(validate_grade_name(" Fifth "), Ok("Fifth".to_string()));
        assert!(validate_grade_name("   ").is_err());
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("hELLO"), "Hello");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("a"), "A");
    }
}
