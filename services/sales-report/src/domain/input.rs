//! 请求参数的通用解析
//!
//! 空字符串与纯空白视为未提供。

use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::DomainError;

/// 日期格式 YYYY-MM-DD
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 去掉首尾空白，空值返回 None
pub fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// 一次性检查多个必填字段，返回全部缺失的字段名
pub fn require_all(fields: &[(&'static str, Option<&str>)]) -> Result<(), DomainError> {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| present(*value).is_none())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(DomainError::MissingFields(missing))
    }
}

/// 必填字段
pub fn required<'a>(field: &'static str, value: Option<&'a str>) -> Result<&'a str, DomainError> {
    present(value).ok_or_else(|| DomainError::MissingFields(vec![field]))
}

pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| DomainError::InvalidValue {
        field,
        value: value.to_string(),
    })
}

pub fn parse_number<T: FromStr>(field: &'static str, value: &str) -> Result<T, DomainError> {
    value.trim().parse().map_err(|_| DomainError::InvalidValue {
        field,
        value: value.to_string(),
    })
}

/// 可选文本，超长报错
pub fn optional_text(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<Option<String>, DomainError> {
    match present(value) {
        Some(text) if text.chars().count() > max => Err(DomainError::TooLong { field, max }),
        Some(text) => Ok(Some(text.to_string())),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_treats_blank_as_absent() {
        assert_eq!(present(None), None);
        assert_eq!(present(Some("")), None);
        assert_eq!(present(Some("   ")), None);
        assert_eq!(present(Some(" 1 ")), Some("1"));
    }

    #[test]
    fn test_require_all_lists_every_missing_field() {
        let result = require_all(&[
            ("sales_date", Some("2025-03-02")),
            ("location_id", None),
            ("amount", Some("")),
        ]);
        assert_eq!(
            result,
            Err(DomainError::MissingFields(vec!["location_id", "amount"]))
        );
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("sales_date", "2025-03-02").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 2).unwrap()
        );
        assert!(parse_date("sales_date", "2025/03/02").is_err());
        assert!(parse_date("sales_date", "2025-02-30").is_err());
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number::<i32>("location_id", " 12 ").unwrap(), 12);
        assert!(matches!(
            parse_number::<i32>("location_id", "tokyo"),
            Err(DomainError::InvalidValue { field: "location_id", .. })
        ));
    }

    #[test]
    fn test_optional_text_length() {
        assert_eq!(optional_text("memo", Some(""), 300).unwrap(), None);
        assert_eq!(
            optional_text("memo", Some("展示会"), 3).unwrap(),
            Some("展示会".to_string())
        );
        assert_eq!(
            optional_text("memo", Some("展示会売上"), 3),
            Err(DomainError::TooLong { field: "memo", max: 3 })
        );
    }
}
