//! 服务错误定义

use salesdesk_errors::AppError;
use thiserror::Error;

/// 入参校验错误，统一映射为 400
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Missing required parameters: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Invalid {field}: {value:?}")]
    InvalidValue { field: &'static str, value: String },

    #[error("Unknown {field} value: {value:?}")]
    UnknownLabel { field: &'static str, value: String },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("Insufficient filter parameters: expected sales_date and location_id, or sales_date_from and sales_date_until")]
    InsufficientFilter,

    #[error("No update fields provided")]
    NoUpdateFields,
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        AppError::validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message() {
        let err = DomainError::MissingFields(vec!["sales_date", "amount"]);
        assert_eq!(
            err.to_string(),
            "Missing required parameters: sales_date, amount"
        );
    }

    #[test]
    fn test_domain_error_maps_to_bad_request() {
        let app: AppError = DomainError::NoUpdateFields.into();
        assert_eq!(app.status_code(), 400);
        assert_eq!(app.message(), "No update fields provided");
    }
}
