//! sqlx 错误分类
//!
//! 连接类故障归为 `StoreUnavailable`，语句类故障归为 `StoreRejected`。
//! 错误信息只带操作名，不带连接参数。

use salesdesk_errors::AppError;

/// 生成 `map_err` 用的闭包
pub fn map_sqlx_error(operation: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |err| classify_sqlx_error(operation, err)
}

/// 按故障类型转换 sqlx 错误
pub fn classify_sqlx_error(operation: &str, err: sqlx::Error) -> AppError {
    match err {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => {
            AppError::store_unavailable(format!("{}: {}", operation, err))
        }
        other => AppError::store_rejected(format!("{}: {}", operation, other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_faults_are_unavailable() {
        let io = sqlx::Error::Io(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        ));
        assert!(matches!(
            classify_sqlx_error("list employees", io),
            AppError::StoreUnavailable(_)
        ));
        assert!(matches!(
            classify_sqlx_error("list employees", sqlx::Error::PoolTimedOut),
            AppError::StoreUnavailable(_)
        ));
        assert!(matches!(
            classify_sqlx_error("list employees", sqlx::Error::PoolClosed),
            AppError::StoreUnavailable(_)
        ));
    }

    #[test]
    fn test_statement_faults_are_rejected() {
        let err = classify_sqlx_error(
            "insert sales report",
            sqlx::Error::ColumnNotFound("employee_name".to_string()),
        );
        assert!(matches!(err, AppError::StoreRejected(_)));
        assert_eq!(err.status_code(), 500);

        assert!(matches!(
            classify_sqlx_error("find employee", sqlx::Error::RowNotFound),
            AppError::StoreRejected(_)
        ));
    }

    #[test]
    fn test_message_carries_operation() {
        let err = map_sqlx_error("delete employee")(sqlx::Error::PoolTimedOut);
        assert!(err.message().starts_with("delete employee: "));
    }
}
