//! 表结构与初始数据

use salesdesk_adapter_postgres::SchemaBootstrap;

const CREATE_EMPLOYEES: &str = r#"
CREATE TABLE IF NOT EXISTS employees (
    employee_number   INTEGER PRIMARY KEY,
    employee_name     VARCHAR(100) NOT NULL,
    location_id       INTEGER NOT NULL,
    employee_role     VARCHAR(50) NOT NULL,
    employee_address  VARCHAR(255) UNIQUE,
    employee_password VARCHAR(255)
)
"#;

// employee_number 不加外键：读取时 LEFT JOIN 员工表
const CREATE_SALES_REPORT: &str = r#"
CREATE TABLE IF NOT EXISTS sales_report (
    id              BIGSERIAL PRIMARY KEY,
    sales_date      DATE NOT NULL,
    location_id     INTEGER NOT NULL,
    amount          BIGINT NOT NULL,
    sales_channel   VARCHAR(8) NOT NULL
        CHECK (sales_channel IN ('SM', 'HC', 'CVS', 'DRUG', 'EC')),
    category        VARCHAR(16) NOT NULL
        CHECK (category IN ('Drink', 'Alcohol', 'Food', 'Other')),
    tactics         VARCHAR(16) NOT NULL
        CHECK (tactics IN ('Chirashi', 'End', 'Kikaku')),
    employee_number INTEGER NOT NULL,
    memo            VARCHAR(300)
)
"#;

const CREATE_SALES_REPORT_INDEX: &str = r#"
CREATE INDEX IF NOT EXISTS idx_sales_report_date_location
    ON sales_report (sales_date, location_id)
"#;

const CREATE_SALES_TARGET: &str = r#"
CREATE TABLE IF NOT EXISTS sales_target (
    id            BIGSERIAL PRIMARY KEY,
    target_date   DATE NOT NULL,
    location_id   INTEGER NOT NULL,
    target_amount BIGINT NOT NULL,
    actual_amount BIGINT,
    memo          VARCHAR(300)
)
"#;

const SEED_SALES_REPORT: &str = r#"
INSERT INTO sales_report
    (sales_date, location_id, amount, sales_channel, category, tactics, employee_number, memo)
VALUES
    ('2025-03-02', 1, 40000, 'SM', 'Drink', 'Chirashi', 0, '')
"#;

/// 启动时执行的建表计划
pub fn bootstrap_plan(seed_demo_data: bool) -> SchemaBootstrap {
    let plan = SchemaBootstrap::new()
        .with_step("employees", CREATE_EMPLOYEES)
        .with_step("sales_report", CREATE_SALES_REPORT)
        .with_step("sales_report date/location index", CREATE_SALES_REPORT_INDEX)
        .with_step("sales_target", CREATE_SALES_TARGET);

    if seed_demo_data {
        plan.with_seed("demo sales report", "sales_report", SEED_SALES_REPORT)
    } else {
        plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_creates_tables_before_index() {
        let plan = bootstrap_plan(true);
        let names: Vec<_> = plan.steps().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "employees",
                "sales_report",
                "sales_report date/location index",
                "sales_target"
            ]
        );
        assert!(plan.steps().iter().all(|s| s.sql.contains("IF NOT EXISTS")));
    }

    #[test]
    fn test_seed_is_optional() {
        assert_eq!(bootstrap_plan(true).seeds().len(), 1);
        assert_eq!(bootstrap_plan(true).seeds()[0].table, "sales_report");
        assert!(bootstrap_plan(false).seeds().is_empty());
    }

    #[test]
    fn test_check_constraints_match_labels() {
        use crate::domain::{Category, SalesChannel, Tactic};

        for channel in SalesChannel::ALL {
            assert!(CREATE_SALES_REPORT.contains(&format!("'{}'", channel)));
        }
        for category in Category::ALL {
            assert!(CREATE_SALES_REPORT.contains(&format!("'{}'", category)));
        }
        for tactic in Tactic::ALL {
            assert!(CREATE_SALES_REPORT.contains(&format!("'{}'", tactic)));
        }
    }
}
