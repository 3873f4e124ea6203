//! 売上报告实体与枚举

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::DomainError;

/// 备注最大长度（字符数）
pub const MEMO_MAX_CHARS: usize = 300;

/// 销售渠道
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SalesChannel {
    #[serde(rename = "SM")]
    Sm,
    #[serde(rename = "HC")]
    Hc,
    #[serde(rename = "CVS")]
    Cvs,
    #[serde(rename = "DRUG")]
    Drug,
    #[serde(rename = "EC")]
    Ec,
}

impl SalesChannel {
    pub const ALL: [SalesChannel; 5] = [Self::Sm, Self::Hc, Self::Cvs, Self::Drug, Self::Ec];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sm => "SM",
            Self::Hc => "HC",
            Self::Cvs => "CVS",
            Self::Drug => "DRUG",
            Self::Ec => "EC",
        }
    }
}

impl FromStr for SalesChannel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(label))
            .ok_or_else(|| DomainError::UnknownLabel {
                field: "sales_channel",
                value: s.to_string(),
            })
    }
}

/// 商品分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Drink,
    Alcohol,
    Food,
    Other,
}

impl Category {
    pub const ALL: [Category; 4] = [Self::Drink, Self::Alcohol, Self::Food, Self::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Drink => "Drink",
            Self::Alcohol => "Alcohol",
            Self::Food => "Food",
            Self::Other => "Other",
        }
    }

    /// 前端使用的日文标签
    fn japanese_label(&self) -> &'static str {
        match self {
            Self::Drink => "飲料",
            Self::Alcohol => "酒類",
            Self::Food => "食品",
            Self::Other => "その他",
        }
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(label) || c.japanese_label() == label)
            .ok_or_else(|| DomainError::UnknownLabel {
                field: "category",
                value: s.to_string(),
            })
    }
}

/// 促销手段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tactic {
    /// 传单
    Chirashi,
    /// 端架陈列
    End,
    /// 企划促销
    Kikaku,
}

impl Tactic {
    pub const ALL: [Tactic; 3] = [Self::Chirashi, Self::End, Self::Kikaku];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chirashi => "Chirashi",
            Self::End => "End",
            Self::Kikaku => "Kikaku",
        }
    }

    fn japanese_label(&self) -> &'static str {
        match self {
            Self::Chirashi => "チラシ",
            Self::End => "エンド",
            Self::Kikaku => "企画",
        }
    }
}

impl FromStr for Tactic {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(label) || t.japanese_label() == label)
            .ok_or_else(|| DomainError::UnknownLabel {
                field: "tactics",
                value: s.to_string(),
            })
    }
}

macro_rules! display_as_label {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_label!(SalesChannel, Category, Tactic);

/// 一条销售记录，读取时附带员工姓名
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalesReport {
    pub id: i64,
    pub sales_date: NaiveDate,
    pub location_id: i32,
    pub amount: i64,
    pub sales_channel: SalesChannel,
    pub category: Category,
    pub tactics: Tactic,
    pub employee_number: i32,
    pub memo: Option<String>,
    pub employee_name: Option<String>,
}

/// 待写入的销售记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSalesReport {
    pub sales_date: NaiveDate,
    pub location_id: i32,
    pub amount: i64,
    pub sales_channel: SalesChannel,
    pub category: Category,
    pub tactics: Tactic,
    pub employee_number: i32,
    pub memo: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_labels() {
        assert_eq!("SM".parse::<SalesChannel>().unwrap(), SalesChannel::Sm);
        assert_eq!("drug".parse::<SalesChannel>().unwrap(), SalesChannel::Drug);
        assert_eq!(SalesChannel::Cvs.to_string(), "CVS");
        assert!(matches!(
            "GMS".parse::<SalesChannel>(),
            Err(DomainError::UnknownLabel { field: "sales_channel", .. })
        ));
    }

    #[test]
    fn test_category_accepts_japanese_labels() {
        assert_eq!("飲料".parse::<Category>().unwrap(), Category::Drink);
        assert_eq!("酒類".parse::<Category>().unwrap(), Category::Alcohol);
        assert_eq!("食品".parse::<Category>().unwrap(), Category::Food);
        assert_eq!("その他".parse::<Category>().unwrap(), Category::Other);
        assert_eq!("Food".parse::<Category>().unwrap(), Category::Food);
        assert!("Snack".parse::<Category>().is_err());
    }

    #[test]
    fn test_tactic_accepts_japanese_labels() {
        assert_eq!("チラシ".parse::<Tactic>().unwrap(), Tactic::Chirashi);
        assert_eq!("エンド".parse::<Tactic>().unwrap(), Tactic::End);
        assert_eq!("企画".parse::<Tactic>().unwrap(), Tactic::Kikaku);
        assert!("Coupon".parse::<Tactic>().is_err());
    }

    #[test]
    fn test_report_serializes_labels_and_iso_date() {
        let report = SalesReport {
            id: 1,
            sales_date: NaiveDate::from_ymd_opt(2025, 3, 2).unwrap(),
            location_id: 1,
            amount: 40000,
            sales_channel: SalesChannel::Sm,
            category: Category::Drink,
            tactics: Tactic::Chirashi,
            employee_number: 0,
            memo: Some(String::new()),
            employee_name: None,
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["sales_date"], "2025-03-02");
        assert_eq!(json["sales_channel"], "SM");
        assert_eq!(json["category"], "Drink");
        assert_eq!(json["tactics"], "Chirashi");
        assert_eq!(json["employee_name"], serde_json::Value::Null);
    }
}
