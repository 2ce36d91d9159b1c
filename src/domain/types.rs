// ==========================================
// 光纤入户排程系统 - 领域类型定义
// ==========================================
// 楼栋类型 / 筛选键 / 楼层估算方式
// ==========================================

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 楼栋类型 (Building Category)
// ==========================================
// 由楼层数决定: 1 → LaagBouw, 2 → Duplex, >=3 → HoogBouw
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BuildingCategory {
    LaagBouw, // 低层
    Duplex,   // 双层
    HoogBouw, // 高层
}

impl BuildingCategory {
    /// 全部类型（按楼层递增）
    pub const ALL: [BuildingCategory; 3] = [
        BuildingCategory::LaagBouw,
        BuildingCategory::Duplex,
        BuildingCategory::HoogBouw,
    ];
}

impl fmt::Display for BuildingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildingCategory::LaagBouw => write!(f, "LaagBouw"),
            BuildingCategory::Duplex => write!(f, "Duplex"),
            BuildingCategory::HoogBouw => write!(f, "HoogBouw"),
        }
    }
}

// ==========================================
// 筛选键 (Filter Key)
// ==========================================
// 序列化格式与前端筛选按钮一致
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FilterKey {
    #[serde(rename = "all")]
    All,
    #[serde(rename = "fileUrl")]
    FileUrl,
    #[serde(rename = "laagBouw")]
    LaagBouw,
    #[serde(rename = "duplex")]
    Duplex,
    #[serde(rename = "HB")]
    HoogBouw,
    #[serde(rename = "appointment")]
    Appointment,
    #[serde(rename = "done")]
    Done,
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "noAppointment")]
    NoAppointment,
    #[serde(rename = "blocked")]
    Blocked,
}

impl FilterKey {
    /// 全部筛选键（徽标计数按此顺序输出）
    pub const ALL: [FilterKey; 10] = [
        FilterKey::All,
        FilterKey::FileUrl,
        FilterKey::LaagBouw,
        FilterKey::Duplex,
        FilterKey::HoogBouw,
        FilterKey::Appointment,
        FilterKey::Done,
        FilterKey::Pending,
        FilterKey::NoAppointment,
        FilterKey::Blocked,
    ];

    /// 筛选键的外部名称
    pub fn as_key(&self) -> &'static str {
        match self {
            FilterKey::All => "all",
            FilterKey::FileUrl => "fileUrl",
            FilterKey::LaagBouw => "laagBouw",
            FilterKey::Duplex => "duplex",
            FilterKey::HoogBouw => "HB",
            FilterKey::Appointment => "appointment",
            FilterKey::Done => "done",
            FilterKey::Pending => "pending",
            FilterKey::NoAppointment => "noAppointment",
            FilterKey::Blocked => "blocked",
        }
    }

    /// 分类筛选键对应的楼栋类型
    pub fn category(&self) -> Option<BuildingCategory> {
        match self {
            FilterKey::LaagBouw => Some(BuildingCategory::LaagBouw),
            FilterKey::Duplex => Some(BuildingCategory::Duplex),
            FilterKey::HoogBouw => Some(BuildingCategory::HoogBouw),
            _ => None,
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

impl FromStr for FilterKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        FilterKey::ALL
            .iter()
            .copied()
            .find(|k| k.as_key() == key)
            .ok_or_else(|| DomainError::UnknownFilterKey(key.to_string()))
    }
}

// ==========================================
// 楼层估算方式 (Estimate Method)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EstimateMethod {
    Empty,             // 无户
    Identifiers,       // 由户号解析
    UnitCountFallback, // 户数估算
}

impl fmt::Display for EstimateMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstimateMethod::Empty => write!(f, "EMPTY"),
            EstimateMethod::Identifiers => write!(f, "IDENTIFIERS"),
            EstimateMethod::UnitCountFallback => write!(f, "UNIT_COUNT_FALLBACK"),
        }
    }
}
