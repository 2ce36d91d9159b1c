// ==========================================
// 光纤入户排程系统 - 楼层估算与楼栋分类值对象
// ==========================================
// 派生值, 不持久化, 每次按当前户数据重新计算
// ==========================================

use crate::domain::types::{BuildingCategory, EstimateMethod};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ==========================================
// FloorEstimate - 楼层估算结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorEstimate {
    /// 楼层数（有户时 >= 1, 无户时为 0）
    pub floor_count: u32,

    /// 估算方式
    pub method: EstimateMethod,

    /// 由户号解析出的不同楼层（回退估算时为空）
    pub floors: BTreeSet<u32>,
}

impl FloorEstimate {
    pub fn empty() -> Self {
        Self {
            floor_count: 0,
            method: EstimateMethod::Empty,
            floors: BTreeSet::new(),
        }
    }

    /// 是否使用了户数回退估算
    pub fn is_fallback(&self) -> bool {
        self.method == EstimateMethod::UnitCountFallback
    }
}

// ==========================================
// Classification - 楼栋分类
// ==========================================
// 不变量: floor_count == 0 ⇔ category == None
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub category: Option<BuildingCategory>,
    pub floor_count: u32,
}

impl Classification {
    /// 空楼栋的分类结果
    pub fn unclassified() -> Self {
        Self {
            category: None,
            floor_count: 0,
        }
    }

    pub fn is(&self, category: BuildingCategory) -> bool {
        self.category == Some(category)
    }
}
