// ==========================================
// 光纤入户排程系统 - 楼栋 (Building) 实体
// ==========================================

use crate::domain::unit::{non_blank, Unit};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Building {
    /// 户列表（保持原始顺序）
    #[serde(default)]
    pub units: Vec<Unit>,

    /// 楼栋地址
    #[serde(default)]
    pub address: String,

    /// 楼栋级文件
    #[serde(default)]
    pub file_url: Option<String>,

    /// 是否被冻结
    #[serde(default)]
    pub blocked: bool,
}

impl Building {
    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// 楼栋本身或任一户附带文件
    pub fn has_file(&self) -> bool {
        non_blank(self.file_url.as_deref()).is_some() || self.units.iter().any(Unit::has_file)
    }
}
