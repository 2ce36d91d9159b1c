// ==========================================
// 光纤入户排程系统 - 完工统计值对象
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// UnitCompletion - 单户完工/预约判定
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitCompletion {
    /// 已完工（状态码为完工 或 附带签名/报告）
    pub completed: bool,

    /// 已预约（任一预约记录带预约时间）
    pub has_appointment: bool,
}

// ==========================================
// AggregateStats - 完工汇总
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateStats {
    pub total_units: usize,
    pub completed_units: usize,

    /// 完工百分比（保留两位小数, 无户时为 0）
    pub percentage: f64,
}

impl AggregateStats {
    pub fn new(total_units: usize, completed_units: usize) -> Self {
        Self {
            total_units,
            completed_units,
            percentage: completion_percentage(total_units, completed_units),
        }
    }

    /// 合并两份汇总（百分比按合并后的户数重算）
    pub fn merge(self, other: AggregateStats) -> AggregateStats {
        AggregateStats::new(
            self.total_units + other.total_units,
            self.completed_units + other.completed_units,
        )
    }
}

/// 完工百分比, 四舍五入到两位小数
pub fn completion_percentage(total_units: usize, completed_units: usize) -> f64 {
    if total_units == 0 {
        return 0.0;
    }
    let raw = completed_units as f64 / total_units as f64 * 100.0;
    (raw * 100.0).round() / 100.0
}
