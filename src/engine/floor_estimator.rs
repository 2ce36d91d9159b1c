// ==========================================
// 光纤入户排程系统 - 楼栋楼层估算引擎
// ==========================================
// 职责: 汇总各户楼层 → 楼栋楼层数
// 输入: 楼栋全部户
// 输出: FloorEstimate（有户时楼层数 >= 1）
// ==========================================
// 回退规则（无任何户可解析时）:
// 1) 1 户 → 1 层
// 2) 2 户 → 横向成对(A/B, L/R, LINKS/RECHTS)或相邻单个数字 → 1 层, 否则 2 层
// 3) 3~4 户 → min(2, ceil(n/2))
// 4) >= 5 户 → ceil(n / 每层户数)
// ==========================================

use crate::config::EngineConfig;
use crate::domain::classification::FloorEstimate;
use crate::domain::types::EstimateMethod;
use crate::domain::unit::Unit;
use crate::engine::floor_extractor::IdentifierFloorExtractor;
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// 已知横向成对标识
const HORIZONTAL_PAIRS: &[(&str, &str)] = &[("A", "B"), ("L", "R"), ("LINKS", "RECHTS")];

// ==========================================
// BuildingFloorEstimator - 楼层估算引擎
// ==========================================
#[derive(Debug, Clone)]
pub struct BuildingFloorEstimator {
    extractor: IdentifierFloorExtractor,
    units_per_floor: f64,
}

impl Default for BuildingFloorEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildingFloorEstimator {
    pub fn new() -> Self {
        Self::from_config(&EngineConfig::default())
    }

    /// 每层户数非正或非有限时退回默认值
    pub fn from_config(config: &EngineConfig) -> Self {
        let ratio = config.fallback_units_per_floor;
        let units_per_floor = if ratio.is_finite() && ratio > 0.0 {
            ratio
        } else {
            let default_ratio = EngineConfig::default().fallback_units_per_floor;
            warn!(ratio = ratio, default_ratio = default_ratio, "每层户数无效, 使用默认值");
            default_ratio
        };

        Self {
            extractor: IdentifierFloorExtractor::new(),
            units_per_floor,
        }
    }

    /// 估算楼层
    pub fn estimate(&self, units: &[Unit]) -> FloorEstimate {
        if units.is_empty() {
            return FloorEstimate::empty();
        }

        let floors: BTreeSet<u32> = units
            .iter()
            .filter_map(|u| self.extractor.extract_floor(u))
            .collect();

        if !floors.is_empty() {
            return FloorEstimate {
                floor_count: floors.len() as u32,
                method: EstimateMethod::Identifiers,
                floors,
            };
        }

        let floor_count = self.estimate_from_unit_count(units);
        debug!(
            unit_count = units.len(),
            floor_count = floor_count,
            "户号均无法解析, 按户数估算楼层"
        );

        FloorEstimate {
            floor_count,
            method: EstimateMethod::UnitCountFallback,
            floors: BTreeSet::new(),
        }
    }

    /// 楼层数
    pub fn floor_count(&self, units: &[Unit]) -> u32 {
        self.estimate(units).floor_count
    }

    /// 户数回退估算（不看户号能否解析）
    pub fn estimate_from_unit_count(&self, units: &[Unit]) -> u32 {
        match units.len() {
            0 => 0,
            1 => 1,
            2 => {
                if self.is_horizontal_pair(&units[0], &units[1]) {
                    1
                } else {
                    2
                }
            }
            n @ 3..=4 => std::cmp::min(2, n.div_ceil(2) as u32),
            n => ((n as f64 / self.units_per_floor).ceil() as u32).max(1),
        }
    }

    /// 两户是否位于同一层（横向成对）
    fn is_horizontal_pair(&self, a: &Unit, b: &Unit) -> bool {
        let (Some(a), Some(b)) = (self.extractor.unit_label(a), self.extractor.unit_label(b)) else {
            return false;
        };

        let known_pair = HORIZONTAL_PAIRS
            .iter()
            .any(|(x, y)| (a == *x && b == *y) || (a == *y && b == *x));
        if known_pair {
            return true;
        }

        match (single_digit(&a), single_digit(&b)) {
            (Some(x), Some(y)) => x.abs_diff(y) == 1,
            _ => false,
        }
    }
}

fn single_digit(label: &str) -> Option<u32> {
    let mut chars = label.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.to_digit(10),
        _ => None,
    }
}
