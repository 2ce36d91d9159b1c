// ==========================================
// 光纤入户排程系统 - 户号楼层解析引擎
// ==========================================
// 职责: 按固定优先级从户数据中解析楼层
// 输入: Unit
// 输出: Option<楼层>（None 表示无法解析）
// ==========================================

use crate::domain::unit::{non_blank, Unit};
use serde::{Deserialize, Serialize};

use super::rules::{
    clean_token, identifier_to_floor, search_key_tail, search_key_trailing_digits,
};

// ==========================================
// FloorSource - 楼层来源策略
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FloorSource {
    UnitSuffix,       // 户号后缀
    SearchKeyTail,    // searchKey 最后一段
    SearchKeyPattern, // searchKey 末尾数字
}

impl FloorSource {
    /// 解析优先级（递减）
    pub const PRIORITY: [FloorSource; 3] = [
        FloorSource::UnitSuffix,
        FloorSource::SearchKeyTail,
        FloorSource::SearchKeyPattern,
    ];

    /// 单一策略解析, 互不依赖
    pub fn extract(&self, unit: &Unit) -> Option<u32> {
        match self {
            FloorSource::UnitSuffix => unit.unit_suffix.as_deref().and_then(identifier_to_floor),
            FloorSource::SearchKeyTail => unit
                .search_key
                .as_deref()
                .and_then(search_key_tail)
                .and_then(identifier_to_floor),
            FloorSource::SearchKeyPattern => unit
                .search_key
                .as_deref()
                .and_then(search_key_trailing_digits)
                .and_then(identifier_to_floor),
        }
    }
}

/// 命中的楼层及其来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorReading {
    pub floor: u32,
    pub source: FloorSource,
}

// ==========================================
// IdentifierFloorExtractor - 户号楼层解析引擎
// ==========================================
#[derive(Debug, Clone)]
pub struct IdentifierFloorExtractor {
    sources: Vec<FloorSource>,
}

impl Default for IdentifierFloorExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentifierFloorExtractor {
    pub fn new() -> Self {
        Self {
            sources: FloorSource::PRIORITY.to_vec(),
        }
    }

    /// 解析楼层（首个命中的策略生效）
    pub fn extract_floor(&self, unit: &Unit) -> Option<u32> {
        self.extract_reading(unit).map(|r| r.floor)
    }

    /// 解析楼层并返回命中来源
    pub fn extract_reading(&self, unit: &Unit) -> Option<FloorReading> {
        self.sources.iter().find_map(|source| {
            source
                .extract(unit)
                .map(|floor| FloorReading { floor, source: *source })
        })
    }

    /// 户的显示标识: 后缀优先, 否则 searchKey 最后一段
    pub fn unit_label(&self, unit: &Unit) -> Option<String> {
        non_blank(unit.unit_suffix.as_deref())
            .or_else(|| unit.search_key.as_deref().and_then(search_key_tail))
            .map(clean_token)
            .filter(|label| !label.is_empty())
    }
}
