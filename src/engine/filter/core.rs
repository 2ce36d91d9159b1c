// ==========================================
// 光纤入户排程系统 - 楼栋筛选引擎
// ==========================================
// 职责: 文本检索 + 命名筛选 + 各筛选键计数
// 输入: 楼栋集合 + 检索文本 + 筛选键
// 输出: 命中楼栋引用 / FilterCounts
// ==========================================

use crate::config::EngineConfig;
use crate::domain::building::Building;
use crate::domain::types::FilterKey;
use crate::engine::classifier::BuildingClassifier;
use crate::engine::completion::CompletionEvaluator;
use tracing::{debug, instrument};

use super::report::FilterCounts;

// ==========================================
// FilterEngine - 楼栋筛选引擎
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
    classifier: BuildingClassifier,
    evaluator: CompletionEvaluator,
}

impl FilterEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            classifier: BuildingClassifier::from_config(config),
            evaluator: CompletionEvaluator::from_config(config),
        }
    }

    // ==========================================
    // 文本检索
    // ==========================================

    /// 地址或任一户的小区名包含检索文本（忽略大小写, 空文本全部命中）
    pub fn matches_query(&self, building: &Building, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        building.address.to_lowercase().contains(&needle)
            || building.units.iter().any(|u| {
                u.complex_name
                    .as_deref()
                    .is_some_and(|name| name.to_lowercase().contains(&needle))
            })
    }

    pub fn search<'a>(&self, buildings: &'a [Building], query: &str) -> Vec<&'a Building> {
        buildings
            .iter()
            .filter(|b| self.matches_query(b, query))
            .collect()
    }

    // ==========================================
    // 命名筛选
    // ==========================================

    /// 单个筛选键判定（筛选与计数共用）
    pub fn matches(&self, building: &Building, key: FilterKey) -> bool {
        match key {
            FilterKey::All => true,
            FilterKey::FileUrl => building.has_file(),
            FilterKey::LaagBouw | FilterKey::Duplex | FilterKey::HoogBouw => {
                self.classifier.classify(building).category == key.category()
            }
            FilterKey::Appointment => building
                .units
                .iter()
                .any(|u| self.evaluator.has_appointment(u)),
            FilterKey::Done => {
                !building.is_empty()
                    && building.units.iter().all(|u| self.evaluator.is_completed(u))
            }
            FilterKey::Pending => building
                .units
                .iter()
                .any(|u| !self.evaluator.is_completed(u)),
            FilterKey::NoAppointment => !building
                .units
                .iter()
                .any(|u| self.evaluator.has_appointment(u)),
            FilterKey::Blocked => building.blocked,
        }
    }

    /// 对已检索的楼栋应用单个筛选键
    pub fn apply<'a>(&self, buildings: &[&'a Building], key: FilterKey) -> Vec<&'a Building> {
        buildings
            .iter()
            .copied()
            .filter(|b| self.matches(b, key))
            .collect()
    }

    /// 先文本检索, 再应用筛选键
    #[instrument(skip(self, buildings), fields(count = buildings.len()))]
    pub fn filter<'a>(
        &self,
        buildings: &'a [Building],
        query: &str,
        key: FilterKey,
    ) -> Vec<&'a Building> {
        let searched = self.search(buildings, query);
        let result = self.apply(&searched, key);
        debug!(searched = searched.len(), matched = result.len(), "楼栋筛选完成");
        result
    }

    /// 指定检索文本下各筛选键的结果数
    #[instrument(skip(self, buildings), fields(count = buildings.len()))]
    pub fn counts(&self, buildings: &[Building], query: &str) -> FilterCounts {
        let searched = self.search(buildings, query);

        let mut counts = FilterCounts::default();
        for key in FilterKey::ALL {
            counts.insert(key, self.apply(&searched, key).len());
        }
        counts
    }
}
