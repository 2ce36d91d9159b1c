use crate::domain::types::FilterKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// FilterCounts - 各筛选键的结果数（筛选按钮徽标）
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterCounts {
    counts: BTreeMap<FilterKey, usize>,
}

impl FilterCounts {
    pub(crate) fn insert(&mut self, key: FilterKey, count: usize) {
        self.counts.insert(key, count);
    }

    /// 指定筛选键的结果数（未计算的键为 0）
    pub fn get(&self, key: FilterKey) -> usize {
        self.counts.get(&key).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FilterKey, usize)> + '_ {
        self.counts.iter().map(|(k, v)| (*k, *v))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
