// ==========================================
// 光纤入户排程系统 - 完工汇总引擎
// ==========================================
// 职责: 户级判定 → 楼栋级 / 集合级完工统计
// 红线: 所有汇总路径共用同一个 CompletionEvaluator
// ==========================================

use crate::config::EngineConfig;
use crate::domain::building::Building;
use crate::domain::stats::AggregateStats;
use crate::domain::types::BuildingCategory;
use crate::domain::unit::Unit;
use crate::engine::classifier::BuildingClassifier;
use crate::engine::completion::CompletionEvaluator;
use std::collections::BTreeMap;
use tracing::instrument;

#[derive(Debug, Clone, Default)]
pub struct AggregationEngine {
    evaluator: CompletionEvaluator,
}

impl AggregationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::with_evaluator(CompletionEvaluator::from_config(config))
    }

    pub fn with_evaluator(evaluator: CompletionEvaluator) -> Self {
        Self { evaluator }
    }

    pub fn evaluator(&self) -> &CompletionEvaluator {
        &self.evaluator
    }

    /// 户级汇总（其余汇总的唯一入口）
    pub fn aggregate_units<'a, I>(&self, units: I) -> AggregateStats
    where
        I: IntoIterator<Item = &'a Unit>,
    {
        let (total, completed) = units.into_iter().fold((0usize, 0usize), |(total, done), u| {
            (total + 1, done + usize::from(self.evaluator.is_completed(u)))
        });
        AggregateStats::new(total, completed)
    }

    /// 单楼栋汇总
    pub fn aggregate_building(&self, building: &Building) -> AggregateStats {
        self.aggregate_units(&building.units)
    }

    /// 楼栋集合汇总
    #[instrument(skip(self, buildings), fields(count = buildings.len()))]
    pub fn aggregate(&self, buildings: &[Building]) -> AggregateStats {
        self.aggregate_units(buildings.iter().flat_map(|b| b.units.iter()))
    }

    /// 楼栋引用集合汇总（用于筛选结果）
    pub fn aggregate_refs(&self, buildings: &[&Building]) -> AggregateStats {
        self.aggregate_units(buildings.iter().flat_map(|b| b.units.iter()))
    }

    /// 按楼栋类型分组汇总（空楼栋不归入任何类型）
    #[instrument(skip(self, classifier, buildings), fields(count = buildings.len()))]
    pub fn aggregate_by_category(
        &self,
        classifier: &BuildingClassifier,
        buildings: &[Building],
    ) -> BTreeMap<BuildingCategory, AggregateStats> {
        let mut grouped: BTreeMap<BuildingCategory, AggregateStats> = BuildingCategory::ALL
            .iter()
            .map(|c| (*c, AggregateStats::default()))
            .collect();

        for building in buildings {
            if let Some(category) = classifier.classify(building).category {
                let stats = self.aggregate_building(building);
                grouped
                    .entry(category)
                    .and_modify(|acc| *acc = acc.merge(stats))
                    .or_insert(stats);
            }
        }

        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(suffix: &str, status: Option<&str>) -> Unit {
        Unit {
            unit_suffix: Some(suffix.to_string()),
            completion_status: status.map(|s| s.to_string()),
            ..Unit::default()
        }
    }

    fn building(units: Vec<Unit>) -> Building {
        Building {
            units,
            ..Building::default()
        }
    }

    #[test]
    fn test_empty_collection() {
        let engine = AggregationEngine::new();
        assert_eq!(engine.aggregate(&[]), AggregateStats::new(0, 0));
        assert_eq!(engine.aggregate(&[Building::default()]).percentage, 0.0);
    }

    #[test]
    fn test_all_completed_is_exactly_100() {
        let engine = AggregationEngine::new();
        let buildings = vec![
            building(vec![unit("1", Some("COMPLETED")), unit("2", Some("COMPLETED"))]),
            building(vec![unit("H", Some("COMPLETED"))]),
        ];
        let stats = engine.aggregate(&buildings);
        assert_eq!(stats.total_units, 3);
        assert_eq!(stats.completed_units, 3);
        assert_eq!(stats.percentage, 100.0);
    }

    #[test]
    fn test_subset_composes_with_merge() {
        let engine = AggregationEngine::new();
        let buildings = vec![
            building(vec![unit("1", Some("COMPLETED")), unit("2", None)]),
            building(vec![unit("1", None), unit("2", None), unit("3", Some("COMPLETED"))]),
        ];

        let whole = engine.aggregate(&buildings);
        let merged = engine
            .aggregate_building(&buildings[0])
            .merge(engine.aggregate_building(&buildings[1]));
        assert_eq!(whole, merged);
        assert_eq!(whole.percentage, 40.0);

        let subset: Vec<&Building> = buildings.iter().take(1).collect();
        assert_eq!(engine.aggregate_refs(&subset), engine.aggregate_building(&buildings[0]));
    }

    #[test]
    fn test_aggregate_by_category() {
        let engine = AggregationEngine::new();
        let classifier = BuildingClassifier::new();
        let buildings = vec![
            building(vec![unit("H", Some("COMPLETED"))]),
            building(vec![unit("1", None), unit("2", None), unit("3", Some("COMPLETED"))]),
            building(vec![unit("4", None), unit("5", None), unit("6", None)]),
            Building::default(),
        ];

        let grouped = engine.aggregate_by_category(&classifier, &buildings);
        assert_eq!(grouped[&BuildingCategory::LaagBouw], AggregateStats::new(1, 1));
        assert_eq!(grouped[&BuildingCategory::Duplex], AggregateStats::default());
        assert_eq!(grouped[&BuildingCategory::HoogBouw], AggregateStats::new(6, 1));
        assert_eq!(grouped[&BuildingCategory::HoogBouw].percentage, 16.67);
    }
}
