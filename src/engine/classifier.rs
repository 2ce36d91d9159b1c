// ==========================================
// 光纤入户排程系统 - 楼栋分类引擎
// ==========================================
// 规则: 1 层 → LaagBouw, 2 层 → Duplex, >= 3 层 → HoogBouw
// 空楼栋: 楼层数 0, 无分类
// ==========================================

use crate::config::EngineConfig;
use crate::domain::building::Building;
use crate::domain::classification::{Classification, FloorEstimate};
use crate::domain::types::BuildingCategory;
use crate::engine::floor_estimator::BuildingFloorEstimator;

#[derive(Debug, Clone, Default)]
pub struct BuildingClassifier {
    estimator: BuildingFloorEstimator,
}

impl BuildingClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            estimator: BuildingFloorEstimator::from_config(config),
        }
    }

    /// 楼层数 → 楼栋类型
    pub fn category_for(floor_count: u32) -> Option<BuildingCategory> {
        match floor_count {
            0 => None,
            1 => Some(BuildingCategory::LaagBouw),
            2 => Some(BuildingCategory::Duplex),
            _ => Some(BuildingCategory::HoogBouw),
        }
    }

    pub fn classify_floor_count(floor_count: u32) -> Classification {
        Classification {
            category: Self::category_for(floor_count),
            floor_count,
        }
    }

    pub fn estimate(&self, building: &Building) -> FloorEstimate {
        self.estimator.estimate(&building.units)
    }

    pub fn classify(&self, building: &Building) -> Classification {
        Self::classify_floor_count(self.estimate(building).floor_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::unit::Unit;

    #[test]
    fn test_category_boundaries() {
        assert_eq!(BuildingClassifier::category_for(0), None);
        assert_eq!(BuildingClassifier::category_for(1), Some(BuildingCategory::LaagBouw));
        assert_eq!(BuildingClassifier::category_for(2), Some(BuildingCategory::Duplex));
        assert_eq!(BuildingClassifier::category_for(3), Some(BuildingCategory::HoogBouw));
        assert_eq!(BuildingClassifier::category_for(10), Some(BuildingCategory::HoogBouw));
    }

    #[test]
    fn test_every_positive_floor_count_classified() {
        for floors in 1..=50 {
            let classification = BuildingClassifier::classify_floor_count(floors);
            assert!(classification.category.is_some());
            assert_eq!(classification.floor_count, floors);
        }
    }

    #[test]
    fn test_invalid_fallback_ratio_still_classifies() {
        let config = EngineConfig {
            fallback_units_per_floor: -1.0,
            ..EngineConfig::default()
        };
        let classifier = BuildingClassifier::from_config(&config);
        let building = Building {
            units: vec![Unit::default(); 6],
            ..Building::default()
        };

        let classification = classifier.classify(&building);
        assert_eq!(classification.floor_count, 3);
        assert!(classification.is(BuildingCategory::HoogBouw));
    }

    #[test]
    fn test_empty_building_unclassified() {
        let classifier = BuildingClassifier::new();
        assert_eq!(
            classifier.classify(&Building::default()),
            Classification::unclassified()
        );
    }

    #[test]
    fn test_classify_building() {
        let classifier = BuildingClassifier::new();
        let building = Building {
            units: ["H", "1"]
                .iter()
                .map(|s| Unit {
                    unit_suffix: Some(s.to_string()),
                    ..Unit::default()
                })
                .collect(),
            ..Building::default()
        };

        let classification = classifier.classify(&building);
        assert_eq!(classification.floor_count, 2);
        assert!(classification.is(BuildingCategory::Duplex));
    }
}
