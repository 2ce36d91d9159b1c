// ==========================================
// 光纤入户排程系统 - 楼栋概览引擎
// ==========================================
// 职责: 组合楼层估算 / 分类 / 编号 / 完工统计, 输出只读视图
// 红线: 不新增规则, 只组合既有引擎
// ==========================================

use crate::config::EngineConfig;
use crate::domain::building::Building;
use crate::domain::classification::{Classification, FloorEstimate};
use crate::domain::stats::AggregateStats;
use crate::engine::aggregation::AggregationEngine;
use crate::engine::classifier::BuildingClassifier;
use crate::engine::identifier::IdentifierGenerator;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

// ==========================================
// BuildingOverview - 楼栋概览
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingOverview {
    pub address: String,
    pub blocked: bool,
    pub has_file: bool,

    /// 楼层估算（含估算方式, 回退估算可见）
    pub floor_estimate: FloorEstimate,

    pub classification: Classification,

    /// 高层楼栋编号（非 HoogBouw 为 None）
    pub identifier: Option<String>,

    pub stats: AggregateStats,

    /// 已预约户数
    pub appointment_units: usize,
}

// ==========================================
// BuildingOverviewEngine - 楼栋概览引擎
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct BuildingOverviewEngine {
    classifier: BuildingClassifier,
    generator: IdentifierGenerator,
    aggregation: AggregationEngine,
}

impl BuildingOverviewEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            classifier: BuildingClassifier::from_config(config),
            generator: IdentifierGenerator::from_config(config),
            aggregation: AggregationEngine::from_config(config),
        }
    }

    pub fn overview(&self, building: &Building) -> BuildingOverview {
        let floor_estimate = self.classifier.estimate(building);
        let classification = BuildingClassifier::classify_floor_count(floor_estimate.floor_count);
        let identifier = self.generator.generate(building, &classification);
        let evaluator = self.aggregation.evaluator();

        BuildingOverview {
            address: building.address.clone(),
            blocked: building.blocked,
            has_file: building.has_file(),
            floor_estimate,
            classification,
            identifier,
            stats: self.aggregation.aggregate_building(building),
            appointment_units: building
                .units
                .iter()
                .filter(|u| evaluator.has_appointment(u))
                .count(),
        }
    }

    #[instrument(skip(self, buildings), fields(count = buildings.len()))]
    pub fn overview_all(&self, buildings: &[Building]) -> Vec<BuildingOverview> {
        let overviews: Vec<BuildingOverview> =
            buildings.iter().map(|b| self.overview(b)).collect();

        let fallback = overviews
            .iter()
            .filter(|o| o.floor_estimate.is_fallback())
            .count();
        info!(
            buildings = overviews.len(),
            fallback_estimates = fallback,
            "楼栋概览生成完成"
        );

        overviews
    }
}
