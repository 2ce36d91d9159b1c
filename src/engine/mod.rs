// ==========================================
// 光纤入户排程系统 - 引擎层
// ==========================================
// 职责: 楼栋分类与完工统计规则
// 红线: 纯函数, 无 I/O, 无共享可变状态
// 红线: 无法判定时用 Option / 回退估算, 不抛错
// ==========================================

pub mod aggregation;
pub mod classifier;
pub mod completion;
pub mod filter;
pub mod floor_estimator;
pub mod floor_extractor;
pub mod identifier;
pub mod overview;

// 重导出核心引擎
pub use aggregation::AggregationEngine;
pub use classifier::BuildingClassifier;
pub use completion::CompletionEvaluator;
pub use filter::{FilterCounts, FilterEngine};
pub use floor_estimator::BuildingFloorEstimator;
pub use floor_extractor::{identifier_to_floor, FloorReading, FloorSource, IdentifierFloorExtractor};
pub use identifier::IdentifierGenerator;
pub use overview::{BuildingOverview, BuildingOverviewEngine};
