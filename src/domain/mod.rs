// ==========================================
// 光纤入户排程系统 - 领域模型层
// ==========================================
// 职责: 定义户/楼栋实体与派生值对象
// 红线: 不含引擎逻辑, 不含 I/O
// ==========================================

pub mod building;
pub mod classification;
pub mod error;
pub mod stats;
pub mod types;
pub mod unit;

// 重导出核心类型
pub use building::Building;
pub use classification::{Classification, FloorEstimate};
pub use error::DomainError;
pub use stats::{completion_percentage, AggregateStats, UnitCompletion};
pub use types::{BuildingCategory, EstimateMethod, FilterKey};
pub use unit::{Appointment, Unit};
