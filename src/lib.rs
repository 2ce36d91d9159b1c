// ==========================================
// 光纤入户排程系统 - 楼栋分类与完工统计核心库
// ==========================================
// 系统定位: 纯计算核心, 不含持久化 / 网络 / 界面
// 输入: 已反序列化的楼栋与户记录
// 输出: 楼层估算、楼栋分类、高层编号、完工统计、筛选结果
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与值对象
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 配置层 - 引擎参数
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    AggregateStats, Appointment, Building, BuildingCategory, Classification, DomainError,
    EstimateMethod, FilterKey, FloorEstimate, Unit, UnitCompletion,
};

// 引擎
pub use engine::{
    AggregationEngine, BuildingClassifier, BuildingFloorEstimator, BuildingOverview,
    BuildingOverviewEngine, CompletionEvaluator, FilterCounts, FilterEngine, FloorReading,
    FloorSource, IdentifierFloorExtractor, IdentifierGenerator,
};

// 配置
pub use config::{ConfigError, EngineConfig};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
