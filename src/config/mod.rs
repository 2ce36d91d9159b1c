// ==========================================
// 光纤入户排程系统 - 配置层
// ==========================================
// 职责: 引擎参数加载/校验
// 存储: JSON 文件（可选）, 缺省使用内置默认值
// ==========================================

pub mod engine_config;
pub mod error;

// 重导出核心配置
pub use engine_config::{config_keys, EngineConfig, CONFIG_PATH_ENV};
pub use error::{ConfigError, ConfigResult};
