// ==========================================
// 光纤入户排程系统 - 引擎配置
// ==========================================
// 职责: 引擎参数加载与校验
// 来源: JSON 文件 (FIBER_ENGINE_CONFIG) 或默认值
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::Path;
use tracing::{debug, info};

/// 配置文件路径环境变量
pub const CONFIG_PATH_ENV: &str = "FIBER_ENGINE_CONFIG";

// ==========================================
// EngineConfig - 引擎配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// 完工状态码（默认精确比较）
    pub completed_status_code: String,

    /// 完工状态码比较时去空白并忽略大小写
    pub status_case_insensitive: bool,

    /// 高层楼栋编号前缀
    pub high_rise_prefix: String,

    /// 地址无数字时的门牌段
    pub default_address_code: String,

    /// 全楼无邮编时的邮编段
    pub missing_postcode_code: String,

    /// 户数回退估算: 每层户数（>= 5 户时使用）
    pub fallback_units_per_floor: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            completed_status_code: "COMPLETED".to_string(),
            status_case_insensitive: false,
            high_rise_prefix: "HB".to_string(),
            default_address_code: "001".to_string(),
            missing_postcode_code: "0000".to_string(),
            fallback_units_per_floor: 2.5,
        }
    }
}

impl EngineConfig {
    /// 从 JSON 文本解析并校验
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 从 JSON 文件加载
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json_str(&text)?;
        info!(path = %path.display(), "引擎配置已加载");
        Ok(config)
    }

    /// 按 FIBER_ENGINE_CONFIG 加载, 未设置时使用默认值
    pub fn from_env() -> ConfigResult<Self> {
        Self::load_optional(std::env::var_os(CONFIG_PATH_ENV))
    }

    pub fn load_optional(path: Option<OsString>) -> ConfigResult<Self> {
        match path {
            Some(p) if !p.is_empty() => Self::load(p),
            _ => {
                debug!("未指定配置文件, 使用默认引擎配置");
                Ok(Self::default())
            }
        }
    }

    /// 校验配置
    ///
    /// # 校验规则
    /// 1. 完工状态码 / 编号前缀不能为空
    /// 2. 默认门牌段必须为 3 位数字
    /// 3. 缺失邮编段必须为 1~4 位数字
    /// 4. 每层户数必须为正的有限数
    pub fn validate(&self) -> ConfigResult<()> {
        if self.completed_status_code.trim().is_empty() {
            return Err(invalid(
                config_keys::COMPLETED_STATUS_CODE,
                &self.completed_status_code,
                "完工状态码不能为空",
            ));
        }

        if self.high_rise_prefix.trim().is_empty() {
            return Err(invalid(
                config_keys::HIGH_RISE_PREFIX,
                &self.high_rise_prefix,
                "编号前缀不能为空",
            ));
        }

        let address = &self.default_address_code;
        if address.len() != 3 || !address.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid(
                config_keys::DEFAULT_ADDRESS_CODE,
                address,
                "默认门牌段必须为 3 位数字",
            ));
        }

        let postcode = &self.missing_postcode_code;
        if postcode.is_empty() || postcode.len() > 4 || !postcode.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid(
                config_keys::MISSING_POSTCODE_CODE,
                postcode,
                "缺失邮编段必须为 1~4 位数字",
            ));
        }

        let ratio = self.fallback_units_per_floor;
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(invalid(
                config_keys::FALLBACK_UNITS_PER_FLOOR,
                &ratio.to_string(),
                "每层户数必须为正数",
            ));
        }

        Ok(())
    }
}

fn invalid(key: &str, value: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        message: message.to_string(),
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    pub const COMPLETED_STATUS_CODE: &str = "completed_status_code";
    pub const STATUS_CASE_INSENSITIVE: &str = "status_case_insensitive";
    pub const HIGH_RISE_PREFIX: &str = "high_rise_prefix";
    pub const DEFAULT_ADDRESS_CODE: &str = "default_address_code";
    pub const MISSING_POSTCODE_CODE: &str = "missing_postcode_code";
    pub const FALLBACK_UNITS_PER_FLOOR: &str = "fallback_units_per_floor";
}
