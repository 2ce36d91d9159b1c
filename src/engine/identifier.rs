// ==========================================
// 光纤入户排程系统 - 高层楼栋编号生成器
// ==========================================
// 格式: <前缀>-<邮编4位><户数2位补零><门牌3位补零>
// 例:   HB-1075 12 023
// ==========================================
// 规则:
// 1) 仅 HoogBouw 生成编号, 其他类型返回 None
// 2) 邮编取首个非空邮编的户（不假定第一户有邮编）
// 3) 邮编/地址只保留数字, 分别截取前 4 / 3 位
// 4) 地址无数字 → 默认门牌段; 全楼无邮编 → 缺失邮编段
// ==========================================

use crate::config::EngineConfig;
use crate::domain::building::Building;
use crate::domain::classification::Classification;
use crate::domain::types::BuildingCategory;
use crate::domain::unit::non_blank;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct IdentifierGenerator {
    prefix: String,
    default_address_code: String,
    missing_postcode_code: String,
}

impl Default for IdentifierGenerator {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

impl IdentifierGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            prefix: config.high_rise_prefix.clone(),
            default_address_code: config.default_address_code.clone(),
            missing_postcode_code: config.missing_postcode_code.clone(),
        }
    }

    /// 生成高层楼栋编号
    pub fn generate(&self, building: &Building, classification: &Classification) -> Option<String> {
        if !classification.is(BuildingCategory::HoogBouw) {
            return None;
        }

        let postcode = self.postcode_component(building);
        let address = self.address_component(&building.address);

        Some(format!(
            "{}-{}{:02}{}",
            self.prefix,
            postcode,
            building.unit_count(),
            address
        ))
    }

    fn postcode_component(&self, building: &Building) -> String {
        let postcode = building
            .units
            .iter()
            .find_map(|u| non_blank(u.postcode.as_deref()));

        match postcode {
            Some(p) => leading_digits(p, 4),
            None => {
                debug!(address = %building.address, "楼栋无邮编, 使用缺失邮编段");
                self.missing_postcode_code.clone()
            }
        }
    }

    fn address_component(&self, address: &str) -> String {
        let digits = leading_digits(address, 3);
        if digits.is_empty() {
            self.default_address_code.clone()
        } else {
            format!("{:0>3}", digits)
        }
    }
}

/// 去掉非数字后取前 n 位
fn leading_digits(value: &str, n: usize) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).take(n).collect()
}
