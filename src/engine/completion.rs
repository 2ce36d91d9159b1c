// ==========================================
// 光纤入户排程系统 - 单户完工判定引擎
// ==========================================
// 完工: 状态码 == 完工码 或 任一预约附带签名/报告
// 状态码默认精确比较, status_case_insensitive 开启后去空白并忽略大小写
// 已预约: 任一预约记录带预约时间
// 缺失字段一律视为"未完工" / "未预约"
// ==========================================

use crate::config::EngineConfig;
use crate::domain::stats::UnitCompletion;
use crate::domain::unit::{Appointment, Unit};

#[derive(Debug, Clone)]
pub struct CompletionEvaluator {
    completed_code: String,
    case_insensitive: bool,
}

impl Default for CompletionEvaluator {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

impl CompletionEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            completed_code: config.completed_status_code.clone(),
            case_insensitive: config.status_case_insensitive,
        }
    }

    pub fn evaluate(&self, unit: &Unit) -> UnitCompletion {
        UnitCompletion {
            completed: self.is_completed(unit),
            has_appointment: self.has_appointment(unit),
        }
    }

    pub fn is_completed(&self, unit: &Unit) -> bool {
        let status_completed = unit
            .completion_status
            .as_deref()
            .is_some_and(|status| self.status_matches(status));

        status_completed || unit.appointments().any(Appointment::has_signature_or_report)
    }

    fn status_matches(&self, status: &str) -> bool {
        if self.case_insensitive {
            status.trim().to_uppercase() == self.completed_code.trim().to_uppercase()
        } else {
            status == self.completed_code
        }
    }

    pub fn has_appointment(&self, unit: &Unit) -> bool {
        unit.appointments().any(Appointment::is_booked)
    }
}
