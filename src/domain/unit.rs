// ==========================================
// 光纤入户排程系统 - 户 (Unit) 实体
// ==========================================
// 所有字段均可缺失, 缺失视为"无数据"
// ==========================================

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// 非空文本判定（去空白后非空）
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

// ==========================================
// Appointment - 预约记录
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    /// 预约时间（存在即视为已预约）
    #[serde(default)]
    pub booked_at: Option<NaiveDateTime>,

    /// 签名文件
    #[serde(default)]
    pub signature_file: Option<String>,

    /// 报告文件
    #[serde(default)]
    pub report_file: Option<String>,
}

impl Appointment {
    /// 是否已预约
    pub fn is_booked(&self) -> bool {
        self.booked_at.is_some()
    }

    /// 是否附带签名或报告
    pub fn has_signature_or_report(&self) -> bool {
        non_blank(self.signature_file.as_deref()).is_some()
            || non_blank(self.report_file.as_deref()).is_some()
    }
}

// ==========================================
// Unit - 户
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// 户号后缀（如 "1" / "H" / "3A"）
    #[serde(default)]
    pub unit_suffix: Option<String>,

    /// 复合检索键（POSTCODE_HOUSENUMBER_UNITNUMBER_）
    #[serde(default)]
    pub search_key: Option<String>,

    /// 完工状态码
    #[serde(default)]
    pub completion_status: Option<String>,

    /// 勘测预约
    #[serde(default)]
    pub planning_appointment: Option<Appointment>,

    /// 安装预约
    #[serde(default)]
    pub installer_appointment: Option<Appointment>,

    #[serde(default)]
    pub postcode: Option<String>,

    /// 小区/楼名（文本检索使用）
    #[serde(default)]
    pub complex_name: Option<String>,

    #[serde(default)]
    pub file_url: Option<String>,
}

impl Unit {
    /// 两条预约记录（缺失的跳过）
    pub fn appointments(&self) -> impl Iterator<Item = &Appointment> {
        self.planning_appointment
            .iter()
            .chain(self.installer_appointment.iter())
    }

    pub fn has_file(&self) -> bool {
        non_blank(self.file_url.as_deref()).is_some()
    }
}
