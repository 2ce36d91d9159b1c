// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

#![allow(dead_code)]

use chrono::NaiveDate;
use fiber_planning_engine::domain::{Appointment, Building, Unit};

// ==========================================
// Unit 构建器
// ==========================================

pub struct UnitBuilder {
    unit: Unit,
}

impl UnitBuilder {
    pub fn new() -> Self {
        Self {
            unit: Unit::default(),
        }
    }

    pub fn suffix(mut self, suffix: &str) -> Self {
        self.unit.unit_suffix = Some(suffix.to_string());
        self
    }

    pub fn search_key(mut self, key: &str) -> Self {
        self.unit.search_key = Some(key.to_string());
        self
    }

    pub fn postcode(mut self, postcode: &str) -> Self {
        self.unit.postcode = Some(postcode.to_string());
        self
    }

    pub fn complex(mut self, name: &str) -> Self {
        self.unit.complex_name = Some(name.to_string());
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.unit.completion_status = Some(status.to_string());
        self
    }

    pub fn completed(self) -> Self {
        self.status("COMPLETED")
    }

    pub fn planning_booked(mut self, date: NaiveDate) -> Self {
        self.unit.planning_appointment = Some(Appointment {
            booked_at: date.and_hms_opt(9, 0, 0),
            ..Appointment::default()
        });
        self
    }

    pub fn installer_report(mut self, file: &str) -> Self {
        let mut appointment = self.unit.installer_appointment.take().unwrap_or_default();
        appointment.report_file = Some(file.to_string());
        self.unit.installer_appointment = Some(appointment);
        self
    }

    pub fn build(self) -> Unit {
        self.unit
    }
}

// ==========================================
// Building 构建器
// ==========================================

pub struct BuildingBuilder {
    building: Building,
}

impl BuildingBuilder {
    pub fn new(address: &str) -> Self {
        Self {
            building: Building {
                address: address.to_string(),
                ..Building::default()
            },
        }
    }

    pub fn unit(mut self, unit: Unit) -> Self {
        self.building.units.push(unit);
        self
    }

    /// 按后缀批量添加户（同一邮编）
    pub fn suffixes(mut self, suffixes: &[&str], postcode: &str) -> Self {
        for s in suffixes {
            self.building
                .units
                .push(UnitBuilder::new().suffix(s).postcode(postcode).build());
        }
        self
    }

    pub fn blocked(mut self) -> Self {
        self.building.blocked = true;
        self
    }

    pub fn file(mut self, url: &str) -> Self {
        self.building.file_url = Some(url.to_string());
        self
    }

    pub fn build(self) -> Building {
        self.building
    }
}

/// 基准日期: 2026-04-13
pub fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 4, 13).unwrap()
}
