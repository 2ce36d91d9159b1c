// ==========================================
// 光纤入户排程系统 - 楼栋筛选引擎
// ==========================================
// 红线: 筛选与计数走同一个按键分派的判定函数
// 筛选键互斥, 每次只选一个
// ==========================================

mod core;
mod report;


pub use core::FilterEngine;
pub use report::FilterCounts;
