// ==========================================
// 光纤入户排程系统 - 户号楼层解析引擎
// ==========================================
// 红线: 无法解析返回 None, 不使用 -1 等魔数
// ==========================================
// 解析顺序（命中即返回）:
// 1) unit_suffix
// 2) search_key 最后一个非空段
// 3) search_key 末尾 `_<digits>_?`
// 4) 无法解析
// ==========================================

mod core;
mod rules;


pub use core::{FloorReading, FloorSource, IdentifierFloorExtractor};
pub use rules::{identifier_to_floor, GROUND_FLOOR_ALIASES};
