// ==========================================
// 光纤入户排程系统 - 领域层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("未知筛选键: {0}")]
    UnknownFilterKey(String),
}
