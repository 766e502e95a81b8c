// ==========================================
// 板件清单计算 - 领域模型层
// ==========================================
// 职责: 定义领域实体与类型
// 红线: 不含解析逻辑,不含计算逻辑
// ==========================================

pub mod panel;
pub mod summary;
pub mod types;

// 重导出核心类型
pub use panel::{ComputedRow, PanelRow, RawLine, RawTable, EDGE_MARKER};
pub use summary::{format_summary, ProcessingStats, SummaryRow, UitslagReport};
pub use types::{EdgeAxis, HeaderMode};
