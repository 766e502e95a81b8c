// ==========================================
// 板件清单计算 - 引擎层
// ==========================================
// 职责: 封边用量公式、按材料汇总、计算流程编排
// 红线: 引擎不做 IO，同一输入恒得同一输出
// ==========================================

pub mod aggregation;
pub mod calculator;
pub mod uitslag;

// 重导出核心引擎
pub use aggregation::{aggregate, round2};
pub use calculator::{compute, UitslagCalculator};
pub use uitslag::{UitslagEngine, DEFAULT_EDGE_ALLOWANCE_MM};
