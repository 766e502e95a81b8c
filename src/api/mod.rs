// ==========================================
// 板件清单计算 - API 层
// ==========================================
// 职责: 提供计算 API,供命令行/前端调用
// ==========================================

pub mod error;
pub mod uitslag_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use uitslag_api::{CalculationResponse, ErrorRow, ResultRow, UitslagApi, ERROR_MATERIAAL};
