// ==========================================
// 板件清单计算 - 核心库
// ==========================================
// 输入: Tab 分隔的板件清单（材料、长、宽、数量、四边封边标记）
// 输出: 每种材料所需的封边总长（m）
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 计算规则
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 配置层 - 计算配置
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 调用方接口
pub mod api;

// 应用层 - 输出渲染
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    ComputedRow, EdgeAxis, HeaderMode, PanelRow, ProcessingStats, SummaryRow, UitslagReport,
};

// 引擎
pub use engine::{compute, UitslagCalculator};

// 配置
pub use config::{CalcConfig, ConfigManager};

// 错误
pub use importer::{ImportError, ImportResult, RowError};

// API
pub use api::{ApiError, CalculationResponse, UitslagApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "uitslag-calc";
