// ==========================================
// 板件清单计算 - 配置层
// ==========================================
// 职责: 计算配置的加载与覆写
// 存储: JSON 配置文件 + 环境变量
// ==========================================

pub mod calc_config;
pub mod config_manager;

// 重导出核心配置
pub use calc_config::CalcConfig;
pub use config_manager::{config_keys, ConfigManager};
