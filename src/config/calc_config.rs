// ==========================================
// 板件清单计算 - 计算配置
// ==========================================
// 调用方在启动时构造一次，之后只读传入计算器
// ==========================================

use crate::domain::HeaderMode;
use crate::engine::uitslag::DEFAULT_EDGE_ALLOWANCE_MM;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    /// 表头策略（默认自动识别）
    pub header_mode: HeaderMode,

    /// 是否向调用方展示诊断信息；不影响计算结果
    pub debug: bool,

    /// 每条封边的余量（mm）
    pub edge_allowance_mm: f64,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            header_mode: HeaderMode::Auto,
            debug: false,
            edge_allowance_mm: DEFAULT_EDGE_ALLOWANCE_MM,
        }
    }
}

impl CalcConfig {
    pub fn with_header_mode(mut self, header_mode: HeaderMode) -> Self {
        self.header_mode = header_mode;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_edge_allowance_mm(mut self, edge_allowance_mm: f64) -> Self {
        self.edge_allowance_mm = edge_allowance_mm;
        self
    }
}
