// ==========================================
// 板件清单计算 - 领域类型定义
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 表头模式 (Header Mode)
// ==========================================
// AutoDetect: 首行含任一已知列名才视为表头，否则按固定列位置
// Required:   首行恒为表头，至少需要表头 + 1 行数据
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderMode {
    #[default]
    #[serde(alias = "auto-detect", alias = "autodetect")]
    Auto,
    Required,
}

impl fmt::Display for HeaderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderMode::Auto => write!(f, "auto"),
            HeaderMode::Required => write!(f, "required"),
        }
    }
}

impl FromStr for HeaderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" | "auto-detect" | "autodetect" => Ok(HeaderMode::Auto),
            "required" => Ok(HeaderMode::Required),
            other => Err(format!("unknown header mode: {} (expected auto|required)", other)),
        }
    }
}

impl HeaderMode {
    /// 计算所需的最少非空行数
    pub fn min_lines(&self) -> usize {
        match self {
            HeaderMode::Auto => 1,
            HeaderMode::Required => 2,
        }
    }
}

// ==========================================
// 封边方向 (Edge Axis)
// ==========================================
// Lengte: Kant_X1 / Kant_X2 沿长度方向
// Breedte: Kant_Y1 / Kant_Y2 沿宽度方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeAxis {
    Lengte,
    Breedte,
}

impl fmt::Display for EdgeAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeAxis::Lengte => write!(f, "Lengte"),
            EdgeAxis::Breedte => write!(f, "Breedte"),
        }
    }
}
