// ==========================================
// 板件清单计算 - 板件领域模型
// ==========================================
// 用途: 导入层产出 RawTable / PanelRow，引擎层产出 ComputedRow
// 生命周期: 仅存在于单次计算内，不落库
// ==========================================

use crate::domain::types::EdgeAxis;
use serde::{Deserialize, Serialize};

/// 封边标记的唯一有效值
pub const EDGE_MARKER: &str = "X";

// ==========================================
// RawLine / RawTable - 未解析的原始行
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    pub line_number: usize,  // 原始行号（1 起）
    pub fields: Vec<String>, // 按 Tab 切分后的字段（未 trim）
}

impl RawLine {
    pub fn new(line_number: usize, fields: Vec<String>) -> Self {
        Self {
            line_number,
            fields,
        }
    }

    /// 是否为空白行（所有字段 trim 后为空）
    pub fn is_blank(&self) -> bool {
        self.fields.iter().all(|f| f.trim().is_empty())
    }
}

/// 解析器输出: 非空白行的有序集合
pub type RawTable = Vec<RawLine>;

// ==========================================
// PanelRow - 一块板件
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelRow {
    pub materiaal: String, // 材料名（分组键，已 trim）
    pub lengte: f64,       // 长度（mm）
    pub breedte: f64,      // 宽度（mm）
    pub aantal: f64,       // 数量（非纯数字时为 1）
    pub kant_x1: String,
    pub kant_x2: String,
    pub kant_y1: String,
    pub kant_y2: String,

    pub line_number: usize,
}

impl PanelRow {
    /// 指定方向上标记为 "X" 的边数（0..=2）
    pub fn edge_count(&self, axis: EdgeAxis) -> u32 {
        let (a, b) = match axis {
            EdgeAxis::Lengte => (&self.kant_x2, &self.kant_x1),
            EdgeAxis::Breedte => (&self.kant_y1, &self.kant_y2),
        };
        u32::from(a == EDGE_MARKER) + u32::from(b == EDGE_MARKER)
    }

    /// 指定方向上的板件尺寸
    pub fn dimension(&self, axis: EdgeAxis) -> f64 {
        match axis {
            EdgeAxis::Lengte => self.lengte,
            EdgeAxis::Breedte => self.breedte,
        }
    }
}

// ==========================================
// ComputedRow - 单行的封边用量（mm）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedRow {
    pub materiaal: String,
    pub uitslag_lengte: f64,
    pub uitslag_breedte: f64,
}
