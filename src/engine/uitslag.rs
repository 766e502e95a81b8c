// ==========================================
// 板件清单计算 - 封边用量引擎
// ==========================================
// 公式（每个方向独立计算）:
//   n = 该方向标记为 "X" 的边数
//   uitslag = (尺寸 * n + n * 余量) * 数量   (n > 0)
//   uitslag = 0                              (n = 0)
// 单位: mm
// ==========================================

use crate::domain::{ComputedRow, EdgeAxis, PanelRow};

/// 每条封边的固定余量（mm）
pub const DEFAULT_EDGE_ALLOWANCE_MM: f64 = 50.0;

pub struct UitslagEngine {
    edge_allowance_mm: f64,
}

impl Default for UitslagEngine {
    fn default() -> Self {
        Self::new(DEFAULT_EDGE_ALLOWANCE_MM)
    }
}

impl UitslagEngine {
    pub fn new(edge_allowance_mm: f64) -> Self {
        Self { edge_allowance_mm }
    }

    /// 单个方向的封边用量
    pub fn axis_uitslag(&self, row: &PanelRow, axis: EdgeAxis) -> f64 {
        let edges = row.edge_count(axis);
        if edges == 0 {
            return 0.0;
        }
        let n = f64::from(edges);
        (row.dimension(axis) * n + n * self.edge_allowance_mm) * row.aantal
    }

    pub fn compute_row(&self, row: &PanelRow) -> ComputedRow {
        ComputedRow {
            materiaal: row.materiaal.clone(),
            uitslag_lengte: self.axis_uitslag(row, EdgeAxis::Lengte),
            uitslag_breedte: self.axis_uitslag(row, EdgeAxis::Breedte),
        }
    }
}
