// ==========================================
// 板件清单计算 - 汇总结果模型
// ==========================================
// 对齐: 原表格列名 Materiaal / TotaalUitslagLengte_m /
//       TotaalUitslagBreedte_m / TotaalUitslagOpgeteld_m
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// SummaryRow - 每种材料一行（单位: m，两位小数）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    #[serde(rename = "Materiaal")]
    pub materiaal: String,

    #[serde(rename = "TotaalUitslagLengte_m")]
    pub totaal_lengte_m: f64,

    #[serde(rename = "TotaalUitslagBreedte_m")]
    pub totaal_breedte_m: f64,

    #[serde(rename = "TotaalUitslagOpgeteld_m")]
    pub totaal_opgeteld_m: f64,
}

/// 行处理计数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingStats {
    pub processed: usize,
    pub skipped: usize,
}

// ==========================================
// UitslagReport - 单次计算的完整输出
// ==========================================
// diagnostics 始终生成；是否展示由调用方根据 debug 开关决定
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UitslagReport {
    pub rows: Vec<SummaryRow>,
    pub stats: ProcessingStats,
    pub header_detected: bool,
    pub summary: String,
    pub diagnostics: Vec<String>,
}

impl UitslagReport {
    /// 无数据时的空报告
    pub fn no_data() -> Self {
        Self {
            summary: "No data found".to_string(),
            diagnostics: vec!["No data found".to_string()],
            ..Self::default()
        }
    }

    /// 结果中出现的材料（已排序）
    pub fn materials(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.materiaal.as_str()).collect()
    }

    /// 供调用方展示的调试信息；debug 关闭时为空串
    pub fn debug_info(&self, debug: bool) -> String {
        if debug {
            self.summary.clone()
        } else {
            String::new()
        }
    }

    /// 完整诊断日志（逐行消息 + 汇总）
    pub fn diagnostics_text(&self) -> String {
        self.diagnostics.join("\n")
    }
}

/// 生成汇总串: "Processed p rows, skipped s rows\nFound materials: ['A', 'B']"
pub fn format_summary(stats: &ProcessingStats, materials: &[&str]) -> String {
    let quoted: Vec<String> = materials.iter().map(|m| format!("'{}'", m)).collect();
    format!(
        "Processed {} rows, skipped {} rows\nFound materials: [{}]",
        stats.processed,
        stats.skipped,
        quoted.join(", ")
    )
}
