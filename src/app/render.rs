// ==========================================
// 板件清单计算 - 结果渲染
// ==========================================
// 格式: 文本表格 / TSV / JSON
// 数值统一两位小数
// ==========================================

use crate::api::{ApiError, ApiResult, CalculationResponse, ResultRow};
use clap::ValueEnum;
use csv::WriterBuilder;
use std::fmt;

pub const COLUMNS: [&str; 4] = [
    "Materiaal",
    "TotaalUitslagLengte_m",
    "TotaalUitslagBreedte_m",
    "TotaalUitslagOpgeteld_m",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Tsv,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Tsv => write!(f, "tsv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// 单行的四个单元格文本
fn cells(row: &ResultRow) -> [String; 4] {
    match row {
        ResultRow::Summary(s) => [
            s.materiaal.clone(),
            format!("{:.2}", s.totaal_lengte_m),
            format!("{:.2}", s.totaal_breedte_m),
            format!("{:.2}", s.totaal_opgeteld_m),
        ],
        ResultRow::Error(e) => [
            e.materiaal.clone(),
            e.message.clone(),
            e.breedte.clone(),
            e.opgeteld.clone(),
        ],
    }
}

pub fn render(response: &CalculationResponse, format: OutputFormat) -> ApiResult<String> {
    match format {
        OutputFormat::Table => Ok(render_table(response)),
        OutputFormat::Tsv => render_tsv(response),
        OutputFormat::Json => render_json(response),
    }
}

/// 对齐的文本表格；材料名左对齐，数值右对齐
pub fn render_table(response: &CalculationResponse) -> String {
    let body: Vec<[String; 4]> = response.rows.iter().map(cells).collect();

    let mut widths = COLUMNS.map(|c| c.chars().count());
    for row in &body {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_line = |row: [&str; 4]| -> String {
        let mut parts = Vec::with_capacity(4);
        for (idx, (cell, width)) in row.iter().zip(widths.iter()).enumerate() {
            if idx == 0 || response.is_error {
                parts.push(format!("{:<width$}", cell, width = width));
            } else {
                parts.push(format!("{:>width$}", cell, width = width));
            }
        }
        parts.join("  ").trim_end().to_string()
    };

    let mut out = Vec::new();
    out.push(format_line(COLUMNS));
    out.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in &body {
        out.push(format_line([&row[0], &row[1], &row[2], &row[3]]));
    }

    if !response.debug_info.is_empty() {
        out.push(String::new());
        out.push(response.debug_info.clone());
    }

    let mut text = out.join("\n");
    text.push('\n');
    text
}

/// Tab 分隔输出，首行为列名
pub fn render_tsv(response: &CalculationResponse) -> ApiResult<String> {
    let mut writer = WriterBuilder::new().delimiter(b'\t').from_writer(Vec::new());

    let write_err = |e: csv::Error| ApiError::InternalError(format!("TSV write failed: {}", e));
    writer.write_record(COLUMNS).map_err(write_err)?;
    for row in &response.rows {
        writer.write_record(cells(row)).map_err(write_err)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ApiError::InternalError(format!("TSV write failed: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| ApiError::InternalError(e.to_string()))
}

pub fn render_json(response: &CalculationResponse) -> ApiResult<String> {
    serde_json::to_string_pretty(response)
        .map_err(|e| ApiError::InternalError(format!("JSON serialization failed: {}", e)))
}
