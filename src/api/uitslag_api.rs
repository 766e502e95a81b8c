// ==========================================
// 板件清单计算 - 封边汇总 API
// ==========================================
// 职责: 调用方入口（取代原 Web 表单）
//   - 调用计算器
//   - 任何错误都转换为单行错误结果，不向调用方抛出
//   - 根据 debug 开关过滤诊断信息
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::CalcConfig;
use crate::domain::{SummaryRow, UitslagReport};
use crate::engine::UitslagCalculator;
use crate::importer::UniversalFileParser;
use serde::Serialize;
use std::path::Path;
use tracing::{error, info, instrument};

/// 错误行中的材料名
pub const ERROR_MATERIAAL: &str = "Error";

// ==========================================
// ErrorRow - 与汇总行同列名的错误行
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorRow {
    #[serde(rename = "Materiaal")]
    pub materiaal: String,

    /// 错误消息放在长度列
    #[serde(rename = "TotaalUitslagLengte_m")]
    pub message: String,

    #[serde(rename = "TotaalUitslagBreedte_m")]
    pub breedte: String,

    #[serde(rename = "TotaalUitslagOpgeteld_m")]
    pub opgeteld: String,
}

impl ErrorRow {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            materiaal: ERROR_MATERIAAL.to_string(),
            message: message.into(),
            breedte: String::new(),
            opgeteld: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResultRow {
    Summary(SummaryRow),
    Error(ErrorRow),
}

// ==========================================
// CalculationResponse - 展示层响应
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResponse {
    pub rows: Vec<ResultRow>,

    /// debug 关闭时为空串
    pub debug_info: String,

    /// 逐行诊断日志；仅 debug 开启时填充
    #[serde(skip_serializing_if = "String::is_empty")]
    pub diagnostics: String,

    pub is_error: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

impl CalculationResponse {
    pub fn from_report(report: &UitslagReport, debug: bool) -> Self {
        Self {
            rows: report.rows.iter().cloned().map(ResultRow::Summary).collect(),
            debug_info: report.debug_info(debug),
            diagnostics: if debug {
                report.diagnostics_text()
            } else {
                String::new()
            },
            is_error: false,
            error_code: None,
        }
    }

    pub fn from_error(err: &ApiError, debug: bool) -> Self {
        let message = err.to_string();
        Self {
            debug_info: if debug {
                format!("Exception: {}", message)
            } else {
                String::new()
            },
            rows: vec![ResultRow::Error(ErrorRow::new(message))],
            diagnostics: String::new(),
            is_error: true,
            error_code: Some(err.code().to_string()),
        }
    }
}

// ==========================================
// UitslagApi
// ==========================================
pub struct UitslagApi {
    calculator: UitslagCalculator,
    file_parser: UniversalFileParser,
}

impl UitslagApi {
    pub fn new(config: CalcConfig) -> Self {
        Self {
            calculator: UitslagCalculator::new(config),
            file_parser: UniversalFileParser,
        }
    }

    pub fn debug(&self) -> bool {
        self.calculator.config().debug
    }

    /// 计算粘贴的文本，返回完整报告
    pub fn summarize_text(&self, text: &str) -> ApiResult<UitslagReport> {
        Ok(self.calculator.compute(text)?)
    }

    /// 计算文件（TSV / Excel），返回完整报告
    pub fn summarize_file(&self, path: &Path) -> ApiResult<UitslagReport> {
        if path.as_os_str().is_empty() {
            return Err(ApiError::InvalidInput("empty file path".to_string()));
        }
        let table = self.file_parser.parse(path)?;
        Ok(self.calculator.compute_table(&table)?)
    }

    /// 计算文本，错误转换为错误行
    #[instrument(skip(self, text), fields(bytes = text.len()))]
    pub fn calculate_text(&self, text: &str) -> CalculationResponse {
        self.respond(self.summarize_text(text))
    }

    /// 计算文件，错误转换为错误行
    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn calculate_file(&self, path: &Path) -> CalculationResponse {
        self.respond(self.summarize_file(path))
    }

    fn respond(&self, result: ApiResult<UitslagReport>) -> CalculationResponse {
        match result {
            Ok(report) => {
                info!(rows = report.rows.len(), "计算成功");
                CalculationResponse::from_report(&report, self.debug())
            }
            Err(e) => {
                error!(code = e.code(), error = %e, "计算失败");
                CalculationResponse::from_error(&e, self.debug())
            }
        }
    }
}
