// ==========================================
// 板件清单计算 - 封边汇总计算器
// ==========================================
// 流程: 原始行 → 列定位 → 逐行映射/计算 → 分组汇总 → 排序
// 错误: 列定位失败为致命错误；单行错误只跳过该行
// 诊断: 始终收集，由调用方决定是否展示
// ==========================================

use crate::config::CalcConfig;
use crate::domain::{format_summary, ProcessingStats, RawLine, UitslagReport};
use crate::engine::aggregation::aggregate;
use crate::engine::uitslag::UitslagEngine;
use crate::importer::column_resolver::resolve_layout;
use crate::importer::error::ImportResult;
use crate::importer::file_parser::TsvParser;
use crate::importer::row_mapper::RowMapper;
use tracing::{debug, info, instrument, warn};

/// 诊断日志: 收集消息并同步输出 debug 事件
#[derive(Default)]
struct DiagnosticLog {
    messages: Vec<String>,
}

impl DiagnosticLog {
    fn push(&mut self, message: String) {
        debug!(target: "uitslag_calc::diagnostics", "{}", message);
        self.messages.push(message);
    }
}

// ==========================================
// UitslagCalculator - 纯计算，无共享可变状态
// ==========================================
pub struct UitslagCalculator {
    config: CalcConfig,
    engine: UitslagEngine,
}

impl Default for UitslagCalculator {
    fn default() -> Self {
        Self::new(CalcConfig::default())
    }
}

impl UitslagCalculator {
    pub fn new(config: CalcConfig) -> Self {
        let engine = UitslagEngine::new(config.edge_allowance_mm);
        Self { config, engine }
    }

    pub fn config(&self) -> &CalcConfig {
        &self.config
    }

    /// 计算 Tab 分隔文本
    #[instrument(skip(self, text), fields(bytes = text.len()))]
    pub fn compute(&self, text: &str) -> ImportResult<UitslagReport> {
        let table = TsvParser.parse_text(text)?;
        self.compute_table(&table)
    }

    /// 计算已解析的原始行（空白行须已剔除）
    pub fn compute_table(&self, table: &[RawLine]) -> ImportResult<UitslagReport> {
        let mut log = DiagnosticLog::default();
        log.push(format!("Total lines: {}", table.len()));

        let mode = self.config.header_mode;
        if table.len() < mode.min_lines() {
            info!(lines = table.len(), header_mode = %mode, "No data found");
            return Ok(UitslagReport::no_data());
        }

        // === 步骤 1: 列定位 ===
        let first_line = &table[0];
        let first_fields: Vec<&str> = first_line.fields.iter().map(|f| f.trim()).collect();
        log.push(format!("First line: {:?}", first_fields));

        let resolved = resolve_layout(first_line, mode).map_err(|e| {
            warn!(error = %e, "列定位失败");
            e
        })?;
        let layout = resolved.layout;
        log.push(format!("Headers detected: {}", resolved.header_detected));
        log.push(format!(
            "Column indices: Materiaal={}, Lengte={}, Breedte={}, Aantal={}, Kant_X2={}, Kant_X1={}, Kant_Y1={}, Kant_Y2={}",
            layout.materiaal,
            layout.lengte,
            layout.breedte,
            layout.aantal,
            layout.kant_x2,
            layout.kant_x1,
            layout.kant_y1,
            layout.kant_y2
        ));
        info!(
            header_detected = resolved.header_detected,
            data_lines = table.len() - resolved.data_start(),
            "列定位完成"
        );

        // === 步骤 2: 逐行计算 ===
        let mapper = RowMapper::new(layout);
        let mut stats = ProcessingStats::default();
        let mut computed = Vec::new();

        for line in &table[resolved.data_start()..] {
            if line.is_blank() {
                continue;
            }
            match mapper.map_line(line) {
                Ok(panel) => {
                    let row = self.engine.compute_row(&panel);
                    log.push(format!(
                        "Line {}: {} -> L={:?}, B={:?}",
                        panel.line_number, row.materiaal, row.uitslag_lengte, row.uitslag_breedte
                    ));
                    computed.push(row);
                    stats.processed += 1;
                }
                Err(e) => {
                    log.push(e.to_string());
                    stats.skipped += 1;
                }
            }
        }

        // === 步骤 3: 汇总 ===
        let rows = aggregate(&computed);
        let materials: Vec<&str> = rows.iter().map(|r| r.materiaal.as_str()).collect();
        let summary = format_summary(&stats, &materials);
        log.push(summary.clone());

        info!(
            processed = stats.processed,
            skipped = stats.skipped,
            materials = rows.len(),
            "计算完成"
        );

        Ok(UitslagReport {
            rows,
            stats,
            header_detected: resolved.header_detected,
            summary,
            diagnostics: log.messages,
        })
    }
}

/// 便捷入口: 用给定配置计算一次
pub fn compute(text: &str, config: &CalcConfig) -> ImportResult<UitslagReport> {
    UitslagCalculator::new(config.clone()).compute(text)
}
