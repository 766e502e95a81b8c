// ==========================================
// 板件清单计算 - 文件解析器实现
// ==========================================
// 支持: Tab 分隔文本 (.tsv/.txt/.tab/.csv) / Excel (.xlsx/.xls/.xlsm/.ods)
// 输出: RawTable（行号 + 原始字段）
// ==========================================

use crate::domain::{RawLine, RawTable};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::importer_trait::FileParser;
use calamine::{open_workbook_auto, Reader};
use csv::ReaderBuilder;
use std::path::Path;
use tracing::debug;

const TSV_EXTENSIONS: &[&str] = &["tsv", "txt", "tab", "csv"];
const EXCEL_EXTENSIONS: &[&str] = &["xlsx", "xls", "xlsm", "ods"];

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

fn ensure_exists(path: &Path) -> ImportResult<()> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

// ==========================================
// TSV Parser 实现
// ==========================================
pub struct TsvParser;

impl TsvParser {
    /// 解析 Tab 分隔的文本
    ///
    /// 不做引号处理，字段按 Tab 原样切分；空白行丢弃（不计数）。
    pub fn parse_text(&self, text: &str) -> ImportResult<RawTable> {
        let text = text.trim_start_matches('\u{feff}');

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .delimiter(b'\t')
            .quoting(false)
            .flexible(true) // 允许行长度不一致
            .from_reader(text.as_bytes());

        let mut table = Vec::new();
        for result in reader.records() {
            let record = result?;
            let line_number = record
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(table.len() + 1);

            let line = RawLine::new(line_number, record.iter().map(str::to_string).collect());

            // 跳过完全空白的行
            if line.is_blank() {
                continue;
            }
            table.push(line);
        }

        debug!(lines = table.len(), "TSV 解析完成");
        Ok(table)
    }
}

impl FileParser for TsvParser {
    fn parse_to_raw_lines(&self, file_path: &Path) -> ImportResult<RawTable> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if !TSV_EXTENSIONS.contains(&ext.as_str()) {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let text = std::fs::read_to_string(file_path)?;
        self.parse_text(&text)
    }

    fn extensions(&self) -> &'static [&'static str] {
        TSV_EXTENSIONS
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn parse_to_raw_lines(&self, file_path: &Path) -> ImportResult<RawTable> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if !EXCEL_EXTENSIONS.contains(&ext.as_str()) {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let mut workbook = open_workbook_auto(file_path)?;

        // 读取第一个 sheet
        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| ImportError::ExcelParseError("workbook has no worksheets".to_string()))?;
        let range = workbook.worksheet_range(&sheet_name)?;

        // Range 从第一个非空单元格开始，需补回前导的空行/空列
        let (start_row, start_col) = range
            .start()
            .map(|(r, c)| (r as usize, c as usize))
            .unwrap_or((0, 0));

        let mut table = Vec::new();
        for (idx, row) in range.rows().enumerate() {
            let mut fields = vec![String::new(); start_col];
            fields.extend(row.iter().map(|cell| cell.to_string()));

            let line = RawLine::new(start_row + idx + 1, fields);
            if line.is_blank() {
                continue;
            }
            table.push(line);
        }

        debug!(sheet = %sheet_name, lines = table.len(), "Excel 解析完成");
        Ok(table)
    }

    fn extensions(&self) -> &'static [&'static str] {
        EXCEL_EXTENSIONS
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<RawTable> {
        let path = file_path.as_ref();
        let ext = extension_of(path);

        let parsers: [&dyn FileParser; 2] = [&TsvParser, &ExcelParser];
        match parsers
            .iter()
            .find(|p| p.extensions().contains(&ext.as_str()))
        {
            Some(parser) => parser.parse_to_raw_lines(path),
            None => {
                ensure_exists(path)?;
                Err(ImportError::UnsupportedFormat(ext))
            }
        }
    }
}
