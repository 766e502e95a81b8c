// ==========================================
// 板件清单计算 - 导入接口 Trait
// ==========================================
// 职责: 定义导入模块的文件解析接口（不包含实现）
// ==========================================

use crate::domain::RawTable;
use crate::importer::error::ImportResult;
use std::path::Path;

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件 → 原始行（阶段 0）
// 实现者: TsvParser, ExcelParser
pub trait FileParser: Send + Sync {
    /// 解析文件为原始行
    ///
    /// # 参数
    /// - file_path: 文件路径
    ///
    /// # 返回
    /// - Ok(RawTable): 非空白行，保留原始行号，字段未 trim
    /// - Err: 文件不存在 / 格式不支持 / 读取失败
    fn parse_to_raw_lines(&self, file_path: &Path) -> ImportResult<RawTable>;

    /// 该解析器支持的扩展名（小写，不含点）
    fn extensions(&self) -> &'static [&'static str];
}
