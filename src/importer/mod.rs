// ==========================================
// 板件清单计算 - 导入层
// ==========================================
// 职责: 原始文本/文件 → 原始行 → 列定位 → PanelRow
// 支持: Tab 分隔文本, Excel
// ==========================================

// 模块声明
pub mod column_resolver;
pub mod data_cleaner;
pub mod error;
pub mod file_parser;
pub mod importer_trait;
pub mod row_mapper;

// 重导出核心类型
pub use column_resolver::{resolve_layout, ColumnLayout, ResolvedLayout, KNOWN_HEADERS};
pub use data_cleaner::DataCleaner;
pub use error::{ImportError, ImportResult, RowError};
pub use file_parser::{ExcelParser, TsvParser, UniversalFileParser};
pub use importer_trait::FileParser;
pub use row_mapper::RowMapper;
