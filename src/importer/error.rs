// ==========================================
// 板件清单计算 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 分类: ImportError 致命（中止整次计算）/ RowError 可恢复（仅跳过该行）
// ==========================================

use thiserror::Error;

/// 导入模块错误类型（致命）
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 表头相关错误 =====
    #[error("Missing column: '{0}'")]
    MissingColumn(String),

    // ===== 文件相关错误 =====
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Unsupported file format: {0} (expected .tsv/.txt/.tab/.csv/.xlsx/.xls/.xlsm/.ods)")]
    UnsupportedFormat(String),

    #[error("Failed to read file: {0}")]
    FileReadError(String),

    #[error("Excel parse error: {0}")]
    ExcelParseError(String),

    #[error("TSV parse error: {0}")]
    TsvParseError(String),

    // ===== 配置错误 =====
    #[error("Failed to read config (key: {key}): {message}")]
    ConfigReadError { key: String, message: String },

    #[error("Invalid config value (key: {key}, value: {value}): {message}")]
    ConfigValueError {
        key: String,
        value: String,
        message: String,
    },

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::TsvParseError(err.to_string())
    }
}

// 实现 From<calamine::Error>
impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

// 实现 From<serde_json::Error>（配置文件）
impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        ImportError::ConfigReadError {
            key: "config.json".to_string(),
            message: err.to_string(),
        }
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;

/// 行级错误（可恢复）
///
/// 出现时只跳过该行并计入 skipped，不会中止计算。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RowError {
    #[error("Line {line}: Not enough columns ({found} < {required}), skipping")]
    NotEnoughColumns {
        line: usize,
        found: usize,
        required: usize,
    },

    #[error("Line {line}: Empty materiaal, skipping")]
    EmptyMaterial { line: usize },

    #[error("Line {line}: Error processing - invalid {field} value: '{value}'")]
    InvalidNumber {
        line: usize,
        field: String,
        value: String,
    },
}
