// ==========================================
// 板件清单计算 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，把导入/配置错误转换为可展示的消息
// ==========================================

use crate::importer::error::ImportError;
use thiserror::Error;

/// API层错误类型
/// 消息原样展示在错误行中，不再加前缀
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入错误（表头缺列、格式不支持）
    // ==========================================
    #[error("{0}")]
    InvalidInput(String),

    // ==========================================
    // 文件读取/解析错误
    // ==========================================
    #[error("{0}")]
    ImportError(String),

    // ==========================================
    // 配置错误
    // ==========================================
    #[error("{0}")]
    ConfigError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("Internal error: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApiError {
    /// 错误代码（JSON 输出用）
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::ImportError(_) => "IMPORT_ERROR",
            ApiError::ConfigError(_) => "CONFIG_ERROR",
            ApiError::InternalError(_) => "INTERNAL_ERROR",
            ApiError::Other(_) => "OTHER_ERROR",
        }
    }
}

// ==========================================
// 从 ImportError 转换
// ==========================================
impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::MissingColumn(_) | ImportError::UnsupportedFormat(_) => {
                ApiError::InvalidInput(err.to_string())
            }
            ImportError::FileNotFound(_)
            | ImportError::FileReadError(_)
            | ImportError::ExcelParseError(_)
            | ImportError::TsvParseError(_) => ApiError::ImportError(err.to_string()),
            ImportError::ConfigReadError { .. } | ImportError::ConfigValueError { .. } => {
                ApiError::ConfigError(err.to_string())
            }
            ImportError::Other(e) => ApiError::Other(e),
        }
    }
}

/// API结果类型别名
pub type ApiResult<T> = Result<T, ApiError>;
