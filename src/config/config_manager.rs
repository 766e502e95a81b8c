// ==========================================
// 板件清单计算 - 配置管理器
// ==========================================
// 职责: 配置加载与多级覆写
// 优先级: 默认值 < JSON 配置文件 < 环境变量 < 命令行参数（调用方处理）
// ==========================================

use crate::config::calc_config::CalcConfig;
use crate::domain::HeaderMode;
use crate::importer::error::{ImportError, ImportResult};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager;

impl ConfigManager {
    /// 默认配置文件路径: <config_dir>/uitslag-calc/config.json
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(config_keys::APP_DIR).join(config_keys::CONFIG_FILE))
    }

    /// 从配置文件 + 进程环境变量加载
    ///
    /// # 参数
    /// - path: 显式配置文件路径；为 None 时尝试默认路径（不存在则跳过）
    pub fn load(path: Option<&Path>) -> ImportResult<CalcConfig> {
        Self::load_with_env(path, |key| std::env::var(key).ok())
    }

    /// 同 load，环境变量读取可注入（便于测试）
    pub fn load_with_env<F>(path: Option<&Path>, env: F) -> ImportResult<CalcConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(p) => Self::read_file(p)?,
            None => match Self::default_config_path().filter(|p| p.is_file()) {
                Some(p) => Self::read_file(&p)?,
                None => CalcConfig::default(),
            },
        };

        Self::apply_env(&mut config, env)?;

        info!(
            header_mode = %config.header_mode,
            debug = config.debug,
            edge_allowance_mm = config.edge_allowance_mm,
            "配置加载完成"
        );
        Ok(config)
    }

    /// 读取 JSON 配置文件，缺失字段取默认值
    pub fn read_file(path: &Path) -> ImportResult<CalcConfig> {
        if !path.is_file() {
            return Err(ImportError::ConfigReadError {
                key: path.display().to_string(),
                message: "config file not found".to_string(),
            });
        }

        let raw = std::fs::read_to_string(path)?;
        let config: CalcConfig = serde_json::from_str(&raw)?;
        Self::validate_allowance(config.edge_allowance_mm, config_keys::EDGE_ALLOWANCE_MM)?;

        debug!(path = %path.display(), "读取配置文件");
        Ok(config)
    }

    /// 环境变量覆写
    fn apply_env<F>(config: &mut CalcConfig, env: F) -> ImportResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        // DEBUG 只有值为 "true"（不区分大小写）时开启
        if let Some(value) = env(config_keys::ENV_DEBUG) {
            config.debug = value.trim().eq_ignore_ascii_case("true");
        }

        if let Some(value) = env(config_keys::ENV_HEADER_MODE) {
            config.header_mode =
                value
                    .parse::<HeaderMode>()
                    .map_err(|message| ImportError::ConfigValueError {
                        key: config_keys::ENV_HEADER_MODE.to_string(),
                        value: value.clone(),
                        message,
                    })?;
        }

        if let Some(value) = env(config_keys::ENV_EDGE_ALLOWANCE_MM) {
            let allowance = value.trim().replace(',', ".").parse::<f64>().map_err(|e| {
                ImportError::ConfigValueError {
                    key: config_keys::ENV_EDGE_ALLOWANCE_MM.to_string(),
                    value: value.clone(),
                    message: e.to_string(),
                }
            })?;
            Self::validate_allowance(allowance, config_keys::ENV_EDGE_ALLOWANCE_MM)?;
            config.edge_allowance_mm = allowance;
        }

        Ok(())
    }

    /// 余量必须为非负有限数
    fn validate_allowance(value: f64, key: &str) -> ImportResult<()> {
        if value.is_finite() && value >= 0.0 {
            Ok(())
        } else {
            Err(ImportError::ConfigValueError {
                key: key.to_string(),
                value: value.to_string(),
                message: "edge allowance must be a finite, non-negative number".to_string(),
            })
        }
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 配置文件
    pub const APP_DIR: &str = "uitslag-calc";
    pub const CONFIG_FILE: &str = "config.json";

    // JSON 字段
    pub const EDGE_ALLOWANCE_MM: &str = "edge_allowance_mm";

    // 环境变量
    pub const ENV_DEBUG: &str = "DEBUG";
    pub const ENV_HEADER_MODE: &str = "UITSLAG_HEADER_MODE";
    pub const ENV_EDGE_ALLOWANCE_MM: &str = "UITSLAG_EDGE_ALLOWANCE_MM";
}
