// ==========================================
// 板件清单计算 - 命令行入口
// ==========================================
// 读取板件清单（文件或 stdin），输出每种材料的封边总长
// 退出码: 0 成功 / 1 结果为错误行
// ==========================================

use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use uitslag_calc::api::{ApiError, ApiResult, CalculationResponse, UitslagApi};
use uitslag_calc::app::{render, OutputFormat};
use uitslag_calc::config::{CalcConfig, ConfigManager};
use uitslag_calc::domain::HeaderMode;
use uitslag_calc::{logging, VERSION};

#[derive(Parser)]
#[command(name = "uitslag")]
#[command(about = "Edge banding totals per material from a tab-separated cut list")]
#[command(version)]
#[command(after_help = "\
Examples:
  uitslag zaaglijst.tsv
  uitslag zaaglijst.xlsx --format json
  pbpaste | uitslag --header-mode required --debug
  DEBUG=true uitslag zaaglijst.txt -f tsv")]
struct Cli {
    /// Input file (.tsv/.txt/.tab/.csv tab-delimited, or .xlsx/.xls/.xlsm/.ods); omit to read stdin
    input: Option<PathBuf>,

    /// JSON config file (default: <config dir>/uitslag-calc/config.json when present)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Header policy: auto (detect by known column names) or required
    #[arg(long, value_name = "MODE")]
    header_mode: Option<HeaderMode>,

    /// Show the processing summary; per-line diagnostics go to stderr
    #[arg(long)]
    debug: bool,

    /// Allowance per banded edge in millimeters (default 50)
    #[arg(long, value_name = "MM")]
    allowance_mm: Option<f64>,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Emit logs as JSON on stderr
    #[arg(long)]
    log_json: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.log_json {
        logging::init_json();
    } else {
        logging::init();
    }
    info!(version = VERSION, "uitslag-calc 启动");

    // 配置错误同样以错误行输出
    let response = match build_config(&cli) {
        Ok(config) => run(&cli, config),
        Err(e) => CalculationResponse::from_error(&e, cli.debug),
    };

    // 逐行诊断写 stderr，不混入结果
    if !response.diagnostics.is_empty() {
        writeln!(io::stderr(), "{}", response.diagnostics)
            .context("failed to write diagnostics")?;
    }

    let output = render(&response, cli.format)?;
    io::stdout()
        .write_all(output.as_bytes())
        .context("failed to write output")?;

    Ok(if response.is_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// 配置优先级: 文件 < 环境变量 < 命令行
fn build_config(cli: &Cli) -> ApiResult<CalcConfig> {
    let mut config = ConfigManager::load(cli.config.as_deref())?;

    if let Some(mode) = cli.header_mode {
        config.header_mode = mode;
    }
    if cli.debug {
        config.debug = true;
    }
    if let Some(mm) = cli.allowance_mm {
        if !mm.is_finite() || mm < 0.0 {
            return Err(ApiError::InvalidInput(format!(
                "--allowance-mm must be a finite, non-negative number (got {})",
                mm
            )));
        }
        config.edge_allowance_mm = mm;
    }

    Ok(config)
}

fn run(cli: &Cli, config: CalcConfig) -> CalculationResponse {
    let debug = config.debug;
    let api = UitslagApi::new(config);

    match &cli.input {
        Some(path) => api.calculate_file(path),
        None => {
            let mut text = String::new();
            match io::stdin().read_to_string(&mut text) {
                Ok(_) => api.calculate_text(&text),
                Err(e) => CalculationResponse::from_error(
                    &ApiError::ImportError(format!("Failed to read stdin: {}", e)),
                    debug,
                ),
            }
        }
    }
}
