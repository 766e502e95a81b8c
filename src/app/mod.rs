// ==========================================
// 板件清单计算 - 应用层
// ==========================================
// 职责: 命令行输出渲染
// ==========================================

pub mod render;

// 重导出
pub use render::{render, render_json, render_table, render_tsv, OutputFormat};
