// ==========================================
// UitslagApi 集成测试
// ==========================================
// 测试目标: 文件导入、错误行、输出渲染
// ==========================================


use std::io::Write;
use std::path::Path;

use tempfile::{Builder, NamedTempFile};
use test_helpers::{with_header, Panel};
use uitslag_calc::api::{ErrorRow, ResultRow};
use uitslag_calc::app::{render, OutputFormat};
use uitslag_calc::{CalcConfig, CalculationResponse, UitslagApi};

fn write_temp(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn cut_list() -> String {
    with_header(&[
        Panel::new("Eiken_18", "563.0", "520.0", "2").edges([false, true, false, false]),
        Panel::new("MDF_18", "1200", "600", "1").edges([true, true, true, true]),
    ])
}

fn error_message(response: &CalculationResponse) -> &str {
    match &response.rows[0] {
        ResultRow::Error(row) => &row.message,
        other => panic!("expected error row, got {:?}", other),
    }
}

// ==========================================
// 文件导入
// ==========================================

#[test]
fn test_tsv_file_matches_text() {
    let api = UitslagApi::new(CalcConfig::default());
    let file = write_temp(".tsv", &cut_list());

    let from_file = api.calculate_file(file.path());
    let from_text = api.calculate_text(&cut_list());

    assert!(!from_file.is_error);
    assert_eq!(from_file, from_text);
    assert_eq!(from_file.rows.len(), 2);
}

#[test]
fn test_xlsx_file_matches_tsv() {
    let api = UitslagApi::new(CalcConfig::default());
    let fixture = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/zaaglijst.xlsx");

    // 与 fixture 首个工作表内容相同（B2 起）
    let tsv = with_header(&[
        Panel::new("Eiken_18", "563", "520", "2").edges([false, true, false, false]),
        Panel::new("MDF_18", "1200", "600", "1").edges([true, true, true, true]),
        Panel::new("Eiken_18", "800.5", "400", "3").edges([true, false, true, false]),
    ]);

    let from_xlsx = api.calculate_file(&fixture);
    assert!(!from_xlsx.is_error, "{:?}", from_xlsx.rows);
    assert_eq!(from_xlsx, api.calculate_text(&tsv));

    let report = api.summarize_file(&fixture).unwrap();
    assert_eq!(report.stats.processed, 3);
    assert_eq!(report.rows[0].materiaal, "Eiken_18");
    assert_eq!(report.rows[0].totaal_opgeteld_m, 5.13);
}

#[test]
fn test_txt_extension_is_accepted() {
    let api = UitslagApi::new(CalcConfig::default());
    let file = write_temp(".TXT", &cut_list());

    let response = api.calculate_file(file.path());
    assert!(!response.is_error);
}

#[test]
fn test_unsupported_extension() {
    let api = UitslagApi::new(CalcConfig::default());
    let file = write_temp(".pdf", "not a cut list");

    let response = api.calculate_file(file.path());
    assert!(response.is_error);
    assert_eq!(response.error_code.as_deref(), Some("INVALID_INPUT"));
}

#[test]
fn test_file_not_found() {
    let api = UitslagApi::new(CalcConfig::default());
    let response = api.calculate_file(Path::new("/nonexistent/zaaglijst.tsv"));

    assert!(response.is_error);
    assert_eq!(response.error_code.as_deref(), Some("IMPORT_ERROR"));
    assert!(error_message(&response).contains("zaaglijst.tsv"));
}

#[test]
fn test_file_missing_column() {
    let api = UitslagApi::new(CalcConfig::default().with_debug(true));
    let file = write_temp(".tsv", "Materiaal\tLengte\tBreedte\nMDF\t100\t100\n");

    let response = api.calculate_file(file.path());
    assert_eq!(
        response.rows,
        vec![ResultRow::Error(ErrorRow::new("Missing column: 'Aantal'"))]
    );
    assert_eq!(response.debug_info, "Exception: Missing column: 'Aantal'");
}

#[test]
fn test_summarize_file_no_data() {
    let api = UitslagApi::new(CalcConfig::default());
    let file = write_temp(".tsv", "\n\n");

    let report = api.summarize_file(file.path()).unwrap();
    assert!(report.rows.is_empty());
    assert_eq!(report.summary, "No data found");
}

// ==========================================
// 配置对结果的影响
// ==========================================

#[test]
fn test_custom_allowance() {
    let api = UitslagApi::new(CalcConfig::default().with_edge_allowance_mm(0.0));
    let text = with_header(&[Panel::new("MDF", "1000", "500", "2").edges([true, false, false, false])]);

    let report = api.summarize_text(&text).unwrap();
    assert_eq!(report.rows[0].totaal_lengte_m, 2.0);
}

// ==========================================
// 渲染
// ==========================================

#[test]
fn test_render_tsv_output() {
    let api = UitslagApi::new(CalcConfig::default());
    let response = api.calculate_text(&cut_list());

    let tsv = render(&response, OutputFormat::Tsv).unwrap();
    let lines: Vec<&str> = tsv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "Eiken_18\t1.23\t0.00\t1.23");
    assert_eq!(lines[2], "MDF_18\t2.50\t1.30\t3.80");
}

#[test]
fn test_render_json_output() {
    let api = UitslagApi::new(CalcConfig::default());
    let response = api.calculate_text(&cut_list());

    let json = render(&response, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["is_error"], false);
    assert_eq!(value["rows"][0]["Materiaal"], "Eiken_18");
    assert_eq!(value["rows"][1]["TotaalUitslagOpgeteld_m"], 3.8);
    assert!(value.get("error_code").is_none());
}

#[test]
fn test_render_table_with_debug() {
    let api = UitslagApi::new(CalcConfig::default().with_debug(true));
    let response = api.calculate_text(&cut_list());

    let table = render(&response, OutputFormat::Table).unwrap();
    assert!(table.contains("Found materials: ['Eiken_18', 'MDF_18']"));
}
