// ==========================================
// 汇总性质测试（proptest）
// ==========================================
// CI: 256 次; 加压: PROPTEST_CASES=10000 cargo test --release
// 长宽使用整数 mm，求和无浮点误差
// ==========================================


use std::collections::BTreeMap;

use proptest::prelude::*;
use test_helpers::{with_header, Panel};
use uitslag_calc::engine::round2;
use uitslag_calc::{CalcConfig, UitslagCalculator};

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(256),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

// ==========================================
// 生成器
// ==========================================

fn arb_panel() -> impl Strategy<Value = Panel> {
    (
        r"[A-Z][a-z0-9_]{0,6}",
        1u32..3000,
        1u32..1500,
        1u32..20,
        any::<[bool; 4]>(),
    )
        .prop_map(|(materiaal, lengte, breedte, aantal, edges)| {
            Panel::new(
                &materiaal,
                &lengte.to_string(),
                &breedte.to_string(),
                &aantal.to_string(),
            )
            .edges(edges)
        })
}

fn arb_panels() -> impl Strategy<Value = Vec<Panel>> {
    prop::collection::vec(arb_panel(), 1..25)
}

fn has_marks(panel: &Panel) -> bool {
    panel.kant_x1 || panel.kant_x2 || panel.kant_y1 || panel.kant_y2
}

proptest! {
    #![proptest_config(config())]

    #[test]
    fn zero_total_iff_no_edge_marks(panels in arb_panels()) {
        let report = UitslagCalculator::default().compute(&with_header(&panels)).unwrap();

        let mut marked: BTreeMap<String, bool> = BTreeMap::new();
        for panel in &panels {
            *marked.entry(panel.materiaal.clone()).or_insert(false) |= has_marks(panel);
        }

        prop_assert_eq!(report.rows.len(), marked.len());
        for row in &report.rows {
            let expect_banding = marked[&row.materiaal];
            prop_assert_eq!(row.totaal_opgeteld_m > 0.0, expect_banding, "{}", row.materiaal);
        }
    }

    #[test]
    fn row_order_does_not_change_totals(panels in arb_panels()) {
        let calculator = UitslagCalculator::new(CalcConfig::default());
        let forward = calculator.compute(&with_header(&panels)).unwrap();

        let mut reversed = panels.clone();
        reversed.reverse();
        let backward = calculator.compute(&with_header(&reversed)).unwrap();

        prop_assert_eq!(forward.rows, backward.rows);
    }

    #[test]
    fn output_sorted_and_rounded(panels in arb_panels()) {
        let report = UitslagCalculator::default().compute(&with_header(&panels)).unwrap();

        for pair in report.rows.windows(2) {
            prop_assert!(pair[0].materiaal < pair[1].materiaal);
        }
        for row in &report.rows {
            prop_assert_eq!(round2(row.totaal_lengte_m), row.totaal_lengte_m);
            prop_assert_eq!(round2(row.totaal_breedte_m), row.totaal_breedte_m);
            prop_assert_eq!(round2(row.totaal_opgeteld_m), row.totaal_opgeteld_m);
            let parts = row.totaal_lengte_m + row.totaal_breedte_m;
            prop_assert!((row.totaal_opgeteld_m - parts).abs() <= 0.0100001);
        }
        prop_assert_eq!(report.stats.processed, panels.len());
        prop_assert_eq!(report.stats.skipped, 0);
    }
}
