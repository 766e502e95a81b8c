// ==========================================
// 板件清单计算 - 按材料汇总
// ==========================================
// 流程: 按 materiaal 分组求和(mm) → /1000 得 m → 两位小数舍入
// 顺序: BTreeMap 键序即按字符串升序
// ==========================================

use crate::domain::{ComputedRow, SummaryRow};
use std::collections::BTreeMap;

const MM_PER_M: f64 = 1000.0;

/// 舍入到两位小数
///
/// 基于二进制值的精确十进制展开舍入，1.005 → 1.0，2.675 → 2.67
pub fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// 分组求和并生成按材料名升序的汇总行
pub fn aggregate(rows: &[ComputedRow]) -> Vec<SummaryRow> {
    let mut groups: BTreeMap<&str, (f64, f64)> = BTreeMap::new();

    for row in rows {
        let entry = groups.entry(row.materiaal.as_str()).or_insert((0.0, 0.0));
        entry.0 += row.uitslag_lengte;
        entry.1 += row.uitslag_breedte;
    }

    groups
        .into_iter()
        .map(|(materiaal, (lengte_mm, breedte_mm))| {
            let lengte_m = lengte_mm / MM_PER_M;
            let breedte_m = breedte_mm / MM_PER_M;
            SummaryRow {
                materiaal: materiaal.to_string(),
                totaal_lengte_m: round2(lengte_m),
                totaal_breedte_m: round2(breedte_m),
                totaal_opgeteld_m: round2(lengte_m + breedte_m),
            }
        })
        .collect()
}
