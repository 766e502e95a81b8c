// ==========================================
// 板件清单计算 - 列定位器
// ==========================================
// 职责: 表头识别 + 列名 → 列索引
// 无表头时使用固定列位置:
//   Materiaal, user0, Lengte, Breedte, Aantal, Onderdeel, Element,
//   Kant_X2, Kant_X1, Kant_Y1, Kant_Y2
// ==========================================

use crate::domain::{HeaderMode, RawLine};
use crate::importer::error::{ImportError, ImportResult};
use serde::Serialize;

pub const COL_MATERIAAL: &str = "Materiaal";
pub const COL_LENGTE: &str = "Lengte";
pub const COL_BREEDTE: &str = "Breedte";
pub const COL_AANTAL: &str = "Aantal";
pub const COL_KANT_X2: &str = "Kant_X2";
pub const COL_KANT_X1: &str = "Kant_X1";
pub const COL_KANT_Y1: &str = "Kant_Y1";
pub const COL_KANT_Y2: &str = "Kant_Y2";

/// 已知列名（同时是缺列检查的顺序）
pub const KNOWN_HEADERS: [&str; 8] = [
    COL_MATERIAAL,
    COL_LENGTE,
    COL_BREEDTE,
    COL_AANTAL,
    COL_KANT_X2,
    COL_KANT_X1,
    COL_KANT_Y1,
    COL_KANT_Y2,
];

// ==========================================
// ColumnLayout - 八个字段的列索引
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnLayout {
    pub materiaal: usize,
    pub lengte: usize,
    pub breedte: usize,
    pub aantal: usize,
    pub kant_x2: usize,
    pub kant_x1: usize,
    pub kant_y1: usize,
    pub kant_y2: usize,
}

impl ColumnLayout {
    /// 无表头时的固定列位置
    pub const FIXED: ColumnLayout = ColumnLayout {
        materiaal: 0,
        lengte: 2,
        breedte: 3,
        aantal: 4,
        kant_x2: 7,
        kant_x1: 8,
        kant_y1: 9,
        kant_y2: 10,
    };

    /// 行内至少需要的列数；封边列不计入（越界视为空）
    pub fn min_required_columns(&self) -> usize {
        self.materiaal
            .max(self.lengte)
            .max(self.breedte)
            .max(self.aantal)
            + 1
    }

    /// 按表头列名定位；同名列取第一次出现的位置
    pub fn from_header(header: &[String]) -> ImportResult<Self> {
        let trimmed: Vec<&str> = header.iter().map(|h| h.trim()).collect();
        let find = |name: &str| -> ImportResult<usize> {
            trimmed
                .iter()
                .position(|h| *h == name)
                .ok_or_else(|| ImportError::MissingColumn(name.to_string()))
        };

        Ok(ColumnLayout {
            materiaal: find(COL_MATERIAAL)?,
            lengte: find(COL_LENGTE)?,
            breedte: find(COL_BREEDTE)?,
            aantal: find(COL_AANTAL)?,
            kant_x2: find(COL_KANT_X2)?,
            kant_x1: find(COL_KANT_X1)?,
            kant_y1: find(COL_KANT_Y1)?,
            kant_y2: find(COL_KANT_Y2)?,
        })
    }
}

/// 首行是否为表头: 任一字段 trim 后等于已知列名
pub fn looks_like_header(fields: &[String]) -> bool {
    fields
        .iter()
        .any(|f| KNOWN_HEADERS.contains(&f.trim()))
}

/// 列定位结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedLayout {
    pub layout: ColumnLayout,
    pub header_detected: bool,
}

impl ResolvedLayout {
    /// 数据行在 RawTable 中的起始下标
    pub fn data_start(&self) -> usize {
        usize::from(self.header_detected)
    }
}

/// 根据首行与表头模式确定列位置
pub fn resolve_layout(first_line: &RawLine, mode: HeaderMode) -> ImportResult<ResolvedLayout> {
    let header_detected = match mode {
        HeaderMode::Required => true,
        HeaderMode::Auto => looks_like_header(&first_line.fields),
    };

    let layout = if header_detected {
        ColumnLayout::from_header(&first_line.fields)?
    } else {
        ColumnLayout::FIXED
    };

    Ok(ResolvedLayout {
        layout,
        header_detected,
    })
}
