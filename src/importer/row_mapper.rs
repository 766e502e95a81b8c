// ==========================================
// 板件清单计算 - 行映射器
// ==========================================
// 职责: RawLine + ColumnLayout → PanelRow
// 失败: 返回 RowError，由调用方跳过并计数
// ==========================================

use crate::domain::{PanelRow, RawLine};
use crate::importer::column_resolver::{ColumnLayout, COL_AANTAL, COL_BREEDTE, COL_LENGTE};
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::error::RowError;

pub struct RowMapper {
    layout: ColumnLayout,
    cleaner: DataCleaner,
}

impl RowMapper {
    pub fn new(layout: ColumnLayout) -> Self {
        Self {
            layout,
            cleaner: DataCleaner,
        }
    }

    pub fn map_line(&self, line: &RawLine) -> Result<PanelRow, RowError> {
        let fields = &line.fields;
        let layout = &self.layout;

        let required = layout.min_required_columns();
        if fields.len() < required {
            return Err(RowError::NotEnoughColumns {
                line: line.line_number,
                found: fields.len(),
                required,
            });
        }

        let materiaal = self.cleaner.clean_text(&fields[layout.materiaal]);
        if materiaal.is_empty() {
            return Err(RowError::EmptyMaterial {
                line: line.line_number,
            });
        }

        let lengte = self.parse_dimension(line, layout.lengte, COL_LENGTE)?;
        let breedte = self.parse_dimension(line, layout.breedte, COL_BREEDTE)?;

        let raw_aantal = &fields[layout.aantal];
        let aantal = self
            .cleaner
            .parse_aantal(raw_aantal)
            .ok_or_else(|| RowError::InvalidNumber {
                line: line.line_number,
                field: COL_AANTAL.to_string(),
                value: raw_aantal.trim().to_string(),
            })?;

        Ok(PanelRow {
            materiaal,
            lengte,
            breedte,
            aantal,
            kant_x1: self.cleaner.edge_value(fields, layout.kant_x1),
            kant_x2: self.cleaner.edge_value(fields, layout.kant_x2),
            kant_y1: self.cleaner.edge_value(fields, layout.kant_y1),
            kant_y2: self.cleaner.edge_value(fields, layout.kant_y2),
            line_number: line.line_number,
        })
    }

    fn parse_dimension(&self, line: &RawLine, idx: usize, field: &str) -> Result<f64, RowError> {
        let raw = &line.fields[idx];
        self.cleaner
            .parse_decimal(raw)
            .ok_or_else(|| RowError::InvalidNumber {
                line: line.line_number,
                field: field.to_string(),
                value: raw.trim().to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(line_number: usize, fields: &[&str]) -> RawLine {
        RawLine::new(line_number, fields.iter().map(|f| f.to_string()).collect())
    }

    fn header_layout() -> ColumnLayout {
        ColumnLayout {
            materiaal: 0,
            lengte: 1,
            breedte: 2,
            aantal: 3,
            kant_x2: 4,
            kant_x1: 5,
            kant_y1: 6,
            kant_y2: 7,
        }
    }

    #[test]
    fn test_map_full_row() {
        let mapper = RowMapper::new(header_layout());
        let row = mapper
            .map_line(&raw(2, &[" Plank_A ", "563,5", "520.0", "2", "", "X", " X", ""]))
            .unwrap();
        assert_eq!(row.materiaal, "Plank_A");
        assert_eq!(row.lengte, 563.5);
        assert_eq!(row.breedte, 520.0);
        assert_eq!(row.aantal, 2.0);
        assert_eq!(row.kant_x1, "X");
        assert_eq!(row.kant_y1, "X");
        assert_eq!(row.kant_x2, "");
        assert_eq!(row.line_number, 2);
    }

    #[test]
    fn test_missing_edge_columns_are_empty() {
        let mapper = RowMapper::new(header_layout());
        let row = mapper.map_line(&raw(3, &["MDF", "100", "50", "1"])).unwrap();
        assert_eq!(row.kant_x1, "");
        assert_eq!(row.kant_y2, "");
    }

    #[test]
    fn test_not_enough_columns() {
        let mapper = RowMapper::new(ColumnLayout::FIXED);
        let err = mapper.map_line(&raw(4, &["MDF", "1", "100", "50"])).unwrap_err();
        assert_eq!(
            err,
            RowError::NotEnoughColumns {
                line: 4,
                found: 4,
                required: 5
            }
        );
    }

    #[test]
    fn test_empty_material() {
        let mapper = RowMapper::new(header_layout());
        let err = mapper.map_line(&raw(5, &["  ", "100", "50", "1"])).unwrap_err();
        assert_eq!(err, RowError::EmptyMaterial { line: 5 });
    }

    #[test]
    fn test_invalid_length() {
        let mapper = RowMapper::new(header_layout());
        let err = mapper.map_line(&raw(6, &["MDF", "lang", "50", "1"])).unwrap_err();
        assert!(matches!(err, RowError::InvalidNumber { field, .. } if field == "Lengte"));
    }

    #[test]
    fn test_non_digit_aantal_defaults_to_one() {
        let mapper = RowMapper::new(header_layout());
        let row = mapper.map_line(&raw(7, &["MDF", "100", "50", "abc"])).unwrap();
        assert_eq!(row.aantal, 1.0);
        let row = mapper.map_line(&raw(8, &["MDF", "100", "50", "-3"])).unwrap();
        assert_eq!(row.aantal, 1.0);
    }

    #[test]
    fn test_huge_aantal_keeps_row() {
        let mapper = RowMapper::new(header_layout());
        let row = mapper
            .map_line(&raw(9, &["A", "100", "0", "99999999999999999999999", "X"]))
            .unwrap();
        assert_eq!(row.aantal, 99999999999999999999999.0);
    }
}
