// ==========================================
// 板件清单计算 - 数据清洗器实现
// ==========================================
// 职责: TRIM / 小数逗号标准化 / 数量兜底 / 封边字段读取
// ==========================================

pub struct DataCleaner;

impl DataCleaner {
    pub fn clean_text(&self, value: &str) -> String {
        value.trim().to_string()
    }

    /// 解析尺寸: 先 trim，再把 ',' 替换为 '.'
    ///
    /// "563,5" → 563.5；"1.234,5" 会变成 "1.234.5" 从而解析失败
    pub fn parse_decimal(&self, value: &str) -> Option<f64> {
        value.trim().replace(',', ".").parse::<f64>().ok()
    }

    /// 解析数量: 仅由 ASCII 数字组成时取其值，否则为 1
    ///
    /// "-2"、"1.5"、"abc"、"" 都得到 1；超出 u64 的纯数字串按 f64 取近似值。
    /// 只有超出 f64 范围（无穷大）时返回 None，该行跳过
    pub fn parse_aantal(&self, value: &str) -> Option<f64> {
        let trimmed = value.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Some(1.0);
        }
        match trimmed.parse::<u64>() {
            Ok(n) => Some(n as f64),
            Err(_) => trimmed.parse::<f64>().ok().filter(|n| n.is_finite()),
        }
    }

    /// 读取封边字段: 索引越界或为空时返回空串
    pub fn edge_value(&self, fields: &[String], idx: usize) -> String {
        fields
            .get(idx)
            .map(|v| self.clean_text(v))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_basic() {
        assert_eq!(DataCleaner.clean_text("  Eiken 18 \r"), "Eiken 18");
    }

    #[test]
    fn test_parse_decimal_comma() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.parse_decimal("563,5"), Some(563.5));
        assert_eq!(cleaner.parse_decimal(" 563.0 "), Some(563.0));
        assert_eq!(cleaner.parse_decimal("600"), Some(600.0));
        assert_eq!(cleaner.parse_decimal("1.234,5"), None);
        assert_eq!(cleaner.parse_decimal("abc"), None);
        assert_eq!(cleaner.parse_decimal(""), None);
    }

    #[test]
    fn test_parse_aantal_defaults_to_one() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.parse_aantal("3"), Some(3.0));
        assert_eq!(cleaner.parse_aantal(" 12 "), Some(12.0));
        assert_eq!(cleaner.parse_aantal("0"), Some(0.0));
        assert_eq!(cleaner.parse_aantal("abc"), Some(1.0));
        assert_eq!(cleaner.parse_aantal("-2"), Some(1.0));
        assert_eq!(cleaner.parse_aantal("1.5"), Some(1.0));
        assert_eq!(cleaner.parse_aantal(""), Some(1.0));
    }

    #[test]
    fn test_parse_aantal_beyond_u64() {
        let cleaner = DataCleaner;
        assert_eq!(
            cleaner.parse_aantal("99999999999999999999999"),
            Some(99999999999999999999999.0)
        );
        assert_eq!(cleaner.parse_aantal("18446744073709551616"), Some(18446744073709551616.0));
        assert_eq!(cleaner.parse_aantal(&"9".repeat(400)), None);
    }

    #[test]
    fn test_edge_value_bounds() {
        let cleaner = DataCleaner;
        let fields = vec!["a".to_string(), " X ".to_string()];
        assert_eq!(cleaner.edge_value(&fields, 1), "X");
        assert_eq!(cleaner.edge_value(&fields, 5), "");
    }
}
