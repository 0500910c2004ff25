// ==========================================
// 校园招聘就业管理系统 - 数据清洗器实现
// ==========================================
// 职责: TRIM / NULL 标准化 / 数值与日期解析 / 枚举默认值
// ==========================================

use crate::domain::types::{OfferStatus, OfferType};
use chrono::{Days, NaiveDate};

/// Excel 序列日期的起点（1900 日期系统，含 1900-02-29 兼容偏移）
const EXCEL_EPOCH: (i32, u32, u32) = (1899, 12, 30);

/// 支持的日期文本格式
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%d-%m-%Y", "%Y%m%d"];

pub struct DataCleaner;

impl DataCleaner {
    pub fn clean_text(&self, value: &str) -> String {
        value.trim().to_string()
    }

    /// 标准化 NULL 值（空字符串/空白 → None）
    pub fn normalize_null(&self, value: Option<&str>) -> Option<String> {
        value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    /// 解析数值；缺失、无法解析、NaN 或无穷大一律取 0
    ///
    /// 非有限值无法写入 JSON 文档，必须在此挡住
    pub fn parse_number(&self, value: Option<&str>) -> f64 {
        value
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    }

    /// 解析年薪（LPA）；负值视为无效，取 0
    pub fn parse_package(&self, value: Option<&str>) -> f64 {
        self.parse_number(value).max(0.0)
    }

    /// 解析 Offer 日期
    ///
    /// # 规则
    /// - 缺失 → today
    /// - 文本日期: YYYY-MM-DD / YYYY/MM/DD / DD-MM-YYYY / YYYYMMDD
    /// - 纯数字且不是 8 位 → Excel 序列日期
    /// - 其他无法解析 → today
    pub fn parse_offer_date(&self, value: Option<&str>, today: NaiveDate) -> NaiveDate {
        let Some(raw) = self.normalize_null(value) else {
            return today;
        };

        if let Some(date) = DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(&raw, fmt).ok())
        {
            return date;
        }

        // 带时间部分的 ISO 文本（如 2024-01-15T00:00:00Z）
        if let Some(date) = raw
            .get(..10)
            .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
        {
            return date;
        }

        if let Some(date) = self.parse_excel_serial(&raw) {
            return date;
        }

        tracing::warn!(value = %raw, "Offer 日期无法解析，使用当天日期");
        today
    }

    fn parse_excel_serial(&self, raw: &str) -> Option<NaiveDate> {
        let serial = raw.parse::<f64>().ok()?;
        if !(1.0..=2_958_465.0).contains(&serial) {
            return None;
        }
        let (y, m, d) = EXCEL_EPOCH;
        NaiveDate::from_ymd_opt(y, m, d)?.checked_add_days(Days::new(serial.trunc() as u64))
    }

    /// Offer 类型；缺失或无法识别 → placement
    pub fn parse_offer_type(&self, value: Option<&str>) -> OfferType {
        value
            .and_then(|v| v.parse::<OfferType>().ok())
            .unwrap_or_default()
    }

    /// Offer 状态；缺失或无法识别 → pending
    pub fn parse_offer_status(&self, value: Option<&str>) -> OfferStatus {
        value
            .and_then(|v| v.parse::<OfferStatus>().ok())
            .unwrap_or_default()
    }
}
