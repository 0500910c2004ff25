// ==========================================
// 校园招聘就业管理系统 - 导入模板
// ==========================================
// 职责: 生成可下载的导入模板（CSV，含两条示例数据）
// ==========================================

use crate::importer::error::ImportResult;
use crate::importer::field_mapper::TEMPLATE_HEADERS;
use csv::WriterBuilder;
use std::io::Write;

/// 模板示例行（列顺序与 TEMPLATE_HEADERS 一致）
pub fn sample_rows() -> Vec<[&'static str; 13]> {
    vec![
        [
            "21CS001",
            "John Doe",
            "john.doe@college.edu",
            "9876543210",
            "Computer Science",
            "2021-2025",
            "8.5",
            "Google",
            "Software Engineer",
            "25",
            "placement",
            "2024-01-15",
            "accepted",
        ],
        [
            "21CS002",
            "Jane Smith",
            "jane.smith@college.edu",
            "9876543211",
            "Computer Science",
            "2021-2025",
            "9.0",
            "Microsoft",
            "SDE Intern",
            "1.5",
            "internship",
            "2024-02-20",
            "accepted",
        ],
    ]
}

/// 写出模板 CSV
pub fn write_template_csv<W: Write>(writer: W) -> ImportResult<()> {
    let mut wtr = WriterBuilder::new().from_writer(writer);
    wtr.write_record(TEMPLATE_HEADERS)?;
    for row in sample_rows() {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// 模板 CSV 内容
pub fn template_csv_bytes() -> ImportResult<Vec<u8>> {
    let mut buf = Vec::new();
    write_template_csv(&mut buf)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::file_parser::CsvParser;
    use crate::importer::importer_trait::FileParser;
    use crate::importer::student_validator::StudentValidator;
    use chrono::NaiveDate;
    use std::collections::HashSet;

    #[test]
    fn test_template_passes_validation() {
        let bytes = template_csv_bytes().unwrap();
        let rows = CsvParser.parse_bytes(&bytes).unwrap();
        assert_eq!(rows.len(), 2);

        let result = StudentValidator::new(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())
            .validate_and_transform(&rows, &HashSet::new());

        assert!(result.is_valid, "{:?}", result.errors);
        assert_eq!(result.students.len(), 2);
        assert_eq!(result.students[1].placement_offers[0].package_lpa, 1.5);
    }
}
