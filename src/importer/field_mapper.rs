// ==========================================
// 校园招聘就业管理系统 - 字段映射器实现
// ==========================================
// 职责: 表格列名 → 标准字段映射
// 说明: 只做取值与空值标准化，不做类型转换/校验
// ==========================================

use crate::importer::importer_trait::RawRow;

// ==========================================
// 导入模板列名
// ==========================================
pub const COL_REGISTER_NUMBER: &str = "Register Number";
pub const COL_NAME: &str = "Name";
pub const COL_EMAIL: &str = "Email";
pub const COL_PHONE: &str = "Phone";
pub const COL_BRANCH: &str = "Branch";
pub const COL_BATCH: &str = "Batch";
pub const COL_CGPA: &str = "CGPA";
pub const COL_COMPANY_NAME: &str = "Company Name";
pub const COL_ROLE: &str = "Role";
pub const COL_PACKAGE_LPA: &str = "Package (LPA)";
pub const COL_OFFER_TYPE: &str = "Offer Type";
pub const COL_OFFER_DATE: &str = "Offer Date";
pub const COL_STATUS: &str = "Status";

/// 模板表头（顺序即模板列顺序）
pub const TEMPLATE_HEADERS: [&str; 13] = [
    COL_REGISTER_NUMBER,
    COL_NAME,
    COL_EMAIL,
    COL_PHONE,
    COL_BRANCH,
    COL_BATCH,
    COL_CGPA,
    COL_COMPANY_NAME,
    COL_ROLE,
    COL_PACKAGE_LPA,
    COL_OFFER_TYPE,
    COL_OFFER_DATE,
    COL_STATUS,
];

// ==========================================
// StudentRow - 映射后的中间结构体
// ==========================================
// 所有字段均为 Option：空串/空白 → None
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentRow {
    pub register_number: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub branch: Option<String>,
    pub batch: Option<String>,
    pub cgpa: Option<String>,

    // Offer 字段（可选，一行一个 Offer）
    pub company_name: Option<String>,
    pub role: Option<String>,
    pub package_lpa: Option<String>,
    pub offer_type: Option<String>,
    pub offer_date: Option<String>,
    pub status: Option<String>,

    // 元信息: 表格行号（表头为第 1 行）
    pub row_number: usize,
}

pub struct FieldMapper;

impl FieldMapper {
    /// 将原始行记录映射为 StudentRow
    pub fn map_row(&self, row: &RawRow, row_number: usize) -> StudentRow {
        StudentRow {
            register_number: self.get_string(row, COL_REGISTER_NUMBER),
            name: self.get_string(row, COL_NAME),
            email: self.get_string(row, COL_EMAIL),
            phone: self.get_string(row, COL_PHONE),
            branch: self.get_string(row, COL_BRANCH),
            batch: self.get_string(row, COL_BATCH),
            cgpa: self.get_string(row, COL_CGPA),
            company_name: self.get_string(row, COL_COMPANY_NAME),
            role: self.get_string(row, COL_ROLE),
            package_lpa: self.get_string(row, COL_PACKAGE_LPA),
            offer_type: self.get_string(row, COL_OFFER_TYPE),
            offer_date: self.get_string(row, COL_OFFER_DATE),
            status: self.get_string(row, COL_STATUS),
            row_number,
        }
    }

    /// 提取字符串字段，支持别名列名；空白值视为缺失
    fn get_string(&self, row: &RawRow, key: &str) -> Option<String> {
        let aliases: &[&str] = match key {
            COL_REGISTER_NUMBER => &[COL_REGISTER_NUMBER, "Register No", "Reg No"],
            COL_PACKAGE_LPA => &[COL_PACKAGE_LPA, "Package"],
            _ => &[],
        };

        std::iter::once(key)
            .chain(aliases.iter().copied())
            .filter_map(|name| row.get(name))
            .map(|v| v.trim())
            .find(|v| !v.is_empty())
            .map(str::to_string)
    }
}
