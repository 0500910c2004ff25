// ==========================================
// 校园招聘就业管理系统 - 导入行校验与转换
// ==========================================
// 职责: 原始行 → 校验 → 标准化 → 按学号分组 → 待落库学生档案
// 规则: 逐行执行 7 项检查，命中第一项即记录错误并跳过该行
// 约束: 纯函数，不做 I/O；错误全部收集后一次返回（不 fail-fast）
// ==========================================

use crate::domain::student::{NewStudent, PlacementOffer};
use crate::domain::types::{branches_display, is_valid_branch};
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::{FieldMapper, StudentRow};
use crate::importer::importer_trait::RawRow;
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;
use thiserror::Error;
use uuid::Uuid;

/// 表头占第 1 行，数据行从第 2 行开始编号
pub const FIRST_DATA_ROW: usize = 2;

/// Offer 未填写岗位时的占位值
pub const DEFAULT_ROLE: &str = "Not Specified";

pub const CGPA_MIN: f64 = 0.0;
pub const CGPA_MAX: f64 = 10.0;

/// `local@domain.tld` 形式的邮箱校验
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL_RE: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL_RE
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok())
        .as_ref()
        .is_some_and(|re| re.is_match(email))
}

// ==========================================
// RowViolation - 行级校验违规
// ==========================================
// 检查顺序即枚举顺序
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowViolation {
    #[error("Register Number is required")]
    MissingRegisterNumber,

    #[error("Name is required")]
    MissingName,

    #[error("Branch is required")]
    MissingBranch,

    #[error("Duplicate register number {0} in file")]
    DuplicateInFile(String),

    #[error("Register number {0} already exists in database")]
    DuplicateInDatabase(String),

    #[error("Invalid branch \"{branch}\". Valid branches: {valid}")]
    InvalidBranch { branch: String, valid: String },

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("CGPA must be between 0 and 10")]
    CgpaOutOfRange,
}

impl RowViolation {
    /// 带行号的用户可读错误文本
    pub fn describe(&self, row_number: usize) -> String {
        format!("Row {}: {}", row_number, self)
    }
}

// ==========================================
// ValidationResult - 校验结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// errors 为空 ⇔ true
    pub is_valid: bool,
    pub errors: Vec<String>,
    /// 按学号首次出现顺序排列（无论是否有错误都会返回）
    pub students: Vec<NewStudent>,
}

impl ValidationResult {
    /// 全有或全无: 任一行有错误则整批拒绝
    pub fn ensure_valid(self) -> ImportResult<Vec<NewStudent>> {
        if self.is_valid {
            Ok(self.students)
        } else {
            Err(ImportError::ValidationFailed {
                errors: self.errors,
            })
        }
    }
}

// ==========================================
// StudentValidator
// ==========================================
pub struct StudentValidator {
    field_mapper: FieldMapper,
    data_cleaner: DataCleaner,
    /// Offer 日期缺失时的默认值
    today: NaiveDate,
}

impl StudentValidator {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            field_mapper: FieldMapper,
            data_cleaner: DataCleaner,
            today,
        }
    }

    /// 以本地当天日期为默认 Offer 日期
    pub fn for_today() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }

    /// 校验并转换原始行
    ///
    /// # 参数
    /// - rows: 原始行（不含表头）
    /// - existing_register_numbers: 存储中已存在的学号
    pub fn validate_and_transform(
        &self,
        rows: &[RawRow],
        existing_register_numbers: &HashSet<String>,
    ) -> ValidationResult {
        let mapped: Vec<StudentRow> = rows
            .iter()
            .enumerate()
            .map(|(idx, row)| self.field_mapper.map_row(row, idx + FIRST_DATA_ROW))
            .collect();

        self.validate_rows(&mapped, existing_register_numbers)
    }

    /// 校验已映射的行
    pub fn validate_rows(
        &self,
        rows: &[StudentRow],
        existing_register_numbers: &HashSet<String>,
    ) -> ValidationResult {
        let mut errors = Vec::new();
        let mut seen_register_numbers: HashSet<String> = HashSet::new();

        // 按学号首次出现顺序输出
        let mut students: Vec<NewStudent> = Vec::new();
        let mut index_by_register_number: HashMap<String, usize> = HashMap::new();

        for row in rows {
            let register_number = match self.check_row(
                row,
                &mut seen_register_numbers,
                existing_register_numbers,
            ) {
                Ok(register_number) => register_number,
                Err(violation) => {
                    errors.push(violation.describe(row.row_number));
                    continue;
                }
            };

            let idx = *index_by_register_number
                .entry(register_number.clone())
                .or_insert_with(|| {
                    students.push(self.build_student(row, register_number));
                    students.len() - 1
                });

            if let Some(offer) = self.build_offer(row) {
                students[idx].placement_offers.push(offer);
            }
        }

        tracing::debug!(
            rows = rows.len(),
            errors = errors.len(),
            students = students.len(),
            "导入行校验完成"
        );

        ValidationResult {
            is_valid: errors.is_empty(),
            errors,
            students,
        }
    }

    /// 单行检查（命中第一项即返回）
    ///
    /// 通过时返回 TRIM 后的学号。学号一旦通过批次内查重即计入 seen，
    /// 即使该行随后因其他规则被拒绝。
    fn check_row(
        &self,
        row: &StudentRow,
        seen: &mut HashSet<String>,
        existing: &HashSet<String>,
    ) -> Result<String, RowViolation> {
        // 1. 必填字段
        let register_number = row
            .register_number
            .as_deref()
            .ok_or(RowViolation::MissingRegisterNumber)?;
        row.name.as_deref().ok_or(RowViolation::MissingName)?;
        let branch = row.branch.as_deref().ok_or(RowViolation::MissingBranch)?;

        // 2. 学号标准化
        let register_number = self.data_cleaner.clean_text(register_number);

        // 3. 批次内重复
        if !seen.insert(register_number.clone()) {
            return Err(RowViolation::DuplicateInFile(register_number));
        }

        // 4. 存储中已存在
        if existing.contains(&register_number) {
            return Err(RowViolation::DuplicateInDatabase(register_number));
        }

        // 5. 专业枚举
        if !is_valid_branch(branch) {
            return Err(RowViolation::InvalidBranch {
                branch: branch.to_string(),
                valid: branches_display(),
            });
        }

        // 6. 邮箱格式（仅在填写时校验）
        if let Some(email) = row.email.as_deref() {
            if !is_valid_email(email) {
                return Err(RowViolation::InvalidEmail);
            }
        }

        // 7. CGPA 范围
        let cgpa = self.data_cleaner.parse_number(row.cgpa.as_deref());
        if !(CGPA_MIN..=CGPA_MAX).contains(&cgpa) {
            return Err(RowViolation::CgpaOutOfRange);
        }

        Ok(register_number)
    }

    fn build_student(&self, row: &StudentRow, register_number: String) -> NewStudent {
        let text = |v: &Option<String>| {
            v.as_deref()
                .map(|s| self.data_cleaner.clean_text(s))
                .unwrap_or_default()
        };

        NewStudent {
            register_number,
            name: text(&row.name),
            email: text(&row.email),
            phone: text(&row.phone),
            branch: text(&row.branch),
            batch: text(&row.batch),
            cgpa: self.data_cleaner.parse_number(row.cgpa.as_deref()),
            placement_offers: Vec::new(),
        }
    }

    /// 行内填写了公司名称时构造 Offer
    fn build_offer(&self, row: &StudentRow) -> Option<PlacementOffer> {
        let company_name = self
            .data_cleaner
            .normalize_null(row.company_name.as_deref())?;

        Some(PlacementOffer {
            id: Uuid::new_v4().to_string(),
            company_name,
            role: self
                .data_cleaner
                .normalize_null(row.role.as_deref())
                .unwrap_or_else(|| DEFAULT_ROLE.to_string()),
            package_lpa: self.data_cleaner.parse_package(row.package_lpa.as_deref()),
            offer_type: self.data_cleaner.parse_offer_type(row.offer_type.as_deref()),
            offer_date: self
                .data_cleaner
                .parse_offer_date(row.offer_date.as_deref(), self.today),
            status: self.data_cleaner.parse_offer_status(row.status.as_deref()),
        })
    }
}

/// 以当天日期为默认 Offer 日期执行校验与转换
pub fn validate_and_transform(
    rows: &[RawRow],
    existing_register_numbers: &HashSet<String>,
) -> ValidationResult {
    StudentValidator::for_today().validate_and_transform(rows, existing_register_numbers)
}
