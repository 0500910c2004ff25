// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试所需的数据库初始化、测试数据生成等功能
// ==========================================
#![allow(dead_code)]

use chrono::NaiveDate;
use placement_tracker::app::AppState;
use placement_tracker::db::{ensure_schema, open_sqlite_connection};
use placement_tracker::domain::types::{OfferStatus, OfferType};
use placement_tracker::domain::{NewStudent, PlacementOffer};
use placement_tracker::importer::TEMPLATE_HEADERS;
use std::error::Error;
use tempfile::NamedTempFile;

/// 创建临时测试数据库并初始化 schema
///
/// # 返回
/// - NamedTempFile: 临时数据库文件（需要保持存活）
/// - String: 数据库文件路径
pub fn create_test_db() -> Result<(NamedTempFile, String), Box<dyn Error>> {
    let temp_file = NamedTempFile::new()?;
    let db_path = temp_file.path().to_str().ok_or("非 UTF-8 路径")?.to_string();

    let conn = open_sqlite_connection(&db_path)?;
    ensure_schema(&conn)?;

    Ok((temp_file, db_path))
}

/// 创建临时数据库上的 AppState
pub fn create_test_state() -> Result<(NamedTempFile, AppState), Box<dyn Error>> {
    let (temp_file, db_path) = create_test_db()?;
    let state = AppState::new(db_path)?;
    Ok((temp_file, state))
}

// ==========================================
// NewStudent 构建器
// ==========================================

pub struct StudentBuilder {
    student: NewStudent,
}

impl StudentBuilder {
    pub fn new(register_number: &str) -> Self {
        Self {
            student: NewStudent {
                register_number: register_number.to_string(),
                name: format!("Student {}", register_number),
                email: format!("{}@college.edu", register_number.to_lowercase()),
                phone: "9876543210".to_string(),
                branch: "Computer Science".to_string(),
                batch: "2021-2025".to_string(),
                cgpa: 8.0,
                placement_offers: vec![],
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.student.name = name.to_string();
        self
    }

    pub fn email(mut self, email: &str) -> Self {
        self.student.email = email.to_string();
        self
    }

    pub fn branch(mut self, branch: &str) -> Self {
        self.student.branch = branch.to_string();
        self
    }

    pub fn cgpa(mut self, cgpa: f64) -> Self {
        self.student.cgpa = cgpa;
        self
    }

    pub fn offer(mut self, company: &str, package_lpa: f64, status: OfferStatus) -> Self {
        let idx = self.student.placement_offers.len();
        self.student.placement_offers.push(PlacementOffer {
            id: format!("{}-offer-{}", self.student.register_number, idx),
            company_name: company.to_string(),
            role: "Software Engineer".to_string(),
            package_lpa,
            offer_type: OfferType::Placement,
            offer_date: NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date"),
            status,
        });
        self
    }

    pub fn build(self) -> NewStudent {
        self.student
    }
}

// ==========================================
// 导入文件构建器（CSV）
// ==========================================

/// 以模板表头生成 CSV；每行按 TEMPLATE_HEADERS 顺序给出 13 列
pub fn csv_bytes(rows: &[[&str; 13]]) -> Vec<u8> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(TEMPLATE_HEADERS).expect("write header");
    for row in rows {
        wtr.write_record(row).expect("write row");
    }
    wtr.into_inner().expect("flush csv")
}

/// 一行完整数据（含 Offer）
pub fn row<'a>(
    register_number: &'a str,
    name: &'a str,
    branch: &'a str,
    company: &'a str,
    status: &'a str,
) -> [&'a str; 13] {
    [
        register_number,
        name,
        "student@college.edu",
        "9876543210",
        branch,
        "2021-2025",
        "8.0",
        company,
        "Engineer",
        "10",
        "placement",
        "2024-01-15",
        status,
    ]
}
