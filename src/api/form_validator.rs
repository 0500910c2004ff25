// ==========================================
// 校园招聘就业管理系统 - 单条录入表单校验
// ==========================================
// 职责: 新增/编辑学生档案时的字段规则（一次返回全部问题）
// 规则与批量导入一致: 必填项、专业枚举、邮箱格式、CGPA 区间
// ==========================================

use crate::domain::student::{NewOffer, NewStudent};
use crate::domain::types::{branches_display, is_valid_branch};
use crate::importer::student_validator::{is_valid_email, CGPA_MAX, CGPA_MIN};

/// 校验学生档案输入
///
/// # 返回
/// 全部违规描述；为空表示通过
pub fn validate_student_input(student: &NewStudent) -> Vec<String> {
    let mut violations = Vec::new();

    if student.register_number.trim().is_empty() {
        violations.push("Register Number is required".to_string());
    }
    if student.name.trim().is_empty() {
        violations.push("Name is required".to_string());
    }

    let branch = student.branch.trim();
    if branch.is_empty() {
        violations.push("Branch is required".to_string());
    } else if !is_valid_branch(branch) {
        violations.push(format!(
            "Invalid branch \"{}\". Valid branches: {}",
            branch,
            branches_display()
        ));
    }

    let email = student.email.trim();
    if !email.is_empty() && !is_valid_email(email) {
        violations.push("Invalid email format".to_string());
    }

    if !cgpa_in_range(student.cgpa) {
        violations.push("CGPA must be between 0 and 10".to_string());
    }

    for (idx, offer) in student.placement_offers.iter().enumerate() {
        violations.extend(
            validate_offer_fields(&offer.company_name, offer.package_lpa)
                .into_iter()
                .map(|v| format!("Offer {}: {}", idx + 1, v)),
        );
    }

    violations
}

/// 校验单个新增 Offer
pub fn validate_new_offer(offer: &NewOffer) -> Vec<String> {
    validate_offer_fields(&offer.company_name, offer.package_lpa)
}

fn cgpa_in_range(cgpa: f64) -> bool {
    (CGPA_MIN..=CGPA_MAX).contains(&cgpa)
}

fn validate_offer_fields(company_name: &str, package_lpa: f64) -> Vec<String> {
    let mut violations = Vec::new();
    if company_name.trim().is_empty() {
        violations.push("Company Name is required".to_string());
    }
    if !package_lpa.is_finite() || package_lpa < 0.0 {
        violations.push("Package must be a non-negative number".to_string());
    }
    violations
}
