// ==========================================
// 校园招聘就业管理系统 - 学生档案 API
// ==========================================
// 职责: 学生档案增删改查、Offer 追加、列表筛选
// 约束: 学号全局唯一（新增/修改前查重，修改时排除自身）
// ==========================================

use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::api::error::{ApiError, ApiResult};
use crate::api::form_validator::{validate_new_offer, validate_student_input};
use crate::domain::student::{NewOffer, NewStudent, PlacementOffer, Student, StudentPatch};
use crate::engine::student_filter::StudentFilter;
use crate::i18n::{t, t_with_args};
use crate::repository::{RepositoryError, StudentRepository};

// ==========================================
// StudentApi - 学生档案 API
// ==========================================
pub struct StudentApi {
    repo: Arc<dyn StudentRepository>,
}

impl StudentApi {
    /// 创建新的StudentApi实例
    ///
    /// # 参数
    /// - repo: 学生档案仓储
    pub fn new(repo: Arc<dyn StudentRepository>) -> Self {
        Self { repo }
    }

    // ==========================================
    // 查询接口
    // ==========================================

    /// 查询学生列表（按创建时间倒序）
    ///
    /// # 参数
    /// - filter: 关键字 + 专业筛选
    pub async fn list_students(&self, filter: &StudentFilter) -> ApiResult<Vec<Student>> {
        let students = self
            .repo
            .list_all()
            .await
            .map_err(|e| ApiError::from_collaborator("student.load_failed", e))?;
        let filtered = filter.apply(students);
        debug!(count = filtered.len(), "学生列表查询完成");
        Ok(filtered)
    }

    /// 按 id 查询
    ///
    /// # 返回
    /// - Err(ApiError::NotFound): 档案不存在
    pub async fn get_student(&self, id: &str) -> ApiResult<Student> {
        self.repo
            .get(id)
            .await
            .map_err(|e| ApiError::from_collaborator("student.load_failed", e))?
            .ok_or_else(|| ApiError::NotFound(t_with_args("student.not_found", &[("id", id)])))
    }

    /// 按专业查询
    pub async fn list_by_branch(&self, branch: &str) -> ApiResult<Vec<Student>> {
        if branch.trim().is_empty() {
            return Err(ApiError::InvalidInput("Branch is required".to_string()));
        }
        self.repo
            .list_by_branch(branch.trim())
            .await
            .map_err(|e| ApiError::from_collaborator("student.load_failed", e))
    }

    // ==========================================
    // 写入接口
    // ==========================================

    /// 新增学生档案
    ///
    /// # 返回
    /// - Err(ApiError::ValidationError): 字段校验未通过
    /// - Err(ApiError::DuplicateRegisterNumber): 学号已存在
    pub async fn create_student(&self, input: NewStudent) -> ApiResult<Student> {
        let mut input = input.trimmed();
        ensure_valid(validate_student_input(&input))?;

        self.ensure_register_number_free(&input.register_number, None)
            .await?;

        assign_offer_ids(&mut input.placement_offers);
        let register_number = input.register_number.clone();
        let student = self
            .repo
            .insert(input)
            .await
            .map_err(|e| duplicate_or_generic(e, &register_number, "student.create_failed"))?;

        info!(id = %student.id, register_number = %student.register_number, "学生档案已新增");
        Ok(student)
    }

    /// 修改学生档案（部分更新；placement_offers 整体替换）
    pub async fn update_student(&self, id: &str, patch: StudentPatch) -> ApiResult<Student> {
        let current = self.get_student(id).await?;

        // 以合并后的档案做完整校验
        let mut candidate = current.clone();
        candidate.apply_patch(patch.clone(), current.updated_at);
        ensure_valid(validate_student_input(&as_input(&candidate)))?;

        if candidate.register_number != current.register_number {
            self.ensure_register_number_free(&candidate.register_number, Some(id))
                .await?;
        }

        let mut patch = patch;
        if let Some(offers) = patch.placement_offers.as_mut() {
            assign_offer_ids(offers);
        }

        let student = self
            .repo
            .update(id, patch)
            .await
            .map_err(|e| {
                duplicate_or_generic(e, &candidate.register_number, "student.update_failed")
            })?;

        info!(id = %student.id, "学生档案已更新");
        Ok(student)
    }

    /// 删除学生档案（连同全部 Offer）
    pub async fn delete_student(&self, id: &str) -> ApiResult<()> {
        self.repo
            .delete(id)
            .await
            .map_err(|e| ApiError::from_collaborator("student.delete_failed", e))?;
        info!(id, "学生档案已删除");
        Ok(())
    }

    /// 为学生追加一个 Offer（读取 → 追加 → 整体写回）
    pub async fn add_placement_offer(&self, id: &str, offer: NewOffer) -> ApiResult<Student> {
        ensure_valid(validate_new_offer(&offer))?;

        let current = self.get_student(id).await?;
        let mut offers = current.placement_offers;
        let offer = NewOffer {
            company_name: offer.company_name.trim().to_string(),
            role: offer.role.trim().to_string(),
            ..offer
        };
        offers.push(offer.into_offer(Uuid::new_v4().to_string()));

        let patch = StudentPatch {
            placement_offers: Some(offers),
            ..Default::default()
        };
        let student = self
            .repo
            .update(id, patch)
            .await
            .map_err(|e| ApiError::from_collaborator("student.update_failed", e))?;

        info!(id, offers = student.placement_offers.len(), "Offer 已追加");
        Ok(student)
    }

    // ==========================================
    // 内部辅助
    // ==========================================

    /// 学号查重
    ///
    /// # 参数
    /// - exclude_id: 修改场景下排除自身
    async fn ensure_register_number_free(
        &self,
        register_number: &str,
        exclude_id: Option<&str>,
    ) -> ApiResult<()> {
        let existing = self
            .repo
            .find_by_register_number(register_number)
            .await
            .map_err(|e| ApiError::from_collaborator("student.load_failed", e))?;

        match existing {
            Some(other) if Some(other.id.as_str()) != exclude_id => {
                warn!(register_number, "学号重复");
                Err(duplicate_error(register_number))
            }
            _ => Ok(()),
        }
    }
}

/// 写入时的唯一约束冲突（并发写入）同样视为学号重复
fn duplicate_or_generic(err: RepositoryError, register_number: &str, message_key: &str) -> ApiError {
    match err {
        RepositoryError::UniqueConstraintViolation(msg) => {
            warn!(register_number, detail = %msg, "写入时唯一约束冲突");
            duplicate_error(register_number)
        }
        other => ApiError::from_collaborator(message_key, other),
    }
}

fn duplicate_error(register_number: &str) -> ApiError {
    ApiError::DuplicateRegisterNumber(t_with_args(
        "student.duplicate_register_number",
        &[("register_number", register_number)],
    ))
}

fn ensure_valid(violations: Vec<String>) -> ApiResult<()> {
    if violations.is_empty() {
        return Ok(());
    }
    warn!(violations = violations.len(), "表单校验未通过");
    Err(ApiError::ValidationError {
        message: t("student.invalid_input"),
        errors: violations,
    })
}

/// 客户端未提供 id 的 Offer 由系统分配
fn assign_offer_ids(offers: &mut [PlacementOffer]) {
    for offer in offers.iter_mut().filter(|o| o.id.trim().is_empty()) {
        offer.id = Uuid::new_v4().to_string();
    }
}

fn as_input(student: &Student) -> NewStudent {
    NewStudent {
        register_number: student.register_number.clone(),
        name: student.name.clone(),
        email: student.email.clone(),
        phone: student.phone.clone(),
        branch: student.branch.clone(),
        batch: student.batch.clone(),
        cgpa: student.cgpa,
        placement_offers: student.placement_offers.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_offer_ids_only_fills_blanks() {
        let mut offers = vec![
            PlacementOffer {
                id: "keep".to_string(),
                company_name: "A".to_string(),
                role: "SDE".to_string(),
                package_lpa: 1.0,
                offer_type: Default::default(),
                offer_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                status: Default::default(),
            },
            PlacementOffer {
                id: String::new(),
                company_name: "B".to_string(),
                role: "SDE".to_string(),
                package_lpa: 1.0,
                offer_type: Default::default(),
                offer_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                status: Default::default(),
            },
        ];
        assign_offer_ids(&mut offers);
        assert_eq!(offers[0].id, "keep");
        assert!(!offers[1].id.is_empty());
        assert_ne!(offers[0].id, offers[1].id);
    }
}
