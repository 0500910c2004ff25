// ==========================================
// 校园招聘就业管理系统 - 学生档案实体
// ==========================================
// 职责: 学生档案 / 就业 Offer 实体定义
// 约束: Offer 只属于所属学生，不存在独立生命周期
// 约束: register_number 全局唯一（业务主键）
// ==========================================

use crate::domain::types::{OfferStatus, OfferType, PlacementStatus};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// PlacementOffer - 就业 Offer
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementOffer {
    /// 客户端可留空，由系统分配
    #[serde(default)]
    pub id: String,
    pub company_name: String,
    pub role: String,
    /// 年薪（LPA，非负）
    #[serde(rename = "packageLPA")]
    pub package_lpa: f64,
    pub offer_type: OfferType,
    pub offer_date: NaiveDate,
    pub status: OfferStatus,
}

impl PlacementOffer {
    pub fn is_accepted(&self) -> bool {
        self.status == OfferStatus::Accepted
    }
}

/// 新增 Offer 的输入（id 由系统分配）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOffer {
    pub company_name: String,
    pub role: String,
    #[serde(rename = "packageLPA")]
    pub package_lpa: f64,
    #[serde(default)]
    pub offer_type: OfferType,
    pub offer_date: NaiveDate,
    #[serde(default)]
    pub status: OfferStatus,
}

impl NewOffer {
    /// 分配 id，转换为 PlacementOffer
    pub fn into_offer(self, id: String) -> PlacementOffer {
        PlacementOffer {
            id,
            company_name: self.company_name,
            role: self.role,
            package_lpa: self.package_lpa,
            offer_type: self.offer_type,
            offer_date: self.offer_date,
            status: self.status,
        }
    }
}

// ==========================================
// NewStudent - 待落库学生档案
// ==========================================
// 不含 id / created_at / updated_at（由存储层分配）
// 用途: 单条录入表单 + 批量导入转换结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
    pub register_number: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub branch: String,
    #[serde(default)]
    pub batch: String,
    #[serde(default)]
    pub cgpa: f64,
    #[serde(default)]
    pub placement_offers: Vec<PlacementOffer>,
}

impl NewStudent {
    /// 附加存储层分配的 id 与时间戳
    pub fn into_student(self, id: String, now: DateTime<Utc>) -> Student {
        Student {
            id,
            register_number: self.register_number,
            name: self.name,
            email: self.email,
            phone: self.phone,
            branch: self.branch,
            batch: self.batch,
            cgpa: self.cgpa,
            placement_offers: self.placement_offers,
            created_at: now,
            updated_at: now,
        }
    }

    /// 去除各文本字段首尾空白
    pub fn trimmed(self) -> Self {
        Self {
            register_number: self.register_number.trim().to_string(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            branch: self.branch.trim().to_string(),
            batch: self.batch.trim().to_string(),
            ..self
        }
    }
}

// ==========================================
// Student - 学生档案（完整文档）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub register_number: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub branch: String,
    pub batch: String,
    pub cgpa: f64,
    pub placement_offers: Vec<PlacementOffer>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Student {
    /// 已接受的 Offer
    pub fn accepted_offers(&self) -> impl Iterator<Item = &PlacementOffer> {
        self.placement_offers.iter().filter(|o| o.is_accepted())
    }

    /// 是否已就业（至少一个 accepted offer）
    pub fn is_placed(&self) -> bool {
        self.placement_offers.iter().any(PlacementOffer::is_accepted)
    }

    /// 已接受 Offer 中的最高年薪；无 accepted offer 时为 None
    pub fn highest_accepted_package(&self) -> Option<f64> {
        self.accepted_offers()
            .map(|o| o.package_lpa)
            .fold(None, |max, p| match max {
                Some(m) if m >= p => Some(m),
                _ => Some(p),
            })
    }

    pub fn placement_status(&self) -> PlacementStatus {
        if self.is_placed() {
            PlacementStatus::Placed
        } else if !self.placement_offers.is_empty() {
            PlacementStatus::Pending
        } else {
            PlacementStatus::NotPlaced
        }
    }

    /// 应用部分更新；placement_offers 为整体替换
    pub fn apply_patch(&mut self, patch: StudentPatch, now: DateTime<Utc>) {
        if let Some(v) = patch.register_number {
            self.register_number = v.trim().to_string();
        }
        if let Some(v) = patch.name {
            self.name = v.trim().to_string();
        }
        if let Some(v) = patch.email {
            self.email = v.trim().to_string();
        }
        if let Some(v) = patch.phone {
            self.phone = v.trim().to_string();
        }
        if let Some(v) = patch.branch {
            self.branch = v.trim().to_string();
        }
        if let Some(v) = patch.batch {
            self.batch = v.trim().to_string();
        }
        if let Some(v) = patch.cgpa {
            self.cgpa = v;
        }
        if let Some(offers) = patch.placement_offers {
            self.placement_offers = offers;
        }
        self.updated_at = now;
    }
}

// ==========================================
// StudentPatch - 部分更新
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPatch {
    pub register_number: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub branch: Option<String>,
    pub batch: Option<String>,
    pub cgpa: Option<f64>,
    pub placement_offers: Option<Vec<PlacementOffer>>,
}

impl StudentPatch {
    pub fn is_empty(&self) -> bool {
        self == &StudentPatch::default()
    }
}
