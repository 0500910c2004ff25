// ==========================================
// 校园招聘就业管理系统 - 领域类型定义
// ==========================================
// 专业枚举 / Offer 类型 / Offer 状态 / 就业状态
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 专业 (Branch)
// ==========================================
// 全系统唯一的专业枚举来源：导入校验、表单录入、列表筛选共用
pub const BRANCHES: [&str; 7] = [
    "Computer Science",
    "Information Technology",
    "Electronics & Communication",
    "Electrical Engineering",
    "Mechanical Engineering",
    "Civil Engineering",
    "Chemical Engineering",
];

/// 判断专业名称是否属于固定枚举（精确匹配，区分大小写）
pub fn is_valid_branch(branch: &str) -> bool {
    BRANCHES.contains(&branch)
}

/// 专业列表的展示文本（逗号分隔），用于错误提示
pub fn branches_display() -> String {
    BRANCHES.join(", ")
}

// ==========================================
// Offer 类型 (Offer Type)
// ==========================================
// 序列化格式: lowercase (与文档存储一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferType {
    #[default]
    Placement,  // 正式录用
    Internship, // 实习
}

impl fmt::Display for OfferType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OfferType::Placement => write!(f, "placement"),
            OfferType::Internship => write!(f, "internship"),
        }
    }
}

impl FromStr for OfferType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "placement" => Ok(OfferType::Placement),
            "internship" => Ok(OfferType::Internship),
            other => Err(format!("未知的 Offer 类型: {}", other)),
        }
    }
}

// ==========================================
// Offer 状态 (Offer Status)
// ==========================================
// 只有 Accepted 参与"已就业"判定与薪资统计
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferStatus {
    Accepted, // 已接受
    Rejected, // 已拒绝
    #[default]
    Pending,  // 待定
}

impl fmt::Display for OfferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OfferStatus::Accepted => write!(f, "accepted"),
            OfferStatus::Rejected => write!(f, "rejected"),
            OfferStatus::Pending => write!(f, "pending"),
        }
    }
}

impl FromStr for OfferStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "accepted" => Ok(OfferStatus::Accepted),
            "rejected" => Ok(OfferStatus::Rejected),
            "pending" => Ok(OfferStatus::Pending),
            other => Err(format!("未知的 Offer 状态: {}", other)),
        }
    }
}

// ==========================================
// 就业状态 (Placement Status)
// ==========================================
// 派生值，不落库:
// - 存在 accepted offer → Placed
// - 存在任意 offer → Pending
// - 否则 → NotPlaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlacementStatus {
    Placed,
    Pending,
    NotPlaced,
}

impl fmt::Display for PlacementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementStatus::Placed => write!(f, "placed"),
            PlacementStatus::Pending => write!(f, "pending"),
            PlacementStatus::NotPlaced => write!(f, "not-placed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_membership_is_exact() {
        assert!(is_valid_branch("Computer Science"));
        assert!(!is_valid_branch("computer science"));
        assert!(!is_valid_branch("Underwater Basket Weaving"));
    }

    #[test]
    fn test_offer_status_parse() {
        assert_eq!(" Accepted ".parse::<OfferStatus>(), Ok(OfferStatus::Accepted));
        assert!("hired".parse::<OfferStatus>().is_err());
        assert_eq!(OfferStatus::default(), OfferStatus::Pending);
    }

    #[test]
    fn test_offer_type_serde_lowercase() {
        let json = serde_json::to_string(&OfferType::Internship).unwrap();
        assert_eq!(json, "\"internship\"");
        assert_eq!(OfferType::default(), OfferType::Placement);
    }
}
