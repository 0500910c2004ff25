// ==========================================
// 校园招聘就业管理系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体与类型
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod dashboard;
pub mod student;
pub mod types;

// 重导出核心类型
pub use dashboard::{BranchStat, DashboardStats};
pub use student::{NewOffer, NewStudent, PlacementOffer, Student, StudentPatch};
pub use types::{
    branches_display, is_valid_branch, OfferStatus, OfferType, PlacementStatus, BRANCHES,
};
