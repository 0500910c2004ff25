// ==========================================
// 校园招聘就业管理系统 - 引擎层
// ==========================================
// 职责: 纯业务规则（统计、筛选），不访问存储
// ==========================================

pub mod aggregator;
pub mod student_filter;

pub use aggregator::DashboardAggregator;
pub use student_filter::{StudentFilter, ALL_BRANCHES};
