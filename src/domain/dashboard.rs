// ==========================================
// 校园招聘就业管理系统 - 看板统计
// ==========================================
// 派生数据，按需重算，不落库
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 单个专业的就业统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchStat {
    pub total: usize,
    pub placed: usize,
}

impl BranchStat {
    /// 就业率（百分比）；total 为 0 时返回 0
    pub fn placement_percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.placed as f64 / self.total as f64 * 100.0
        }
    }
}

/// 看板统计快照
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_students: usize,
    pub placed_students: usize,
    pub avg_package: f64,
    pub highest_package: f64,
    pub total_companies: usize,
    /// 键为学生档案上的原始专业字符串（可能不在固定枚举内）
    pub branch_wise_stats: BTreeMap<String, BranchStat>,
}
