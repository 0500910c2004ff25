// ==========================================
// 校园招聘就业管理系统 - 看板 API
// ==========================================
// 职责: 读取全量学生档案并计算统计快照
// ==========================================

use std::sync::Arc;
use tracing::debug;

use crate::api::error::{ApiError, ApiResult};
use crate::domain::dashboard::DashboardStats;
use crate::engine::aggregator::DashboardAggregator;
use crate::repository::StudentRepository;

pub struct DashboardApi {
    repo: Arc<dyn StudentRepository>,
    aggregator: DashboardAggregator,
}

impl DashboardApi {
    pub fn new(repo: Arc<dyn StudentRepository>) -> Self {
        Self {
            repo,
            aggregator: DashboardAggregator::new(),
        }
    }

    /// 看板统计（每次请求重新计算，不缓存）
    pub async fn get_dashboard_stats(&self) -> ApiResult<DashboardStats> {
        let students = self
            .repo
            .list_all()
            .await
            .map_err(|e| ApiError::from_collaborator("dashboard.load_failed", e))?;

        let stats = self.aggregator.calculate(&students);
        debug!(
            total = stats.total_students,
            placed = stats.placed_students,
            branches = stats.branch_wise_stats.len(),
            "看板统计完成"
        );
        Ok(stats)
    }
}
