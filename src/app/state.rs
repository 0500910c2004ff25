// ==========================================
// 校园招聘就业管理系统 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// ==========================================

use std::sync::Arc;

use crate::api::{DashboardApi, ImportApi, StudentApi};
use crate::repository::{RepositoryResult, SqliteStudentRepository, StudentRepository};

/// 应用状态
///
/// 包含所有API实例，作为 HTTP 路由的共享状态（Clone 仅复制 Arc）
#[derive(Clone)]
pub struct AppState {
    /// 数据库路径
    pub db_path: String,

    /// 学生档案API
    pub student_api: Arc<StudentApi>,

    /// 批量导入API
    pub import_api: Arc<ImportApi>,

    /// 看板API
    pub dashboard_api: Arc<DashboardApi>,
}

impl AppState {
    /// 创建新的AppState实例
    ///
    /// # 参数
    /// - db_path: 数据库文件路径（不存在时自动创建并建表）
    pub fn new(db_path: String) -> RepositoryResult<Self> {
        tracing::info!(db_path = %db_path, "初始化AppState");

        let repo: Arc<dyn StudentRepository> = Arc::new(SqliteStudentRepository::new(&db_path)?);
        Ok(Self::with_repository(db_path, repo))
    }

    /// 基于已有仓储组装（测试或自定义存储）
    pub fn with_repository(db_path: String, repo: Arc<dyn StudentRepository>) -> Self {
        Self {
            db_path,
            student_api: Arc::new(StudentApi::new(repo.clone())),
            import_api: Arc::new(ImportApi::new(repo.clone())),
            dashboard_api: Arc::new(DashboardApi::new(repo)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_new_creates_schema() {
        let temp_file = NamedTempFile::new().unwrap();
        let db_path = temp_file.path().to_str().unwrap().to_string();

        let state = AppState::new(db_path.clone()).unwrap();
        assert_eq!(state.db_path, db_path);

        let stats = state.dashboard_api.get_dashboard_stats().await.unwrap();
        assert_eq!(stats.total_students, 0);
    }
}
