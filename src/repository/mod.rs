// ==========================================
// 校园招聘就业管理系统 - 数据仓储层
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================

pub mod error;
pub mod student_repo;

pub use error::{RepositoryError, RepositoryResult};
pub use student_repo::{SqliteStudentRepository, StudentRepository};
