// ==========================================
// 校园招聘就业管理系统 - API 层
// ==========================================
// 职责: 业务接口（校验 + 编排），供 HTTP 层调用
// ==========================================

pub mod dashboard_api;
pub mod error;
pub mod form_validator;
pub mod import_api;
pub mod student_api;

pub use dashboard_api::DashboardApi;
pub use error::{ApiError, ApiResult};
pub use form_validator::validate_student_input;
pub use import_api::{ImportApi, ImportApiResponse, ImportPreview, TEMPLATE_FILE_NAME};
pub use student_api::StudentApi;
