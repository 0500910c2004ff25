// ==========================================
// 校园招聘就业管理系统 - HTTP 接口
// ==========================================
// 职责: axum 路由，连接前端与 API 层
// 错误统一返回 {code, message, details}
// ==========================================

mod common;
mod dashboard;
mod import;
mod student;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::app::state::AppState;

pub use common::{map_api_error, status_for, ErrorResponse};

/// 上传文件大小上限
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(dashboard::healthz))
        .route("/api/branches", get(student::list_branches))
        .route(
            "/api/students",
            get(student::list_students).post(student::create_student),
        )
        .route(
            "/api/students/:id",
            get(student::get_student)
                .put(student::update_student)
                .delete(student::delete_student),
        )
        .route(
            "/api/students/:id/offers",
            post(student::add_placement_offer),
        )
        .route("/api/import/preview", post(import::preview_import))
        .route("/api/import", post(import::import_students))
        .route("/api/import/template", get(import::download_template))
        .route("/api/dashboard/stats", get(dashboard::dashboard_stats))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
