use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::app::http::common::{HttpResult, IntoHttp};
use crate::app::state::AppState;
use crate::domain::student::{NewOffer, NewStudent, Student, StudentPatch};
use crate::domain::types::BRANCHES;
use crate::engine::StudentFilter;

// ==========================================
// 学生档案接口
// ==========================================

/// GET /api/students?search=&branch=
pub async fn list_students(
    State(state): State<AppState>,
    Query(filter): Query<StudentFilter>,
) -> HttpResult<Json<Vec<Student>>> {
    state.student_api.list_students(&filter).await.into_http().map(Json)
}

/// POST /api/students
pub async fn create_student(
    State(state): State<AppState>,
    Json(input): Json<NewStudent>,
) -> HttpResult<(StatusCode, Json<Student>)> {
    let student = state.student_api.create_student(input).await.into_http()?;
    Ok((StatusCode::CREATED, Json(student)))
}

/// GET /api/students/:id
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HttpResult<Json<Student>> {
    state.student_api.get_student(&id).await.into_http().map(Json)
}

/// PUT /api/students/:id
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<StudentPatch>,
) -> HttpResult<Json<Student>> {
    state
        .student_api
        .update_student(&id, patch)
        .await
        .into_http()
        .map(Json)
}

/// DELETE /api/students/:id
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    state.student_api.delete_student(&id).await.into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/students/:id/offers
pub async fn add_placement_offer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(offer): Json<NewOffer>,
) -> HttpResult<(StatusCode, Json<Student>)> {
    let student = state
        .student_api
        .add_placement_offer(&id, offer)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(student)))
}

/// GET /api/branches
pub async fn list_branches() -> Json<Vec<&'static str>> {
    Json(BRANCHES.to_vec())
}
