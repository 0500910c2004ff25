use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::api::{ApiError, ImportApiResponse, ImportPreview, TEMPLATE_FILE_NAME};
use crate::app::http::common::{HttpResult, IntoHttp};
use crate::app::state::AppState;

// ==========================================
// 批量导入接口（请求体为原始文件字节）
// ==========================================

#[derive(Debug, Deserialize)]
pub struct ImportQuery {
    /// 上传文件名（按扩展名识别格式）
    pub file_name: Option<String>,
}

impl ImportQuery {
    fn file_name(&self) -> HttpResult<&str> {
        self.file_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| ApiError::InvalidInput("file_name is required".to_string()))
            .into_http()
    }
}

/// POST /api/import/preview?file_name=
pub async fn preview_import(
    State(state): State<AppState>,
    Query(query): Query<ImportQuery>,
    body: Bytes,
) -> HttpResult<Json<ImportPreview>> {
    let file_name = query.file_name()?;
    state
        .import_api
        .preview_import(file_name, &body)
        .await
        .into_http()
        .map(Json)
}

/// POST /api/import?file_name=
pub async fn import_students(
    State(state): State<AppState>,
    Query(query): Query<ImportQuery>,
    body: Bytes,
) -> HttpResult<(StatusCode, Json<ImportApiResponse>)> {
    let file_name = query.file_name()?;
    let response = state
        .import_api
        .import_students(file_name, &body)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/import/template
pub async fn download_template(State(state): State<AppState>) -> HttpResult<impl IntoResponse> {
    let bytes = state.import_api.template_csv().into_http()?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", TEMPLATE_FILE_NAME),
            ),
        ],
        bytes,
    ))
}
