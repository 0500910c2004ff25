use crate::api::error::ApiError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

// ==========================================
// 公共工具：错误映射
// ==========================================

/// 错误响应（返回给前端）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// 错误代码
    pub code: String,

    /// 错误消息
    pub message: String,

    /// 详细信息（可选）
    pub details: Option<serde_json::Value>,
}

/// ApiError → HTTP 状态码
pub fn status_for(err: &ApiError) -> StatusCode {
    match err {
        ApiError::InvalidInput(_) | ApiError::ImportError(_) => StatusCode::BAD_REQUEST,
        ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        ApiError::DuplicateRegisterNumber(_) => StatusCode::CONFLICT,
        ApiError::ValidationError { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        ApiError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// 将ApiError转换为 HTTP 响应（JSON: code / message / details）
pub fn map_api_error(err: ApiError) -> Response {
    let status = status_for(&err);
    let code = err.code().to_string();

    let (message, details) = match err {
        ApiError::ValidationError { message, errors } => {
            (message, Some(serde_json::json!({ "errors": errors })))
        }
        ApiError::InvalidInput(msg)
        | ApiError::NotFound(msg)
        | ApiError::DuplicateRegisterNumber(msg)
        | ApiError::ImportError(msg)
        | ApiError::DatabaseError(msg) => (msg, None),
    };

    (
        status,
        Json(ErrorResponse {
            code,
            message,
            details,
        }),
    )
        .into_response()
}

/// Handler 统一返回类型
pub type HttpResult<T> = Result<T, Response>;

/// 在 handler 中以 `?` 传播 ApiError
pub trait IntoHttp<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttp<T> for Result<T, ApiError> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(map_api_error)
    }
}
