use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::app::http::common::{HttpResult, IntoHttp};
use crate::app::state::AppState;
use crate::domain::dashboard::DashboardStats;

/// GET /api/dashboard/stats
pub async fn dashboard_stats(State(state): State<AppState>) -> HttpResult<Json<DashboardStats>> {
    state
        .dashboard_api
        .get_dashboard_stats()
        .await
        .into_http()
        .map(Json)
}

/// GET /healthz
pub async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok", "version": crate::VERSION }))
}
