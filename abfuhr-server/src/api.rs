//! HTTP routes.

use std::sync::Arc;

use abfuhr_core::model::Schedule;
use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;

#[derive(Deserialize)]
struct MunicipalityQuery {
    name: Option<String>,
}

/// Schedule for one municipality, e.g. `/api/gemeinde?name=Bisamberg`.
async fn get_municipality(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MunicipalityQuery>,
) -> ApiResult<Json<Schedule>> {
    let name = query
        .name
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Missing 'name' parameter".to_owned()))?;

    let schedule = state.service.schedule_for(&name).await?;
    Ok(Json(schedule))
}

/// Sorted names of all supported municipalities.
async fn list_municipalities(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.service.municipalities())
}

/// Build the application router.
pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/gemeinde", get(get_municipality))
        .route("/api/gemeinden", get(list_municipalities))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
