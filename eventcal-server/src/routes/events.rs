//! Event endpoints

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use eventcal_core::api::{EventsQuery, EventsResponse, select_events};

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/events", get(list_events))
}

/// GET /api/events?year=YYYY&month=MM - List events, optionally by start year/month
async fn list_events(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<EventsResponse>, AppError> {
    let query = EventsQuery::from_pairs(pairs);
    let events = tokio::task::spawn_blocking(move || state.events()).await?;

    let response = select_events(events, &query);
    tracing::debug!(count = response.count, ?query, "Listed events");

    Ok(Json(response))
}
