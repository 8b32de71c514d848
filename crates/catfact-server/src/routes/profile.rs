use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use catfact::profile::{build_profile, ProfileResponse};
use tracing::info;

async fn handler(State(state): State<AppState>) -> Json<ProfileResponse> {
    let response = build_profile(&state.user, state.facts.as_ref()).await;
    info!("Serving profile for {} at {}", response.user.email, response.timestamp);
    Json(response)
}

pub fn routes(state: AppState) -> Router {
    Router::new().route("/me", get(handler)).with_state(state)
}
