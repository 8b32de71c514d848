pub mod profile;

use crate::state::AppState;
use axum::Router;

pub fn configure(state: AppState) -> Router {
    Router::new().merge(profile::routes(state))
}
