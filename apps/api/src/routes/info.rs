use axum::{extract::State, Json};

use crate::models::profile::Profile;
use crate::state::AppState;

/// GET /api/info
pub async fn handle_info(State(state): State<AppState>) -> Json<Profile> {
    Json(state.profile.clone())
}
