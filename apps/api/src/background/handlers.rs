use axum::{extract::Path, Json};

use crate::background::{generate, BackgroundLayout, BackgroundVariant};

/// GET /api/background/:variant
///
/// Every request is a fresh mount: a new random layout. Unknown variant
/// names get the plain `default` layout.
pub async fn handle_background(Path(variant): Path<String>) -> Json<BackgroundLayout> {
    let variant = BackgroundVariant::from_name(&variant);
    Json(generate(variant, &mut rand::thread_rng()))
}
