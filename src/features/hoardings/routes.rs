use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::hoardings::handlers;
use crate::features::hoardings::services::HoardingService;

/// Create routes for the hoardings feature
pub fn routes(service: Arc<HoardingService>) -> Router {
    Router::new()
        .route("/hoardings", post(handlers::create_hoarding))
        .route("/hoardings", get(handlers::list_hoardings))
        .route(
            "/hoardings/{id}",
            get(handlers::get_hoarding)
                .put(handlers::update_hoarding)
                .delete(handlers::delete_hoarding),
        )
        .with_state(service)
}
