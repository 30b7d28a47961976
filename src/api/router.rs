//! Portal router.
//!
//! Routes are nested under `/api/`; everything else falls through to the
//! static kiosk page. CORS is wide open so the page can be served from
//! anywhere during kiosk setup.
//!
//! NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::api::endpoints;
use crate::api::types::ApiContext;
use crate::config;

/// Build the portal router: the five check-in routes plus health, with the
/// shared store handle as axum state.
pub fn portal_router(ctx: ApiContext) -> Router {
    let api = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/checkin", post(endpoints::checkin::lookup))
        .route("/confirm-checkin", post(endpoints::checkin::confirm))
        .route(
            "/appointments/:id",
            get(endpoints::appointments::list_for_patient)
                .put(endpoints::appointments::reschedule),
        )
        .route("/waiting-room", get(endpoints::waiting_room::list))
        .with_state(ctx);

    Router::new()
        .nest("/api", api)
        .fallback_service(ServeDir::new(config::static_dir()))
        .layer(CorsLayer::permissive())
}
