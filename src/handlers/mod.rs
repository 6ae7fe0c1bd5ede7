pub mod resource;

use axum::{
    Extension, Router,
    http::StatusCode,
    routing::get,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::{db::DocumentStore, models::Collection};

/// State shared by all resource handlers
#[derive(Clone)]
pub struct AppState {
    pub store: DocumentStore,
}

/// Build the HTTP router: one GET/POST/PUT/DELETE route per collection
pub fn router(state: AppState) -> Router {
    let mut router = Router::new().route(
        "/health",
        get(|| async { (StatusCode::OK, "Supply chain admin service is running.") }),
    );

    for collection in Collection::ALL {
        router = router.route(
            collection.path(),
            get(resource::get_records)
                .post(resource::create_record)
                .put(resource::update_record)
                .delete(resource::delete_record)
                .layer(Extension(collection)),
        );
    }

    router
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
