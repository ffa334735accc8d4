use axum::{
    routing::{get, post},
    Router,
};

mod grocery;
mod health;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub grocery: weekbasket_grocery::GroceryService,
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/grocery/compute", post(grocery::compute))
        .route(
            "/grocery/lists/{id}",
            get(grocery::detail).patch(grocery::update),
        )
        .with_state(app_state)
}
