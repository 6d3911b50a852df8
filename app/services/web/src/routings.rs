use crate::handlers::{customer::*, ping::*};
use app_state::AppState;
use axum::{
    Router,
    routing::{get, put},
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/ping", get(ping).post(ping))
        .route("/clientes", get(get_customers).post(post_customer))
        .route("/clientes/{id}", put(put_customer).delete(delete_customer))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
