use axum::Router;

/// No routes are defined. Axum's built-in fallback answers every
/// request with `404 Not Found`.
pub fn routes() -> Router {
    Router::new()
}
