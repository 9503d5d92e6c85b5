use axum::Json;
use axum::response::IntoResponse;

#[derive(serde::Serialize)]
struct HealthResponse {
    status: &'static str,
    message: &'static str,
}

pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        message: "Server is running",
    })
}
