mod contact;
mod document;
mod schedule;

use crate::{extractors::Json, middlewares::AdminAuthLayer, state::StateTrait};
use axum::{
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    routing::{delete, get, post},
    Router,
};
use sea_orm::ConnectionTrait;
use serde_json::{json, Value};

const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

pub fn routes<S: StateTrait>(state: S) -> Router<S> {
    Router::new()
        .nest(
            "/api",
            Router::new()
                .route("/", get(root))
                .nest("/pdfs", document::routes::<S>())
                .route("/schedule", get(schedule::list_schedules::<S>))
                .route("/contact", post(contact::submit_contact::<S>))
                .nest("/admin", admin_routes::<S>(state)),
        )
        .route("/livez", get(liveness::<S>))
        .route("/readyz", get(|| async {}))
}

fn admin_routes<S: StateTrait>(state: S) -> Router<S> {
    Router::new()
        .route("/pdfs", post(document::upload_document::<S>))
        .route("/pdfs/:id", delete(document::delete_document::<S>))
        .route("/schedule", post(schedule::create_schedule::<S>))
        .route("/schedule/:id", delete(schedule::delete_schedule::<S>))
        .route("/contacts", get(contact::list_contacts::<S>))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(AdminAuthLayer::new(state))
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Government Exam Coaching API" }))
}

async fn liveness<S: StateTrait>(State(state): State<S>) -> StatusCode {
    if state.db().execute_unprepared("select 1").await.is_err() {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }

    StatusCode::OK
}
