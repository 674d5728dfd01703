use crate::{error::Result, extractors::Json, StateTrait};
use axum::extract::{Path, State};
use chrono::{DateTime, Utc};
use entity::documents;
use sea_orm::{EntityTrait, FromQueryResult, QueryOrder};
use serde::Serialize;
use uuid::Uuid;

#[derive(Serialize, FromQueryResult)]
pub struct Response {
    id: Uuid,
    title: String,
    exam_type: String,
    subject: String,
    batch: String,
    filename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    uploaded_at: DateTime<Utc>,
}

pub async fn list_documents<S: StateTrait>(State(state): State<S>) -> Result<Json<Vec<Response>>> {
    let res = documents::Entity::find()
        .order_by_desc(documents::Column::UploadedAt)
        .into_model::<Response>()
        .all(state.db())
        .await?;

    Ok(Json(res))
}

pub async fn list_documents_by_exam<S: StateTrait>(
    State(state): State<S>,
    Path(exam_type): Path<String>,
) -> Result<Json<Vec<Response>>> {
    let res = documents::Entity::find_by_exam_type(&exam_type)
        .order_by_desc(documents::Column::UploadedAt)
        .into_model::<Response>()
        .all(state.db())
        .await?;

    Ok(Json(res))
}
