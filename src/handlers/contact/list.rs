use crate::{error::Result, extractors::Json, StateTrait};
use axum::extract::State;
use chrono::{DateTime, Utc};
use entity::contacts;
use sea_orm::{EntityTrait, FromQueryResult, QueryOrder};
use serde::Serialize;
use uuid::Uuid;

#[derive(Serialize, FromQueryResult)]
pub struct Response {
    id: Uuid,
    name: String,
    phone: String,
    email: String,
    course_interested: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    created_at: DateTime<Utc>,
}

pub async fn list_contacts<S: StateTrait>(State(state): State<S>) -> Result<Json<Vec<Response>>> {
    let res = contacts::Entity::find()
        .order_by_desc(contacts::Column::CreatedAt)
        .into_model::<Response>()
        .all(state.db())
        .await?;

    Ok(Json(res))
}
