use crate::{error::Result, extractors::Json, StateTrait};
use axum::extract::State;
use chrono::{DateTime, Utc};
use entity::schedules::{self, Day};
use sea_orm::{EntityTrait, FromQueryResult, QueryOrder};
use serde::Serialize;
use uuid::Uuid;

#[derive(Serialize, FromQueryResult)]
pub struct Response {
    id: Uuid,
    exam_type: String,
    subject: String,
    day_of_week: Day,
    time: String,
    is_online: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    meeting_link: Option<String>,
    created_at: DateTime<Utc>,
}

/// Ordered Monday first, then by creation time, so the weekly view can be
/// rendered without client-side sorting.
pub async fn list_schedules<S: StateTrait>(State(state): State<S>) -> Result<Json<Vec<Response>>> {
    let res = schedules::Entity::find()
        .order_by_asc(schedules::Column::DayOfWeek)
        .order_by_asc(schedules::Column::CreatedAt)
        .into_model::<Response>()
        .all(state.db())
        .await?;

    Ok(Json(res))
}
