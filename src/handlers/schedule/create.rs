use crate::{
    error::Result,
    extractors::{Json, ValidatedJson},
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use entity::schedules::{self, Day};
use sea_orm::{EntityTrait, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1, max = 64))]
    exam_type: String,
    #[validate(length(min = 1, max = 255))]
    subject: String,
    day_of_week: Day,
    #[validate(length(min = 1, max = 64))]
    time: String,
    is_online: bool,
    #[validate(url)]
    meeting_link: Option<String>,
}

#[derive(Serialize)]
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

pub async fn create_schedule<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<Response>)> {
    let id = Uuid::new_v4();
    let created_at = Utc::now();

    let schedule = schedules::ActiveModel {
        id: Set(id),
        exam_type: Set(request.exam_type.clone()),
        subject: Set(request.subject.clone()),
        day_of_week: Set(request.day_of_week),
        time: Set(request.time.clone()),
        is_online: Set(request.is_online),
        meeting_link: Set(request.meeting_link.clone()),
        created_at: Set(created_at),
    };

    schedules::Entity::insert(schedule).exec(state.db()).await?;

    Ok((
        StatusCode::CREATED,
        Json(Response {
            id,
            exam_type: request.exam_type,
            subject: request.subject,
            day_of_week: request.day_of_week,
            time: request.time,
            is_online: request.is_online,
            meeting_link: request.meeting_link,
            created_at,
        }),
    ))
}
