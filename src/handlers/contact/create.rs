use crate::{
    error::Result,
    extractors::{Json, ValidatedJson},
    StateTrait,
};
use axum::{extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use entity::contacts;
use sea_orm::{EntityTrait, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1, max = 255))]
    name: String,
    #[validate(length(min = 1, max = 32))]
    phone: String,
    #[validate(email)]
    email: String,
    #[validate(length(min = 1, max = 255))]
    course_interested: String,
    message: Option<String>,
}

#[derive(Serialize)]
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

pub async fn submit_contact<S: StateTrait>(
    State(state): State<S>,
    ValidatedJson(request): ValidatedJson<Request>,
) -> Result<(StatusCode, Json<Response>)> {
    let id = Uuid::new_v4();
    let created_at = Utc::now();

    let contact = contacts::ActiveModel {
        id: Set(id),
        name: Set(request.name.clone()),
        phone: Set(request.phone.clone()),
        email: Set(request.email.clone()),
        course_interested: Set(request.course_interested.clone()),
        message: Set(request.message.clone()),
        created_at: Set(created_at),
    };

    contacts::Entity::insert(contact).exec(state.db()).await?;

    info!("new inquiry from {:?}", request.name);

    Ok((
        StatusCode::CREATED,
        Json(Response {
            id,
            name: request.name,
            phone: request.phone,
            email: request.email,
            course_interested: request.course_interested,
            message: request.message,
            created_at,
        }),
    ))
}
