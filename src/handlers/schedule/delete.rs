use crate::{
    error::{self, Result},
    StateTrait,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use entity::schedules;
use sea_orm::EntityTrait;
use uuid::Uuid;

pub async fn delete_schedule<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Err(error::SCHEDULE_NOT_FOUND);
    };

    let res = schedules::Entity::delete_by_id(id).exec(state.db()).await?;

    if res.rows_affected == 0 {
        return Err(error::SCHEDULE_NOT_FOUND);
    }

    Ok(StatusCode::OK)
}
