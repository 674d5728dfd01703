use crate::{
    error::{self, Result},
    StateTrait,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use entity::documents;
use sea_orm::EntityTrait;
use std::io::ErrorKind;
use tokio::fs;
use uuid::Uuid;

pub async fn delete_document<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Err(error::DOCUMENT_NOT_FOUND);
    };

    let res = documents::Entity::delete_by_id(id).exec(state.db()).await?;

    if res.rows_affected == 0 {
        return Err(error::DOCUMENT_NOT_FOUND);
    }

    match fs::remove_file(state.document_path(id)).await {
        Ok(()) => {}
        Err(error) if error.kind() == ErrorKind::NotFound => {
            warn!("document {id} had no file on disk");
        }
        Err(error) => return Err(error.into()),
    }

    Ok(StatusCode::OK)
}
