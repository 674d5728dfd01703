use crate::{
    error::{self, Result},
    extractors::Json,
    StateTrait,
};
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use entity::documents;
use sea_orm::{EntityTrait, Set};
use serde::Serialize;
use tokio::fs;
use uuid::Uuid;

#[derive(Serialize)]
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

/// Multipart upload: one `file` part plus the text fields `title`,
/// `exam_type`, `subject`, `batch` and optionally `description`.
pub async fn upload_document<S: StateTrait>(
    State(state): State<S>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Response>)> {
    let mut title = None;
    let mut exam_type = None;
    let mut subject = None;
    let mut batch = None;
    let mut description = None;
    let mut file: Option<(String, Bytes)> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(ToOwned::to_owned);

        match name.as_deref() {
            Some("title") => title = Some(field.text().await?),
            Some("exam_type") => exam_type = Some(field.text().await?),
            Some("subject") => subject = Some(field.text().await?),
            Some("batch") => batch = Some(field.text().await?),
            Some("description") => description = Some(field.text().await?),
            Some("file") => {
                let filename = field
                    .file_name()
                    .map(ToOwned::to_owned)
                    .ok_or(error::FORM_MISSING_FIELDS)?;

                file = Some((filename, field.bytes().await?));
            }
            _ => {}
        }
    }

    let (Some(title), Some(exam_type), Some(subject), Some(batch), Some((filename, content))) =
        (title, exam_type, subject, batch, file)
    else {
        return Err(error::FORM_MISSING_FIELDS);
    };

    if !filename.to_ascii_lowercase().ends_with(".pdf") {
        return Err(error::NOT_A_PDF);
    }

    let id = Uuid::new_v4();
    let uploaded_at = Utc::now();
    let path = state.document_path(id);

    fs::write(&path, &content).await?;

    let document = documents::ActiveModel {
        id: Set(id),
        title: Set(title.clone()),
        exam_type: Set(exam_type.clone()),
        subject: Set(subject.clone()),
        batch: Set(batch.clone()),
        filename: Set(filename.clone()),
        description: Set(description.clone()),
        uploaded_at: Set(uploaded_at),
    };

    if let Err(error) = documents::Entity::insert(document).exec(state.db()).await {
        if let Err(error) = fs::remove_file(&path).await {
            warn!("failed to remove orphaned upload {}: {}", path.display(), error);
        }

        return Err(error.into());
    }

    info!("stored document {id}");

    Ok((
        StatusCode::CREATED,
        Json(Response {
            id,
            title,
            exam_type,
            subject,
            batch,
            filename,
            description,
            uploaded_at,
        }),
    ))
}
