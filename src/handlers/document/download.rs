use crate::{
    error::{self, Result},
    StateTrait,
};
use axum::{
    extract::{Path, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use entity::documents;
use sea_orm::EntityTrait;
use std::io::ErrorKind;
use tokio::fs;
use uuid::Uuid;

pub async fn download_document<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<Response> {
    let Ok(id) = Uuid::parse_str(&id) else {
        return Err(error::DOCUMENT_NOT_FOUND);
    };

    let Some(document) = documents::Entity::find_by_id(id).one(state.db()).await? else {
        return Err(error::DOCUMENT_NOT_FOUND);
    };

    let content = match fs::read(state.document_path(id)).await {
        Ok(content) => content,
        Err(error) if error.kind() == ErrorKind::NotFound => {
            error!("document {id} has no file on disk");
            return Err(error::FILE_NOT_FOUND);
        }
        Err(error) => return Err(error.into()),
    };

    let mut response = Bytes::from(content).into_response();

    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(mime::APPLICATION_PDF.as_ref()),
    );
    response.headers_mut().insert(
        header::CONTENT_DISPOSITION,
        content_disposition(&document.filename),
    );

    Ok(response)
}

/// The stored filename is client-supplied, so anything that cannot appear
/// inside a quoted header value is dropped.
fn content_disposition(filename: &str) -> HeaderValue {
    let safe: String = filename
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_' | ' '))
        .collect();

    HeaderValue::from_str(&format!("attachment; filename=\"{safe}\""))
        .unwrap_or_else(|_| HeaderValue::from_static("attachment"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_is_sanitized() {
        let value = content_disposition("weird\"\r\nname.pdf");
        assert_eq!(value, "attachment; filename=\"weirdname.pdf\"");
    }
}
