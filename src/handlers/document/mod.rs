mod create;
mod delete;
mod download;
mod list;

pub use create::upload_document;
pub use delete::delete_document;

use crate::state::StateTrait;
use axum::{routing::get, Router};

/// Public routes for the study-material listing
///
/// GET /pdfs
/// GET /pdfs/exam/:exam_type
/// GET /pdfs/download/:id
///
/// Upload and delete live under /admin and are wired up in the parent
/// module together with the auth layer.
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/", get(list::list_documents::<S>))
        .route("/exam/:exam_type", get(list::list_documents_by_exam::<S>))
        .route("/download/:id", get(download::download_document::<S>))
}
