//! Demo callback routes — upload status and canned answers.

use axum::extract::Multipart;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::demo::{self as demo_svc, UploadedFile};

/// Multipart field carrying the uploaded document.
pub const FILE_FIELD: &str = "file";

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("malformed upload: {0}")]
    Multipart(#[from] MultipartError),
}

pub(crate) fn demo_error_to_status(err: &DemoError) -> StatusCode {
    match err {
        DemoError::Multipart(e) => e.status(),
    }
}

impl IntoResponse for DemoError {
    fn into_response(self) -> Response {
        let status = demo_error_to_status(&self);
        warn!(error = %self, %status, "demo request rejected");
        (status, self.to_string()).into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DemoOutput {
    pub output: String,
}

/// `POST /api/process` — echo the uploaded file's name. The content is not read.
pub async fn process_document(mut multipart: Multipart) -> Result<Json<DemoOutput>, DemoError> {
    let mut upload = None;

    while let Some(field) = multipart.next_field().await? {
        if upload.is_some() || field.name() != Some(FILE_FIELD) {
            continue;
        }
        upload = uploaded_file(field.name(), field.file_name());
    }

    let output = demo_svc::handle_upload(upload.as_ref());
    debug!(accepted = upload.is_some(), file = ?upload.as_ref().map(UploadedFile::display_name), "process document");

    Ok(Json(DemoOutput { output }))
}

/// `POST /api/ask` — canned answer echoing the question.
pub async fn ask_question(Json(req): Json<AskRequest>) -> Json<DemoOutput> {
    let output = demo_svc::handle_question(&req.question);
    debug!(accepted = !req.question.trim().is_empty(), question = %req.question, "ask question");

    Json(DemoOutput { output })
}

/// Map a multipart `file` field to an upload.
///
/// Browsers send an empty filename when no file was chosen; that counts as
/// absent. A field without any filename falls back to its field name.
pub(crate) fn uploaded_file(field_name: Option<&str>, file_name: Option<&str>) -> Option<UploadedFile> {
    let reference = field_name.unwrap_or(FILE_FIELD);
    match file_name {
        Some("") => None,
        Some(name) => Some(UploadedFile::new(Some(name.to_string()), reference)),
        None => Some(UploadedFile::new(None, reference)),
    }
}

#[cfg(test)]
#[path = "demo_test.rs"]
mod tests;
