use actix_multipart::MultipartError;
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::io;

/// Why a request could not be turned into a [`formdata::FormData`].
#[derive(Debug, thiserror::Error)]
pub enum IngressError {
    #[error("request is not multipart/form-data")]
    NotMultipart,
    #[error("could not decode multipart body: {0}")]
    Decode(String),
}

impl From<MultipartError> for IngressError {
    fn from(e: MultipartError) -> Self {
        IngressError::Decode(e.to_string())
    }
}

impl From<io::Error> for IngressError {
    fn from(e: io::Error) -> Self {
        IngressError::Decode(format!("could not buffer file part: {e}"))
    }
}

impl ResponseError for IngressError {
    fn status_code(&self) -> StatusCode {
        match self {
            IngressError::NotMultipart => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            IngressError::Decode(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "error": self.to_string() }))
    }
}
