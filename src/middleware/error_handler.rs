use actix_web::{error::JsonPayloadError, error::QueryPayloadError, web, HttpRequest};

use crate::core::AppError;

/// Turn malformed or incomplete JSON bodies into validation errors
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        JsonPayloadError::ContentType => "Content-Type must be application/json".to_string(),
        JsonPayloadError::Deserialize(e) => e.to_string(),
        other => other.to_string(),
    };

    tracing::debug!(path = %req.path(), "Rejected request body: {}", message);

    AppError::validation(message).into()
}

/// Turn unparseable query strings into validation errors
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(path = %req.path(), "Rejected query string: {}", err);

    AppError::validation(err.to_string()).into()
}

/// Extractor configs that route payload errors through `AppError`
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(query_error_handler)
}
