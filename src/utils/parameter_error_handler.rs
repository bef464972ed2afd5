use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{Error, HttpRequest};

use crate::errors::PortalError;

/// JSON 请求体解析失败
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    let error = match &err {
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            PortalError::payload_too_large("Request body is too large")
        }
        JsonPayloadError::ContentType => {
            PortalError::validation("Content type must be application/json")
        }
        JsonPayloadError::Deserialize(e) => PortalError::validation(format!("Invalid JSON: {e}")),
        other => PortalError::validation(format!("Invalid request body: {other}")),
    };
    tracing::debug!("JSON payload rejected: {}", err);
    error.into()
}

/// 查询参数解析失败
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> Error {
    PortalError::validation(format!("Invalid query parameters: {err}")).into()
}

/// 路径参数解析失败
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> Error {
    PortalError::validation(format!("Invalid path parameters: {err}")).into()
}
