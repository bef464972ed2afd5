use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::header};
use std::io::ErrorKind;

use super::FileService;
use crate::errors::PortalError;
use crate::storage::uploads::content_type_for;

pub async fn serve_upload(
    service: &FileService,
    request: &HttpRequest,
    name: String,
) -> ActixResult<HttpResponse> {
    let uploads = service.get_upload_store(request);

    // 只接受单个普通文件名
    let Some(path) = uploads.resolve_name(&name) else {
        return Err(PortalError::not_found("File not found").into());
    };

    let data = match std::fs::read(&path) {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(PortalError::not_found("File not found").into());
        }
        Err(e) => {
            return Err(PortalError::file_operation(format!(
                "读取文件失败 {}: {e}",
                path.display()
            ))
            .into());
        }
    };

    Ok(HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, content_type_for(&name)))
        .insert_header((header::CACHE_CONTROL, "public, max-age=3600"))
        .body(data))
}
