//! 作业文件提交：先落盘，再单条更新记录，最后清理旧文件

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use super::AssignmentService;
use crate::errors::{PortalError, Result};
use crate::models::assignments::entities::{Assignment, AssignmentFile};
use crate::models::files::entities::StoredUpload;
use crate::services::files::receive_single_file;
use crate::storage::{Storage, UploadStore};

pub async fn submit_assignment_file(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: i64,
    payload: Multipart,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let uploads = service.get_upload_store(request);

    let upload = receive_single_file(&uploads, payload).await?;
    let assignment = submit_file(storage.as_ref(), &uploads, assignment_id, upload).await?;

    Ok(HttpResponse::Ok().json(assignment))
}

/// 用已落盘的上传替换作业当前文件
///
/// 任何一步失败都会删除本次上传的文件；更新成功后才删除旧文件，
/// 删除旧文件失败只记录警告。
pub async fn submit_file(
    storage: &dyn Storage,
    uploads: &UploadStore,
    assignment_id: i64,
    upload: StoredUpload,
) -> Result<Assignment> {
    let current = match storage.get_assignment_by_id(assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            uploads.discard(&upload);
            return Err(PortalError::not_found("Assignment not found"));
        }
        Err(e) => {
            uploads.discard(&upload);
            return Err(e);
        }
    };

    let file = AssignmentFile {
        file_url: upload.url.clone(),
        file_name: upload.original_name.clone(),
        file_size: upload.size,
        file_type: upload.content_type.clone(),
        upload_date: chrono::Utc::now(),
    };

    let updated = match storage.replace_assignment_file(assignment_id, file).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            // 读取与写入之间记录被删除
            uploads.discard(&upload);
            return Err(PortalError::not_found("Assignment not found"));
        }
        Err(e) => {
            uploads.discard(&upload);
            return Err(e);
        }
    };

    info!(
        assignment_id,
        stored_name = %upload.stored_name,
        "Assignment file replaced"
    );

    if let Some(old) = current.file
        && old.file_url != upload.url
    {
        match uploads.remove_url(&old.file_url) {
            Ok(true) => info!(assignment_id, "Removed previous file {}", old.file_url),
            Ok(false) => warn!(
                assignment_id,
                "Previous file {} was already missing", old.file_url
            ),
            Err(e) => warn!(
                assignment_id,
                "Failed to remove previous file {}: {}", old.file_url, e
            ),
        }
    }

    Ok(updated)
}
