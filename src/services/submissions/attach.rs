use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{SubmissionService, derive_status, modify_submission};
use crate::errors::{PortalError, Result};
use crate::models::files::entities::StoredUpload;
use crate::models::submissions::entities::{Submission, SubmissionAttachment};
use crate::services::files::receive_single_file;
use crate::storage::{Storage, UploadStore};

pub async fn attach_file(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: i64,
    payload: Multipart,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let uploads = service.get_upload_store(request);

    let upload = receive_single_file(&uploads, payload).await?;
    let submission = attach(storage.as_ref(), &uploads, submission_id, upload).await?;

    Ok(HttpResponse::Ok().json(submission))
}

/// 追加附件并把提交时间移到当前时刻，随后重新推导状态
///
/// 失败时删除本次上传的文件。
pub async fn attach(
    storage: &dyn Storage,
    uploads: &UploadStore,
    submission_id: i64,
    upload: StoredUpload,
) -> Result<Submission> {
    let result = append_attachment(storage, submission_id, &upload).await;
    if result.is_err() {
        uploads.discard(&upload);
    }
    result
}

async fn append_attachment(
    storage: &dyn Storage,
    submission_id: i64,
    upload: &StoredUpload,
) -> Result<Submission> {
    let current = storage
        .get_submission_by_id(submission_id)
        .await?
        .ok_or_else(|| PortalError::not_found("Submission not found"))?;

    let assignment = storage.get_assignment_by_id(current.assignment_id).await?;
    if assignment.is_none() {
        tracing::warn!(
            submission_id,
            assignment_id = current.assignment_id,
            "Assignment missing, keeping current submission status"
        );
    }

    let now = chrono::Utc::now();
    let attachment = SubmissionAttachment {
        filename: upload.original_name.clone(),
        path: upload.url.clone(),
        uploaded_at: now,
    };

    // 状态基于写入时的最新记录推导，已评分的提交保持 graded
    let updated = modify_submission(storage, submission_id, |submission| {
        submission.attachments.push(attachment.clone());
        submission.submission_date = now;
        submission.status = derive_status(now, submission.status, assignment.as_ref());
    })
    .await?;

    tracing::info!(
        submission_id,
        status = %updated.status,
        "Attachment {} added",
        upload.stored_name
    );
    Ok(updated)
}
