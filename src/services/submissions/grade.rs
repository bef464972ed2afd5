use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::errors::{PortalError, Result};
use crate::models::submissions::entities::{GradeUpdate, Submission};
use crate::models::submissions::requests::GradeSubmissionRequest;
use crate::storage::Storage;

pub async fn grade_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: i64,
    req: GradeSubmissionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let submission = grade(storage.as_ref(), submission_id, req).await?;
    Ok(HttpResponse::Ok().json(submission))
}

/// 评分；状态直接置为 graded，不做迟交推导
///
/// 只写评分相关字段，不会覆盖同时写入的附件与评论。
pub async fn grade(
    storage: &dyn Storage,
    submission_id: i64,
    req: GradeSubmissionRequest,
) -> Result<Submission> {
    req.validate()?;

    // 未提供反馈时保留原反馈，空白反馈视为清空
    let feedback = req.feedback.map(|feedback| {
        let feedback = feedback.trim().to_string();
        (!feedback.is_empty()).then_some(feedback)
    });

    let updated = storage
        .grade_submission(
            submission_id,
            GradeUpdate {
                grade: req.grade,
                feedback,
            },
        )
        .await?
        .ok_or_else(|| PortalError::not_found("Submission not found"))?;

    tracing::info!(submission_id, grade = req.grade, "Submission graded");
    Ok(updated)
}
