use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{SubmissionService, derive_status};
use crate::errors::{PortalError, Result};
use crate::models::submissions::entities::{NewSubmission, Submission, SubmissionStatus};
use crate::models::submissions::requests::CreateSubmissionRequest;
use crate::storage::Storage;

pub async fn create_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    assignment_id: i64,
    req: CreateSubmissionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let submission = create(storage.as_ref(), assignment_id, req).await?;
    Ok(HttpResponse::Created().json(submission))
}

/// 为作业创建提交，状态按提交时间推导
pub async fn create(
    storage: &dyn Storage,
    assignment_id: i64,
    req: CreateSubmissionRequest,
) -> Result<Submission> {
    req.validate()?;

    let assignment = storage
        .get_assignment_by_id(assignment_id)
        .await?
        .ok_or_else(|| PortalError::not_found("Assignment not found"))?;

    let submission_date = req.submission_date.unwrap_or_else(chrono::Utc::now);
    let status = derive_status(
        submission_date,
        SubmissionStatus::default(),
        Some(&assignment),
    );

    let submission = storage
        .create_submission(NewSubmission {
            assignment_id,
            student_id: req.student_id,
            submission_date,
            status,
        })
        .await?;

    tracing::info!(
        submission_id = submission.id,
        assignment_id,
        student_id = submission.student_id,
        status = %submission.status,
        "Submission created"
    );
    Ok(submission)
}
