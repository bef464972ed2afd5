use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::errors::PortalError;
use crate::models::submissions::responses::SubmissionDetail;

pub async fn get_submission_for_student(
    service: &SubmissionService,
    request: &HttpRequest,
    assignment_id: i64,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(submission) = storage
        .get_latest_submission(assignment_id, student_id)
        .await?
    else {
        return Err(PortalError::not_found("Submission not found").into());
    };

    let assignment = storage.get_assignment_by_id(assignment_id).await?;

    Ok(HttpResponse::Ok().json(SubmissionDetail {
        submission,
        assignment,
    }))
}
