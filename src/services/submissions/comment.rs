use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{SubmissionService, modify_submission};
use crate::errors::Result;
use crate::models::submissions::entities::{Submission, SubmissionComment};
use crate::models::submissions::requests::AddCommentRequest;
use crate::storage::Storage;

pub async fn add_comment(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: i64,
    req: AddCommentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let submission = comment(storage.as_ref(), submission_id, req).await?;
    Ok(HttpResponse::Ok().json(submission))
}

pub async fn comment(
    storage: &dyn Storage,
    submission_id: i64,
    req: AddCommentRequest,
) -> Result<Submission> {
    req.validate()?;

    let comment = SubmissionComment {
        author_id: req.author_id,
        text: req.text.trim().to_string(),
        created_at: chrono::Utc::now(),
    };

    modify_submission(storage, submission_id, |submission| {
        submission.comments.push(comment.clone());
    })
    .await
}
