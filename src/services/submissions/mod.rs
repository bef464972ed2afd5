pub mod attach;
pub mod comment;
pub mod create;
pub mod detail;
pub mod grade;
pub mod modify;
pub mod status;

use actix_multipart::Multipart;
use actix_web::web::Data;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::submissions::requests::{
    AddCommentRequest, CreateSubmissionRequest, GradeSubmissionRequest,
};
use crate::storage::{Storage, UploadStore};

pub use modify::modify_submission;
pub use status::derive_status;

pub struct SubmissionService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubmissionService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            super::storage_from_request(request)
        }
    }

    pub(crate) fn get_upload_store(&self, request: &HttpRequest) -> Data<UploadStore> {
        super::upload_store_from_request(request)
    }

    pub async fn create_submission(
        &self,
        request: &HttpRequest,
        assignment_id: i64,
        req: CreateSubmissionRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_submission(self, request, assignment_id, req).await
    }

    pub async fn get_submission_for_student(
        &self,
        request: &HttpRequest,
        assignment_id: i64,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        detail::get_submission_for_student(self, request, assignment_id, student_id).await
    }

    pub async fn attach_file(
        &self,
        request: &HttpRequest,
        submission_id: i64,
        payload: Multipart,
    ) -> ActixResult<HttpResponse> {
        attach::attach_file(self, request, submission_id, payload).await
    }

    pub async fn grade_submission(
        &self,
        request: &HttpRequest,
        submission_id: i64,
        req: GradeSubmissionRequest,
    ) -> ActixResult<HttpResponse> {
        grade::grade_submission(self, request, submission_id, req).await
    }

    pub async fn add_comment(
        &self,
        request: &HttpRequest,
        submission_id: i64,
        req: AddCommentRequest,
    ) -> ActixResult<HttpResponse> {
        comment::add_comment(self, request, submission_id, req).await
    }
}
