pub mod create;
pub mod detail;
pub mod list;
pub mod submit;

use actix_multipart::Multipart;
use actix_web::web::Data;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::assignments::requests::{AssignmentListParams, CreateAssignmentRequest};
use crate::storage::{Storage, UploadStore};

pub use submit::submit_file;

pub struct AssignmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl AssignmentService {
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

    pub async fn list_assignments(
        &self,
        request: &HttpRequest,
        query: AssignmentListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_assignments(self, request, query).await
    }

    pub async fn create_assignment(
        &self,
        request: &HttpRequest,
        req: CreateAssignmentRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_assignment(self, request, req).await
    }

    pub async fn get_assignment(
        &self,
        request: &HttpRequest,
        assignment_id: i64,
    ) -> ActixResult<HttpResponse> {
        detail::get_assignment(self, request, assignment_id).await
    }

    pub async fn submit_assignment_file(
        &self,
        request: &HttpRequest,
        assignment_id: i64,
        payload: Multipart,
    ) -> ActixResult<HttpResponse> {
        submit::submit_assignment_file(self, request, assignment_id, payload).await
    }
}
