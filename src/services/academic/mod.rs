pub mod detail;
pub mod report;
pub mod upsert;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::academic::requests::UpsertPerformanceRequest;
use crate::storage::Storage;

pub struct AcademicService {
    storage: Option<Arc<dyn Storage>>,
}

impl AcademicService {
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

    pub async fn get_performance(
        &self,
        request: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        detail::get_performance(self, request, student_id).await
    }

    pub async fn upsert_performance(
        &self,
        request: &HttpRequest,
        req: UpsertPerformanceRequest,
    ) -> ActixResult<HttpResponse> {
        upsert::upsert_performance(self, request, req).await
    }

    pub async fn get_report(
        &self,
        request: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        report::get_report(self, request, student_id).await
    }
}
