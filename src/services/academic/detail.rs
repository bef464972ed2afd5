use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AcademicService;
use crate::errors::PortalError;

pub async fn get_performance(
    service: &AcademicService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_latest_performance(student_id).await? {
        Some(performance) => Ok(HttpResponse::Ok().json(performance)),
        None => Err(PortalError::not_found("Academic performance not found").into()),
    }
}
