use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AcademicService;
use crate::models::academic::requests::UpsertPerformanceRequest;

pub async fn upsert_performance(
    service: &AcademicService,
    request: &HttpRequest,
    req: UpsertPerformanceRequest,
) -> ActixResult<HttpResponse> {
    let req = req.normalized()?;
    let storage = service.get_storage(request);

    let performance = storage.upsert_performance(req).await?;
    tracing::info!(
        student_id = performance.student_id,
        semester = %performance.semester,
        subjects = performance.subjects.len(),
        "Academic performance saved"
    );
    Ok(HttpResponse::Ok().json(performance))
}
