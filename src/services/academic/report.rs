use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AcademicService;
use crate::errors::{PortalError, Result};
use crate::models::academic::entities::overall_performance;
use crate::models::academic::responses::AcademicReport;
use crate::storage::Storage;

pub async fn get_report(
    service: &AcademicService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let report = build_report(storage.as_ref(), student_id).await?;
    Ok(HttpResponse::Ok().json(report))
}

/// 基于最近的学业记录生成报告
pub async fn build_report(storage: &dyn Storage, student_id: i64) -> Result<AcademicReport> {
    let performance = storage
        .get_latest_performance(student_id)
        .await?
        .ok_or_else(|| PortalError::not_found("Academic performance not found"))?;

    let student_info = storage.get_user_by_id(student_id).await?.map(Into::into);

    Ok(AcademicReport {
        student_info,
        overall_performance: overall_performance(&performance.subjects),
        semester: performance.semester,
        gpa: performance.gpa,
        completed_credits: performance.completed_credits,
        subjects: performance.subjects,
    })
}
