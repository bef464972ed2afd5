use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::academic::requests::UpsertPerformanceRequest;
use crate::services::AcademicService;
use crate::utils::SafeStudentIdI64;

static ACADEMIC_SERVICE: Lazy<AcademicService> = Lazy::new(AcademicService::new_lazy);

// 获取学业表现
pub async fn get_performance(
    req: HttpRequest,
    path: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    ACADEMIC_SERVICE.get_performance(&req, path.0).await
}

// 创建或更新学业表现
pub async fn upsert_performance(
    req: HttpRequest,
    body: web::Json<UpsertPerformanceRequest>,
) -> ActixResult<HttpResponse> {
    ACADEMIC_SERVICE
        .upsert_performance(&req, body.into_inner())
        .await
}

// 学业报告
pub async fn get_report(req: HttpRequest, path: SafeStudentIdI64) -> ActixResult<HttpResponse> {
    ACADEMIC_SERVICE.get_report(&req, path.0).await
}

// 配置路由
pub fn configure_academic_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/academic")
            .service(web::resource("").route(web::post().to(upsert_performance)))
            .service(web::resource("/{studentId}").route(web::get().to(get_performance)))
            .service(web::resource("/{studentId}/report").route(web::get().to(get_report))),
    );
}
