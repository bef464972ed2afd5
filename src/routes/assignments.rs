use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::assignments::requests::{AssignmentListParams, CreateAssignmentRequest};
use crate::routes::submissions;
use crate::services::AssignmentService;
use crate::utils::SafeIDI64;

// 懒加载的全局 AssignmentService 实例
static ASSIGNMENT_SERVICE: Lazy<AssignmentService> = Lazy::new(AssignmentService::new_lazy);

// 列出作业
pub async fn list_assignments(
    req: HttpRequest,
    query: web::Query<AssignmentListParams>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .list_assignments(&req, query.into_inner())
        .await
}

// 创建作业
pub async fn create_assignment(
    req: HttpRequest,
    body: web::Json<CreateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .create_assignment(&req, body.into_inner())
        .await
}

// 获取作业详情
pub async fn get_assignment(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.get_assignment(&req, path.0).await
}

// 提交作业文件（替换当前文件）
pub async fn submit_assignment_file(
    req: HttpRequest,
    path: SafeIDI64,
    payload: Multipart,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .submit_assignment_file(&req, path.0, payload)
        .await
}

// 配置路由
pub fn configure_assignments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/assignments")
            .service(
                web::resource("")
                    .route(web::get().to(list_assignments))
                    .route(web::post().to(create_assignment)),
            )
            .service(web::resource("/{id}").route(web::get().to(get_assignment)))
            .service(web::resource("/{id}/submit").route(web::post().to(submit_assignment_file)))
            // 作业下的提交
            .service(
                web::resource("/{id}/submissions")
                    .route(web::post().to(submissions::create_submission)),
            )
            .service(
                web::resource("/{id}/submission/{studentId}")
                    .route(web::get().to(submissions::get_submission_for_student)),
            ),
    );
}
