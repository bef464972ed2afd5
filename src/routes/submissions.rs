use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::submissions::requests::{
    AddCommentRequest, CreateSubmissionRequest, GradeSubmissionRequest,
};
use crate::services::SubmissionService;
use crate::utils::{SafeIDI64, SafeStudentIdI64};

// 懒加载的全局 SubmissionService 实例
static SUBMISSION_SERVICE: Lazy<SubmissionService> = Lazy::new(SubmissionService::new_lazy);

// 创建提交（挂在 /api/assignments/{id}/submissions 下）
pub async fn create_submission(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<CreateSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .create_submission(&req, path.0, body.into_inner())
        .await
}

// 获取学生对作业的最新提交
pub async fn get_submission_for_student(
    req: HttpRequest,
    path: SafeIDI64,
    student: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .get_submission_for_student(&req, path.0, student.0)
        .await
}

// 上传附件
pub async fn attach_file(
    req: HttpRequest,
    path: SafeIDI64,
    payload: Multipart,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE.attach_file(&req, path.0, payload).await
}

// 评分
pub async fn grade_submission(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<GradeSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .grade_submission(&req, path.0, body.into_inner())
        .await
}

// 添加评论
pub async fn add_comment(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<AddCommentRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .add_comment(&req, path.0, body.into_inner())
        .await
}

// 配置路由
pub fn configure_submissions_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/submissions")
            .service(web::resource("/{id}/attachments").route(web::post().to(attach_file)))
            .service(web::resource("/{id}/grade").route(web::put().to(grade_submission)))
            .service(web::resource("/{id}/comments").route(web::post().to(add_comment))),
    );
}
