use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::profiles::requests::UpdateProfileRequest;
use crate::services::ProfileService;
use crate::utils::SafeUserIdI64;

static PROFILE_SERVICE: Lazy<ProfileService> = Lazy::new(ProfileService::new_lazy);

// 获取学生档案
pub async fn get_profile(req: HttpRequest, path: SafeUserIdI64) -> ActixResult<HttpResponse> {
    PROFILE_SERVICE.get_profile(&req, path.0).await
}

// 创建或更新学生档案
pub async fn update_profile(
    req: HttpRequest,
    path: SafeUserIdI64,
    body: web::Json<UpdateProfileRequest>,
) -> ActixResult<HttpResponse> {
    PROFILE_SERVICE
        .update_profile(&req, path.0, body.into_inner())
        .await
}

// 配置路由
pub fn configure_profile_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/profile").service(
            web::resource("/{userId}")
                .route(web::get().to(get_profile))
                .route(web::put().to(update_profile)),
        ),
    );
}
