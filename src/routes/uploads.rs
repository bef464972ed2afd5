use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::FileService;
use crate::storage::uploads::PUBLIC_PATH;

static FILE_SERVICE: Lazy<FileService> = Lazy::new(FileService::new_lazy);

// 读取已上传文件
pub async fn serve_upload(
    req: HttpRequest,
    name: web::Path<String>,
) -> ActixResult<HttpResponse> {
    FILE_SERVICE.serve_upload(&req, name.into_inner()).await
}

// 配置路由
pub fn configure_upload_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope(PUBLIC_PATH).route("/{name}", web::get().to(serve_upload)));
}
