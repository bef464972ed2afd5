pub mod academic;
pub mod assignments;
pub mod files;
pub mod profiles;
pub mod submissions;

pub use academic::AcademicService;
pub use assignments::AssignmentService;
pub use files::FileService;
pub use profiles::ProfileService;
pub use submissions::SubmissionService;

use actix_web::HttpRequest;
use actix_web::web::Data;
use std::sync::Arc;

use crate::storage::{Storage, UploadStore};

/// 从 app_data 取出存储实例
pub(crate) fn storage_from_request(request: &HttpRequest) -> Arc<dyn Storage> {
    request
        .app_data::<Data<Arc<dyn Storage>>>()
        .expect("Storage not found in app data")
        .get_ref()
        .clone()
}

/// 从 app_data 取出上传存储
pub(crate) fn upload_store_from_request(request: &HttpRequest) -> Data<UploadStore> {
    request
        .app_data::<Data<UploadStore>>()
        .expect("UploadStore not found in app data")
        .clone()
}
