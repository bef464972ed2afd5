pub mod download;
pub mod upload;

use actix_web::web::Data;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::storage::UploadStore;

pub use upload::receive_single_file;

pub struct FileService {
    uploads: Option<Data<UploadStore>>,
}

impl FileService {
    pub fn new_lazy() -> Self {
        Self { uploads: None }
    }

    pub(crate) fn get_upload_store(&self, request: &HttpRequest) -> Data<UploadStore> {
        if let Some(uploads) = &self.uploads {
            uploads.clone()
        } else {
            super::upload_store_from_request(request)
        }
    }

    // 读取已上传的文件
    pub async fn serve_upload(
        &self,
        request: &HttpRequest,
        name: String,
    ) -> ActixResult<HttpResponse> {
        download::serve_upload(self, request, name).await
    }
}
