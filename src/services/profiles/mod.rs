pub mod detail;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::profiles::requests::UpdateProfileRequest;
use crate::storage::Storage;

pub struct ProfileService {
    storage: Option<Arc<dyn Storage>>,
}

impl ProfileService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            super::storage_from_request(request)
        }
    }

    pub async fn get_profile(
        &self,
        request: &HttpRequest,
        user_id: i64,
    ) -> ActixResult<HttpResponse> {
        detail::get_profile(self, request, user_id).await
    }

    pub async fn update_profile(
        &self,
        request: &HttpRequest,
        user_id: i64,
        req: UpdateProfileRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_profile(self, request, user_id, req).await
    }
}
