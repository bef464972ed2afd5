use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ProfileService;
use crate::errors::Result;
use crate::models::profiles::requests::UpdateProfileRequest;
use crate::models::profiles::responses::ProfileDetail;
use crate::storage::Storage;

pub async fn update_profile(
    service: &ProfileService,
    request: &HttpRequest,
    user_id: i64,
    req: UpdateProfileRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let detail = upsert(storage.as_ref(), user_id, req).await?;
    Ok(HttpResponse::Ok().json(detail))
}

/// 创建或覆盖档案；提供姓名且用户存在时同步更新用户姓名
pub async fn upsert(
    storage: &dyn Storage,
    user_id: i64,
    req: UpdateProfileRequest,
) -> Result<ProfileDetail> {
    let mut req = req.normalized()?;

    let user = match req.name.take() {
        Some(name) => {
            let updated = storage.update_user_name(user_id, &name).await?;
            if updated.is_none() {
                tracing::debug!(user_id, "User not found, profile name ignored");
            }
            updated
        }
        None => storage.get_user_by_id(user_id).await?,
    };

    let profile = storage.upsert_profile(user_id, req).await?;
    tracing::info!(user_id, profile_id = profile.id, "Student profile saved");

    Ok(ProfileDetail {
        profile,
        user: user.map(Into::into),
    })
}
