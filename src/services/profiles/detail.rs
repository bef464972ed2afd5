use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ProfileService;
use crate::errors::PortalError;
use crate::models::profiles::responses::ProfileDetail;

pub async fn get_profile(
    service: &ProfileService,
    request: &HttpRequest,
    user_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(profile) = storage.get_profile_by_user_id(user_id).await? else {
        return Err(PortalError::not_found("Profile not found").into());
    };

    let user = storage.get_user_by_id(user_id).await?.map(Into::into);

    Ok(HttpResponse::Ok().json(ProfileDetail { profile, user }))
}
