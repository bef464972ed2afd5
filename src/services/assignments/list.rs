use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::models::assignments::requests::{AssignmentListParams, AssignmentListQuery};

pub async fn list_assignments(
    service: &AssignmentService,
    request: &HttpRequest,
    params: AssignmentListParams,
) -> ActixResult<HttpResponse> {
    let query = AssignmentListQuery::try_from(params)?;
    let storage = service.get_storage(request);

    let assignments = storage.list_assignments(query).await?;
    Ok(HttpResponse::Ok().json(assignments))
}
