use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::models::assignments::requests::CreateAssignmentRequest;

pub async fn create_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    req: CreateAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let req = req.normalized()?;
    let storage = service.get_storage(request);

    let assignment = storage.create_assignment(req).await?;
    tracing::info!(
        assignment_id = assignment.id,
        semester = assignment.semester,
        "Assignment '{}' created",
        assignment.title
    );
    Ok(HttpResponse::Created().json(assignment))
}
