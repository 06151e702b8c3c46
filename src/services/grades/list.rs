use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeService;
use crate::services::failure_response;

pub async fn list_grades(service: &GradeService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_grades().await {
        Ok(grades) => Ok(HttpResponse::Ok().json(grades)),
        Err(e) => Ok(failure_response("Failed to list grades", e)),
    }
}
