use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeService;
use crate::errors::SchoolError;
use crate::models::grades::responses::GradeResponse;
use crate::services::failure_response;

pub async fn get_grade(
    service: &GradeService,
    request: &HttpRequest,
    grade_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_grade_by_id(grade_id).await {
        Ok(Some(grade)) => Ok(HttpResponse::Ok().json(GradeResponse { grade })),
        Ok(None) => Ok(failure_response(
            "Grade lookup",
            SchoolError::not_found("Grade not found"),
        )),
        Err(e) => Ok(failure_response("Failed to get grade", e)),
    }
}
