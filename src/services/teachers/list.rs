use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::errors::SchoolError;
use crate::services::failure_response;

pub async fn list_teachers(
    service: &TeacherService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_teachers().await {
        Ok(teachers) => Ok(HttpResponse::Ok().json(teachers)),
        Err(e) => Ok(failure_response("Failed to list teachers", e)),
    }
}

pub async fn list_teachers_by_grade(
    service: &TeacherService,
    request: &HttpRequest,
    grade_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_teachers_by_grade(grade_id).await {
        Ok(teachers) if teachers.is_empty() => Ok(failure_response(
            "Teachers by grade",
            SchoolError::not_found(format!("No teachers found for grade {grade_id}")),
        )),
        Ok(teachers) => Ok(HttpResponse::Ok().json(teachers)),
        Err(e) => Ok(failure_response("Failed to list teachers by grade", e)),
    }
}
