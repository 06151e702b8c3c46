use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::errors::SchoolError;
use crate::models::teachers::responses::TeacherResponse;
use crate::services::failure_response;

pub async fn get_teacher(
    service: &TeacherService,
    request: &HttpRequest,
    teacher_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_teacher_by_id(teacher_id).await {
        Ok(Some(teacher)) => Ok(HttpResponse::Ok().json(TeacherResponse { teacher })),
        Ok(None) => Ok(failure_response(
            "Teacher lookup",
            SchoolError::not_found("Teacher not found"),
        )),
        Err(e) => Ok(failure_response("Failed to get teacher", e)),
    }
}
