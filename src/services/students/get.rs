use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::errors::SchoolError;
use crate::models::students::responses::StudentResponse;
use crate::services::failure_response;

pub async fn get_student(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_student_by_id(student_id).await {
        Ok(Some(student)) => Ok(HttpResponse::Ok().json(StudentResponse { student })),
        Ok(None) => Ok(failure_response(
            "Student lookup",
            SchoolError::not_found("Student not found"),
        )),
        Err(e) => Ok(failure_response("Failed to get student", e)),
    }
}
