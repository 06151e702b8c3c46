use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::StudentService;
use crate::errors::SchoolError;
use crate::models::students::{requests::UpdateStudentRequest, responses::StudentUpdatedResponse};
use crate::services::failure_response;
use crate::services::validation::check_student_patch;

pub async fn update_student(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
    update_data: UpdateStudentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_student_by_id(student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(failure_response(
                "Student update",
                SchoolError::not_found("Student not found"),
            ));
        }
        Err(e) => return Ok(failure_response("Failed to get student", e)),
    }

    let patch = match check_student_patch(&storage, student_id, update_data).await {
        Ok(patch) => patch,
        Err(e) => return Ok(failure_response("Student update rejected", e)),
    };

    match storage.update_student(student_id, patch).await {
        Ok(Some(student)) => {
            info!("Student {} updated", student_id);
            Ok(HttpResponse::Ok().json(StudentUpdatedResponse {
                message: "Student updated successfully".to_string(),
                student,
            }))
        }
        Ok(None) => Ok(failure_response(
            "Student update",
            SchoolError::not_found("Student not found"),
        )),
        Err(e) => Ok(failure_response("Student update failed", e)),
    }
}
