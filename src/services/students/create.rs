use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::StudentService;
use crate::models::students::requests::CreateStudentRequest;
use crate::services::failure_response;
use crate::services::validation::check_new_student;

pub async fn create_student(
    service: &StudentService,
    request: &HttpRequest,
    student_data: CreateStudentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let student = match check_new_student(&storage, student_data).await {
        Ok(student) => student,
        Err(e) => return Ok(failure_response("Student creation rejected", e)),
    };

    match storage.create_student(student).await {
        Ok(student) => {
            info!(
                "Student {} created in grade {}",
                student.id, student.grade_id
            );
            Ok(HttpResponse::Ok().json(student))
        }
        Err(e) => Ok(failure_response("Student creation failed", e)),
    }
}
