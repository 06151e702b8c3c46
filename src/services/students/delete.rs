use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::StudentService;
use crate::errors::SchoolError;
use crate::models::MessageResponse;
use crate::services::failure_response;

pub async fn delete_student(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_student(student_id).await {
        Ok(true) => {
            info!("Student {} deleted", student_id);
            Ok(HttpResponse::Ok().json(MessageResponse::new(format!(
                "student of id:{student_id} deleted successfully"
            ))))
        }
        Ok(false) => Ok(failure_response(
            "Student deletion",
            SchoolError::not_found("Student not found"),
        )),
        Err(e) => Ok(failure_response("Student deletion failed", e)),
    }
}
