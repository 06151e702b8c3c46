use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::TeacherService;
use crate::errors::SchoolError;
use crate::models::MessageResponse;
use crate::services::failure_response;

pub async fn delete_teacher(
    service: &TeacherService,
    request: &HttpRequest,
    teacher_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_teacher(teacher_id).await {
        Ok(true) => {
            info!("Teacher {} deleted", teacher_id);
            Ok(HttpResponse::Ok().json(MessageResponse::new(format!(
                "Teacher of id:{teacher_id} deleted successfully"
            ))))
        }
        Ok(false) => Ok(failure_response(
            "Teacher deletion",
            SchoolError::not_found("Teacher not found"),
        )),
        Err(e) => Ok(failure_response("Teacher deletion failed", e)),
    }
}
