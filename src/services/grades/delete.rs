use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::GradeService;
use crate::errors::SchoolError;
use crate::models::MessageResponse;
use crate::services::failure_response;

// 删除年级不会级联删除其学生与教师
pub async fn delete_grade(
    service: &GradeService,
    request: &HttpRequest,
    grade_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_grade(grade_id).await {
        Ok(true) => {
            info!("Grade {} deleted", grade_id);
            Ok(HttpResponse::Ok().json(MessageResponse::new(format!(
                "grade of id:{grade_id} deleted successfully"
            ))))
        }
        Ok(false) => Ok(failure_response(
            "Grade deletion",
            SchoolError::not_found("Grade not found"),
        )),
        Err(e) => Ok(failure_response("Grade deletion failed", e)),
    }
}
