use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::grades::responses::GradeCountResponse;
use crate::services::failure_response;

pub async fn count_students(
    service: &StudentService,
    request: &HttpRequest,
    grade_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.count_students_by_grade(grade_id).await {
        Ok(count) => Ok(HttpResponse::Ok().json(GradeCountResponse { grade_id, count })),
        Err(e) => Ok(failure_response("Failed to count students", e)),
    }
}
