use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::grades::responses::GradeCountResponse;
use crate::services::failure_response;

pub async fn count_teachers(
    service: &TeacherService,
    request: &HttpRequest,
    grade_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.count_teachers_by_grade(grade_id).await {
        Ok(count) => Ok(HttpResponse::Ok().json(GradeCountResponse { grade_id, count })),
        Err(e) => Ok(failure_response("Failed to count teachers", e)),
    }
}
