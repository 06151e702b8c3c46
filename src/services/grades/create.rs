use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::GradeService;
use crate::models::grades::requests::CreateGradeRequest;
use crate::services::failure_response;
use crate::services::validation::check_new_grade;

pub async fn create_grade(
    service: &GradeService,
    request: &HttpRequest,
    grade_data: CreateGradeRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let grade = match check_new_grade(&storage, grade_data).await {
        Ok(grade) => grade,
        Err(e) => return Ok(failure_response("Grade creation rejected", e)),
    };

    match storage.create_grade(grade).await {
        Ok(grade) => {
            info!("Grade {} ({}) created", grade.id, grade.grade_name);
            Ok(HttpResponse::Ok().json(grade))
        }
        Err(e) => Ok(failure_response("Grade creation failed", e)),
    }
}
