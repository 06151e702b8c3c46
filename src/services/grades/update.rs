use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::GradeService;
use crate::errors::SchoolError;
use crate::models::grades::{requests::UpdateGradeRequest, responses::GradeUpdatedResponse};
use crate::services::failure_response;
use crate::services::validation::check_grade_patch;

pub async fn update_grade(
    service: &GradeService,
    request: &HttpRequest,
    grade_id: i64,
    update_data: UpdateGradeRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_grade_by_id(grade_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(failure_response(
                "Grade update",
                SchoolError::not_found("Grade not found"),
            ));
        }
        Err(e) => return Ok(failure_response("Failed to get grade", e)),
    }

    let patch = match check_grade_patch(&storage, grade_id, update_data).await {
        Ok(patch) => patch,
        Err(e) => return Ok(failure_response("Grade update rejected", e)),
    };

    match storage.update_grade(grade_id, patch).await {
        Ok(Some(grade)) => {
            info!("Grade {} updated", grade_id);
            Ok(HttpResponse::Ok().json(GradeUpdatedResponse {
                message: "Grade updated successfully".to_string(),
                grade,
            }))
        }
        Ok(None) => Ok(failure_response(
            "Grade update",
            SchoolError::not_found("Grade not found"),
        )),
        Err(e) => Ok(failure_response("Grade update failed", e)),
    }
}
