use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::TeacherService;
use crate::errors::SchoolError;
use crate::models::teachers::{requests::UpdateTeacherRequest, responses::TeacherUpdatedResponse};
use crate::services::failure_response;
use crate::services::validation::check_teacher_patch;

pub async fn update_teacher(
    service: &TeacherService,
    request: &HttpRequest,
    teacher_id: i64,
    update_data: UpdateTeacherRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_teacher_by_id(teacher_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(failure_response(
                "Teacher update",
                SchoolError::not_found("Teacher not found"),
            ));
        }
        Err(e) => return Ok(failure_response("Failed to get teacher", e)),
    }

    let patch = match check_teacher_patch(&storage, teacher_id, update_data).await {
        Ok(patch) => patch,
        Err(e) => return Ok(failure_response("Teacher update rejected", e)),
    };

    match storage.update_teacher(teacher_id, patch).await {
        Ok(Some(teacher)) => {
            info!("Teacher {} updated", teacher_id);
            Ok(HttpResponse::Ok().json(TeacherUpdatedResponse {
                message: "Teacher updated successfully".to_string(),
                teacher,
            }))
        }
        Ok(None) => Ok(failure_response(
            "Teacher update",
            SchoolError::not_found("Teacher not found"),
        )),
        Err(e) => Ok(failure_response("Teacher update failed", e)),
    }
}
