use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::TeacherService;
use crate::models::teachers::requests::CreateTeacherRequest;
use crate::services::failure_response;
use crate::services::validation::check_new_teacher;

pub async fn create_teacher(
    service: &TeacherService,
    request: &HttpRequest,
    teacher_data: CreateTeacherRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let teacher = match check_new_teacher(&storage, teacher_data).await {
        Ok(teacher) => teacher,
        Err(e) => return Ok(failure_response("Teacher creation rejected", e)),
    };

    match storage.create_teacher(teacher).await {
        Ok(teacher) => {
            info!(
                "Teacher {} ({}) created in grade {}",
                teacher.id, teacher.qualification, teacher.grade_id
            );
            Ok(HttpResponse::Ok().json(teacher))
        }
        Err(e) => Ok(failure_response("Teacher creation failed", e)),
    }
}
