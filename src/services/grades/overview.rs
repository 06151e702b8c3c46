use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::debug;

use super::GradeService;
use crate::errors::{Result, SchoolError};
use crate::models::grades::responses::GradeOverviewResponse;
use crate::services::failure_response;

// 年级总览，学生或教师为空时仍返回成功
pub async fn get_grade_overview(
    service: &GradeService,
    request: &HttpRequest,
    grade_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let overview: Result<GradeOverviewResponse> = async {
        let grade = storage
            .get_grade_by_id(grade_id)
            .await?
            .ok_or_else(|| SchoolError::not_found("Grade not found"))?;
        let students = storage.list_students_by_grade(grade_id).await?;
        let teachers = storage.list_teachers_by_grade(grade_id).await?;

        Ok(GradeOverviewResponse {
            grade_id: grade.id,
            grade_name: grade.grade_name,
            students,
            teachers,
        })
    }
    .await;

    match overview {
        Ok(overview) => {
            debug!(
                "Grade {} overview: {} students, {} teachers",
                grade_id,
                overview.students.len(),
                overview.teachers.len()
            );
            Ok(HttpResponse::Ok().json(overview))
        }
        Err(e) => Ok(failure_response("Failed to load grade overview", e)),
    }
}
