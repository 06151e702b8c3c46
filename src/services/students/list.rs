use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::errors::SchoolError;
use crate::models::OffsetQuery;
use crate::services::failure_response;

pub async fn list_students(
    service: &StudentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_students().await {
        Ok(students) => Ok(HttpResponse::Ok().json(students)),
        Err(e) => Ok(failure_response("Failed to list students", e)),
    }
}

pub async fn list_students_page(
    service: &StudentService,
    request: &HttpRequest,
    query: OffsetQuery,
) -> ActixResult<HttpResponse> {
    if !query.is_valid() {
        return Ok(failure_response(
            "Student page rejected",
            SchoolError::validation(
                "Invalid skip or limit: limit must be positive and skip must not be negative",
            ),
        ));
    }

    let storage = service.get_storage(request);

    match storage
        .list_students_with_offset(query.skip as u64, query.limit as u64)
        .await
    {
        Ok(students) => Ok(HttpResponse::Ok().json(students)),
        Err(e) => Ok(failure_response("Failed to list students", e)),
    }
}

// 该年级没有学生时返回 404（与计数接口返回 0 不同）
pub async fn list_students_by_grade(
    service: &StudentService,
    request: &HttpRequest,
    grade_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_students_by_grade(grade_id).await {
        Ok(students) if students.is_empty() => Ok(failure_response(
            "Students by grade",
            SchoolError::not_found(format!("No students found for grade {grade_id}")),
        )),
        Ok(students) => Ok(HttpResponse::Ok().json(students)),
        Err(e) => Ok(failure_response("Failed to list students by grade", e)),
    }
}
