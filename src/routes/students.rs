use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::OffsetQuery;
use crate::models::students::requests::{CreateStudentRequest, UpdateStudentRequest};
use crate::services::StudentService;
use crate::utils::{SafeGradeIdI64, SafeIDI64};

// 懒加载的全局 STUDENT_SERVICE 实例
static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);

// HTTP处理程序
pub async fn create_student(
    req: HttpRequest,
    student_data: web::Json<CreateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .create_student(&req, student_data.into_inner())
        .await
}

pub async fn list_students_page(
    req: HttpRequest,
    query: web::Query<OffsetQuery>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .list_students_page(&req, query.into_inner())
        .await
}

pub async fn get_student(req: HttpRequest, student_id: SafeIDI64) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.get_student(&req, student_id.0).await
}

pub async fn list_students(req: HttpRequest) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.list_students(&req).await
}

pub async fn update_student(
    req: HttpRequest,
    student_id: SafeIDI64,
    update_data: web::Json<UpdateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .update_student(&req, student_id.0, update_data.into_inner())
        .await
}

pub async fn delete_student(req: HttpRequest, student_id: SafeIDI64) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.delete_student(&req, student_id.0).await
}

pub async fn list_students_by_grade(
    req: HttpRequest,
    grade_id: SafeGradeIdI64,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .list_students_by_grade(&req, grade_id.0)
        .await
}

pub async fn count_students(req: HttpRequest, grade_id: SafeGradeIdI64) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.count_students(&req, grade_id.0).await
}

// 配置路由
pub fn configure_students_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/students/")
            .route(web::get().to(list_students_page))
            .route(web::post().to(create_student)),
    )
    .service(web::resource("/students/{id}").route(web::get().to(get_student)))
    .service(web::resource("/allstudents/").route(web::get().to(list_students)))
    .service(web::resource("/stud/{id}").route(web::put().to(update_student)))
    .service(web::resource("/del_stud/{id}").route(web::delete().to(delete_student)))
    .service(
        // 年级为空时返回 404
        web::resource("/students_by_grade/{grade_id}")
            .route(web::get().to(list_students_by_grade)),
    )
    .service(web::resource("/count_students/{grade_id}").route(web::get().to(count_students)));
}
