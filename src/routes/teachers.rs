use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::teachers::requests::{CreateTeacherRequest, UpdateTeacherRequest};
use crate::services::TeacherService;
use crate::utils::{SafeGradeIdI64, SafeIDI64};

// 懒加载的全局 TEACHER_SERVICE 实例
static TEACHER_SERVICE: Lazy<TeacherService> = Lazy::new(TeacherService::new_lazy);

// HTTP处理程序
pub async fn create_teacher(
    req: HttpRequest,
    teacher_data: web::Json<CreateTeacherRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .create_teacher(&req, teacher_data.into_inner())
        .await
}

pub async fn get_teacher(req: HttpRequest, teacher_id: SafeIDI64) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.get_teacher(&req, teacher_id.0).await
}

pub async fn list_teachers(req: HttpRequest) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.list_teachers(&req).await
}

pub async fn update_teacher(
    req: HttpRequest,
    teacher_id: SafeIDI64,
    update_data: web::Json<UpdateTeacherRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .update_teacher(&req, teacher_id.0, update_data.into_inner())
        .await
}

pub async fn delete_teacher(req: HttpRequest, teacher_id: SafeIDI64) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.delete_teacher(&req, teacher_id.0).await
}

pub async fn list_teachers_by_grade(
    req: HttpRequest,
    grade_id: SafeGradeIdI64,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .list_teachers_by_grade(&req, grade_id.0)
        .await
}

pub async fn count_teachers(req: HttpRequest, grade_id: SafeGradeIdI64) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.count_teachers(&req, grade_id.0).await
}

// 配置路由
pub fn configure_teachers_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/teachers/").route(web::post().to(create_teacher)))
        .service(web::resource("/teachers/{id}").route(web::get().to(get_teacher)))
        .service(web::resource("/allteachers/").route(web::get().to(list_teachers)))
        .service(web::resource("/teach/{id}").route(web::put().to(update_teacher)))
        .service(web::resource("/del_teach/{id}").route(web::delete().to(delete_teacher)))
        .service(
            web::resource("/teachers_by_grade/{grade_id}")
                .route(web::get().to(list_teachers_by_grade)),
        )
        .service(web::resource("/count_teachers/{grade_id}").route(web::get().to(count_teachers)));
}
