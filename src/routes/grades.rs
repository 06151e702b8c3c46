use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::grades::requests::{CreateGradeRequest, UpdateGradeRequest};
use crate::services::GradeService;
use crate::utils::{SafeGradeIdI64, SafeIDI64};

// 懒加载的全局 GRADE_SERVICE 实例
static GRADE_SERVICE: Lazy<GradeService> = Lazy::new(GradeService::new_lazy);

// HTTP处理程序
pub async fn create_grade(
    req: HttpRequest,
    grade_data: web::Json<CreateGradeRequest>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE
        .create_grade(&req, grade_data.into_inner())
        .await
}

pub async fn get_grade(req: HttpRequest, grade_id: SafeIDI64) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.get_grade(&req, grade_id.0).await
}

pub async fn list_grades(req: HttpRequest) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.list_grades(&req).await
}

pub async fn update_grade(
    req: HttpRequest,
    grade_id: SafeIDI64,
    update_data: web::Json<UpdateGradeRequest>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE
        .update_grade(&req, grade_id.0, update_data.into_inner())
        .await
}

pub async fn delete_grade(req: HttpRequest, grade_id: SafeIDI64) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.delete_grade(&req, grade_id.0).await
}

pub async fn get_grade_overview(
    req: HttpRequest,
    grade_id: SafeGradeIdI64,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.get_grade_overview(&req, grade_id.0).await
}

// 配置路由
pub fn configure_grades_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/grades/").route(web::post().to(create_grade)))
        .service(web::resource("/grades/{id}").route(web::get().to(get_grade)))
        .service(web::resource("/allgrades/").route(web::get().to(list_grades)))
        .service(web::resource("/grade/{id}").route(web::put().to(update_grade)))
        .service(web::resource("/del_grade/{id}").route(web::delete().to(delete_grade)))
        .service(
            // 年级总览：年级信息及其学生与教师
            web::resource("/student_with_teacher/{grade_id}")
                .route(web::get().to(get_grade_overview)),
        );
}
