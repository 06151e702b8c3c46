use actix_web::web;

use crate::utils::{json_error_handler, query_error_handler};

pub mod grades;

pub mod students;

pub mod teachers;

pub mod notifications;

pub use grades::configure_grades_routes;
pub use notifications::configure_notifications_routes;
pub use students::configure_students_routes;
pub use teachers::configure_teachers_routes;

/// 注册全部接口与请求体解析错误处理
///
/// 服务器与集成测试共用，保证两边的路由表一致。
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .configure(configure_grades_routes)
        .configure(configure_students_routes)
        .configure(configure_teachers_routes)
        .configure(configure_notifications_routes);
}
