pub mod grades;
pub mod notifications;
pub mod students;
pub mod teachers;
pub mod validation;

pub use grades::GradeService;
pub use notifications::NotificationService;
pub use students::StudentService;
pub use teachers::TeacherService;

use actix_web::HttpResponse;
use tracing::{error, warn};

use crate::errors::SchoolError;
use crate::models::error_response;

/// 记录日志并把错误转换为响应
///
/// 客户端错误（校验失败、资源不存在）记为 warn，其余记为 error。
pub(crate) fn failure_response(context: &str, err: SchoolError) -> HttpResponse {
    if err.is_client_error() {
        warn!("{}: {}", context, err);
    } else {
        error!("{}: {}", context, err);
    }
    error_response(&err)
}
