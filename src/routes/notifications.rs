use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::notifications::requests::{
    BroadcastNotificationRequest, SendNotificationRequest,
};
use crate::services::NotificationService;
use crate::utils::{SafeGradeIdI64, SafeIDI64};

// 懒加载的全局 NOTIFICATION_SERVICE 实例
static NOTIFICATION_SERVICE: Lazy<NotificationService> =
    Lazy::new(NotificationService::new_lazy);

// HTTP处理程序
pub async fn send_notification(
    req: HttpRequest,
    notification_data: web::Json<SendNotificationRequest>,
) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE
        .send_notification(&req, notification_data.into_inner())
        .await
}

pub async fn broadcast_to_grade(
    req: HttpRequest,
    grade_id: SafeGradeIdI64,
    broadcast_data: web::Json<BroadcastNotificationRequest>,
) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE
        .broadcast_to_grade(&req, grade_id.0, broadcast_data.into_inner())
        .await
}

pub async fn get_notification(
    req: HttpRequest,
    notification_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE
        .get_notification(&req, notification_id.0)
        .await
}

pub async fn list_notifications(req: HttpRequest) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE.list_notifications(&req).await
}

pub async fn delete_notification(
    req: HttpRequest,
    notification_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE
        .delete_notification(&req, notification_id.0)
        .await
}

// 配置路由
pub fn configure_notifications_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/send_event_notification").route(web::post().to(send_notification)),
    )
    .service(
        // 年级群发，每名学生一条通知
        web::resource("/send_notification/{grade_id}")
            .route(web::post().to(broadcast_to_grade)),
    )
    .service(
        web::resource("/received_event_notification/{id}")
            .route(web::get().to(get_notification)),
    )
    .service(web::resource("/allnotifications/").route(web::get().to(list_notifications)))
    .service(
        web::resource("/del_notification/{id}").route(web::delete().to(delete_notification)),
    );
}
