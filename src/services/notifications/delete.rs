use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::NotificationService;
use crate::errors::SchoolError;
use crate::models::MessageResponse;
use crate::services::failure_response;

pub async fn delete_notification(
    service: &NotificationService,
    request: &HttpRequest,
    notification_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_notification(notification_id).await {
        Ok(true) => {
            info!("Notification {} deleted", notification_id);
            Ok(HttpResponse::Ok().json(MessageResponse::new(format!(
                "notification of id:{notification_id} deleted successfully"
            ))))
        }
        Ok(false) => Ok(failure_response(
            "Notification deletion",
            SchoolError::not_found("Notification not found"),
        )),
        Err(e) => Ok(failure_response("Notification deletion failed", e)),
    }
}
