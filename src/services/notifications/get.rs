use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::NotificationService;
use crate::errors::SchoolError;
use crate::services::failure_response;

pub async fn get_notification(
    service: &NotificationService,
    request: &HttpRequest,
    notification_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_notification_by_id(notification_id).await {
        Ok(Some(notification)) => Ok(HttpResponse::Ok().json(notification)),
        Ok(None) => Ok(failure_response(
            "Notification lookup",
            SchoolError::not_found("Notification not found"),
        )),
        Err(e) => Ok(failure_response("Failed to get notification", e)),
    }
}
