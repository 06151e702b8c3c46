use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{debug, info};

use super::NotificationService;
use super::content::compose_content;
use crate::models::MessageResponse;
use crate::models::notifications::requests::{CreateNotificationRequest, SendNotificationRequest};
use crate::services::failure_response;
use crate::services::validation::check_new_notification;

pub async fn send_notification(
    service: &NotificationService,
    request: &HttpRequest,
    notification_data: SendNotificationRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let recipient_type = match check_new_notification(&storage, &notification_data).await {
        Ok(recipient_type) => recipient_type,
        Err(e) => return Ok(failure_response("Notification rejected", e)),
    };

    if notification_data.content.is_some() {
        debug!(
            "Notification {}: client content replaced by event template",
            notification_data.id
        );
    }

    let (content, event_type) = compose_content(
        notification_data.event_type.as_deref(),
        notification_data.event_details.as_deref(),
    );

    let row = CreateNotificationRequest {
        id: Some(notification_data.id),
        content,
        recipient_type,
        recipient_id: notification_data.recipient_id,
        event_type,
        event_details: notification_data.event_details,
    };

    match storage.create_notification(row).await {
        Ok(notification) => {
            info!(
                "Notification {} sent to {} {}",
                notification.id, notification.recipient_type, notification.recipient_id
            );
            Ok(HttpResponse::Ok().json(MessageResponse::new("Notification sent successfully")))
        }
        Err(e) => Ok(failure_response("Notification sending failed", e)),
    }
}
