use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::NotificationService;
use crate::services::failure_response;

pub async fn list_notifications(
    service: &NotificationService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_notifications().await {
        Ok(notifications) => Ok(HttpResponse::Ok().json(notifications)),
        Err(e) => Ok(failure_response("Failed to list notifications", e)),
    }
}
