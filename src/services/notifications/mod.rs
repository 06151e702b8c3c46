pub mod broadcast;
pub mod content;
pub mod delete;
pub mod get;
pub mod list;
pub mod send;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::notifications::requests::{
    BroadcastNotificationRequest, SendNotificationRequest,
};
use crate::storage::Storage;

pub struct NotificationService {
    storage: Option<Arc<dyn Storage>>,
}

impl NotificationService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 向单个学生或教师发送通知
    pub async fn send_notification(
        &self,
        request: &HttpRequest,
        notification_data: SendNotificationRequest,
    ) -> ActixResult<HttpResponse> {
        send::send_notification(self, request, notification_data).await
    }

    // 向某年级全部学生群发通知
    pub async fn broadcast_to_grade(
        &self,
        request: &HttpRequest,
        grade_id: i64,
        broadcast_data: BroadcastNotificationRequest,
    ) -> ActixResult<HttpResponse> {
        broadcast::broadcast_to_grade(self, request, grade_id, broadcast_data).await
    }

    pub async fn get_notification(
        &self,
        request: &HttpRequest,
        notification_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_notification(self, request, notification_id).await
    }

    pub async fn list_notifications(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_notifications(self, request).await
    }

    pub async fn delete_notification(
        &self,
        request: &HttpRequest,
        notification_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_notification(self, request, notification_id).await
    }
}
