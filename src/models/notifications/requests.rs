use serde::Deserialize;
use ts_rs::TS;

use super::entities::{EventType, RecipientType};

// 单个接收者通知请求
//
// content 会被事件模板覆盖，仅为兼容客户端而接收。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "notification.ts")]
pub struct SendNotificationRequest {
    pub id: i64,
    #[serde(default)]
    pub content: Option<String>,
    pub recipient_type: String,
    pub recipient_id: i64,
    #[serde(default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub event_details: Option<String>,
}

// 年级群发通知请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "notification.ts")]
pub struct BroadcastNotificationRequest {
    #[serde(default)]
    pub content: Option<String>,
    pub event_type: String,
    #[serde(default)]
    pub event_details: Option<String>,
}

// 写入一条通知（用于存储层）
//
// id 为空时由数据库分配
#[derive(Debug, Clone)]
pub struct CreateNotificationRequest {
    pub id: Option<i64>,
    pub content: String,
    pub recipient_type: RecipientType,
    pub recipient_id: i64,
    pub event_type: Option<EventType>,
    pub event_details: Option<String>,
}
