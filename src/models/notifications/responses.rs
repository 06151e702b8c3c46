use serde::Serialize;
use ts_rs::TS;

/// 年级群发结果
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "notification.ts")]
pub struct BroadcastResponse {
    pub message: String,
    pub count: i64,
}
