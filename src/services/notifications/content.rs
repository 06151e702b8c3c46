use crate::models::notifications::entities::{EventType, FALLBACK_CONTENT};

/// 单个接收者通知的内容
///
/// 调用方传入的 content 一律被忽略。事件类型无法识别或缺失时使用固定内容，
/// 且返回的事件类型为 `None`，数据库中只保存已知的事件类型。
pub fn compose_content(
    event_type: Option<&str>,
    event_details: Option<&str>,
) -> (String, Option<EventType>) {
    match event_type.and_then(|t| t.parse::<EventType>().ok()) {
        Some(event_type) => (
            event_type.render(event_details.unwrap_or_default()),
            Some(event_type),
        ),
        None => (FALLBACK_CONTENT.to_string(), None),
    }
}
