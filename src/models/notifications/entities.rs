use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 未识别事件类型时使用的通知内容
pub const FALLBACK_CONTENT: &str = "New notification";

// 通知接收者类型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "notification.ts")]
pub enum RecipientType {
    Student,
    Teacher,
}

impl RecipientType {
    pub const STUDENT: &'static str = "student";
    pub const TEACHER: &'static str = "teacher";
}

impl std::fmt::Display for RecipientType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecipientType::Student => write!(f, "{}", RecipientType::STUDENT),
            RecipientType::Teacher => write!(f, "{}", RecipientType::TEACHER),
        }
    }
}

impl std::str::FromStr for RecipientType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            RecipientType::STUDENT => Ok(RecipientType::Student),
            RecipientType::TEACHER => Ok(RecipientType::Teacher),
            _ => Err(format!(
                "Invalid recipient_type: '{s}'. Supported types: student, teacher"
            )),
        }
    }
}

// 事件类型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "notification.ts")]
pub enum EventType {
    Holiday, // 假期
    Exam,    // 考试
    Event,   // 活动
}

impl EventType {
    /// 按事件模板生成通知内容
    pub fn render(&self, details: &str) -> String {
        match self {
            EventType::Holiday => format!("Upcoming holiday: {details}"),
            EventType::Exam => format!("Upcoming exam : {details}"),
            EventType::Event => format!("Event: {details}"),
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventType::Holiday => write!(f, "holiday"),
            EventType::Exam => write!(f, "exam"),
            EventType::Event => write!(f, "event"),
        }
    }
}

impl std::str::FromStr for EventType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "holiday" => Ok(EventType::Holiday),
            "exam" => Ok(EventType::Exam),
            "event" => Ok(EventType::Event),
            _ => Err(format!(
                "Invalid event_type: '{s}'. Supported types: holiday, exam, event"
            )),
        }
    }
}

// 通知实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "notification.ts")]
pub struct Notification {
    pub id: i64,
    pub content: String,
    pub recipient_type: RecipientType,
    pub recipient_id: i64,
    pub event_type: Option<EventType>,
    pub event_details: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_templates() {
        assert_eq!(
            EventType::Holiday.render("Diwali"),
            "Upcoming holiday: Diwali"
        );
        assert_eq!(EventType::Exam.render("Finals"), "Upcoming exam : Finals");
        assert_eq!(EventType::Event.render("Sports day"), "Event: Sports day");
    }

    #[test]
    fn test_event_type_parsing_is_exact() {
        assert_eq!("exam".parse::<EventType>(), Ok(EventType::Exam));
        assert!("Exam".parse::<EventType>().is_err());
        assert!("meeting".parse::<EventType>().is_err());
    }

    #[test]
    fn test_recipient_type_round_trip() {
        assert_eq!(
            "teacher".parse::<RecipientType>(),
            Ok(RecipientType::Teacher)
        );
        assert_eq!(RecipientType::Student.to_string(), "student");
        assert!("parent".parse::<RecipientType>().is_err());
    }
}
