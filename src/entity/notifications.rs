//! 通知实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "notifications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub recipient_type: String,
    // 仅按 recipient_type 解释，不是外键
    pub recipient_id: i64,
    pub event_type: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub event_details: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
//
// 无法识别的 recipient_type / event_type 视为损坏数据，返回序列化错误而不是猜测默认值
impl Model {
    pub fn into_notification(
        self,
    ) -> crate::errors::Result<crate::models::notifications::entities::Notification> {
        use crate::errors::SchoolError;
        use crate::models::notifications::entities::{EventType, Notification, RecipientType};

        let recipient_type = self.recipient_type.parse::<RecipientType>().map_err(|e| {
            SchoolError::serialization(format!("通知 {} 数据损坏: {e}", self.id))
        })?;
        let event_type = self
            .event_type
            .as_deref()
            .map(str::parse::<EventType>)
            .transpose()
            .map_err(|e| SchoolError::serialization(format!("通知 {} 数据损坏: {e}", self.id)))?;

        Ok(Notification {
            id: self.id,
            content: self.content,
            recipient_type,
            recipient_id: self.recipient_id,
            event_type,
            event_details: self.event_details,
        })
    }
}
