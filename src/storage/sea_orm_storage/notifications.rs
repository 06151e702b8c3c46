//! 通知存储操作

use super::SeaOrmStorage;
use crate::entity::notifications::{ActiveModel, Column, Entity as Notifications};
use crate::errors::{Result, SchoolError};
use crate::models::notifications::{entities::Notification, requests::CreateNotificationRequest};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ConnectionTrait, DbBackend, EntityTrait, QueryOrder,
    Set,
};

/// 显式写入 id 后需要同步的自增序列
///
/// PostgreSQL 的序列不会因显式 id 前移，之后由数据库分配的 id 会与之冲突；
/// SQLite 与 MySQL 的自增值会自动跟随最大 id。
fn id_sequence_resync_sql(backend: DbBackend) -> Option<&'static str> {
    match backend {
        DbBackend::Postgres => Some(
            "SELECT setval(pg_get_serial_sequence('notifications', 'id'), \
             (SELECT MAX(id) FROM notifications))",
        ),
        _ => None,
    }
}

impl SeaOrmStorage {
    /// 写入一条通知
    ///
    /// 每次调用都是一次独立提交，群发时逐条调用，
    /// 中途失败不会回滚已经写入的记录。
    pub async fn create_notification_impl(
        &self,
        req: CreateNotificationRequest,
    ) -> Result<Notification> {
        let explicit_id = req.id.is_some();
        let model = ActiveModel {
            id: req.id.map_or(NotSet, Set),
            content: Set(req.content),
            recipient_type: Set(req.recipient_type.to_string()),
            recipient_id: Set(req.recipient_id),
            event_type: Set(req.event_type.map(|t| t.to_string())),
            event_details: Set(req.event_details),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("创建通知失败: {e}")))?;

        if explicit_id
            && let Some(sql) = id_sequence_resync_sql(self.db.get_database_backend())
        {
            self.db
                .execute_unprepared(sql)
                .await
                .map_err(|e| SchoolError::database_operation(format!("同步通知序列失败: {e}")))?;
        }

        self.get_notification_by_id_impl(result.id)
            .await?
            .ok_or_else(|| SchoolError::database_operation("创建通知后读取失败"))
    }

    /// 通过 ID 获取通知
    pub async fn get_notification_by_id_impl(
        &self,
        notification_id: i64,
    ) -> Result<Option<Notification>> {
        let result = Notifications::find_by_id(notification_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询通知失败: {e}")))?;

        result.map(|m| m.into_notification()).transpose()
    }

    /// 列出全部通知
    pub async fn list_notifications_impl(&self) -> Result<Vec<Notification>> {
        let notifications = Notifications::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询通知列表失败: {e}")))?;

        notifications
            .into_iter()
            .map(|m| m.into_notification())
            .collect()
    }

    /// 删除通知
    pub async fn delete_notification_impl(&self, notification_id: i64) -> Result<bool> {
        let result = Notifications::delete_by_id(notification_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("删除通知失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_postgres_needs_sequence_resync() {
        let sql = id_sequence_resync_sql(DbBackend::Postgres).expect("postgres resync");
        assert!(sql.contains("setval"));
        assert!(sql.contains("MAX(id)"));
        assert!(id_sequence_resync_sql(DbBackend::Sqlite).is_none());
        assert!(id_sequence_resync_sql(DbBackend::MySql).is_none());
    }
}
