//! 教师存储操作

use super::SeaOrmStorage;
use crate::entity::teachers::{ActiveModel, Column, Entity as Teachers};
use crate::errors::{Result, SchoolError};
use crate::models::teachers::{entities::Teacher, requests::UpdateTeacherRequest};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建教师
    pub async fn create_teacher_impl(&self, teacher: Teacher) -> Result<Teacher> {
        let model = ActiveModel {
            id: Set(teacher.id),
            name: Set(teacher.name),
            grade_id: Set(teacher.grade_id),
            qualification: Set(teacher.qualification),
            email: Set(teacher.email),
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("创建教师失败: {e}")))?;

        // 写入后重新读取，返回数据库中的规范值（含规范化后的学历）
        self.get_teacher_by_id_impl(teacher.id)
            .await?
            .ok_or_else(|| SchoolError::database_operation("创建教师后读取失败"))
    }

    /// 通过 ID 获取教师
    pub async fn get_teacher_by_id_impl(&self, teacher_id: i64) -> Result<Option<Teacher>> {
        let result = Teachers::find_by_id(teacher_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_teacher()))
    }

    /// 通过邮箱获取教师
    pub async fn get_teacher_by_email_impl(&self, email: &str) -> Result<Option<Teacher>> {
        let result = Teachers::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_teacher()))
    }

    /// 列出全部教师
    pub async fn list_teachers_impl(&self) -> Result<Vec<Teacher>> {
        let teachers = Teachers::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询教师列表失败: {e}")))?;

        Ok(teachers.into_iter().map(|m| m.into_teacher()).collect())
    }

    /// 列出某年级的教师
    pub async fn list_teachers_by_grade_impl(&self, grade_id: i64) -> Result<Vec<Teacher>> {
        let teachers = Teachers::find()
            .filter(Column::GradeId.eq(grade_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询年级教师失败: {e}")))?;

        Ok(teachers.into_iter().map(|m| m.into_teacher()).collect())
    }

    /// 统计某年级的教师数量
    pub async fn count_teachers_by_grade_impl(&self, grade_id: i64) -> Result<i64> {
        let count = Teachers::find()
            .filter(Column::GradeId.eq(grade_id))
            .count(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("统计年级教师数量失败: {e}")))?;

        Ok(count as i64)
    }

    /// 更新教师（仅应用出现的字段）
    pub async fn update_teacher_impl(
        &self,
        teacher_id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        // 先检查教师是否存在
        let existing = Teachers::find_by_id(teacher_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询教师失败: {e}")))?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(grade_id) = update.grade_id {
            model.grade_id = Set(grade_id);
        }

        if let Some(qualification) = update.qualification {
            model.qualification = Set(qualification);
        }

        if let Some(email) = update.email {
            model.email = Set(email);
        }

        if model.is_changed() {
            model
                .update(&self.db)
                .await
                .map_err(|e| SchoolError::database_operation(format!("更新教师失败: {e}")))?;
        }

        self.get_teacher_by_id_impl(teacher_id).await
    }

    /// 删除教师
    pub async fn delete_teacher_impl(&self, teacher_id: i64) -> Result<bool> {
        let result = Teachers::delete_by_id(teacher_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("删除教师失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
