//! 年级存储操作

use super::SeaOrmStorage;
use crate::entity::grades::{ActiveModel, Column, Entity as Grades};
use crate::errors::{Result, SchoolError};
use crate::models::grades::{entities::Grade, requests::UpdateGradeRequest};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建年级
    pub async fn create_grade_impl(&self, grade: Grade) -> Result<Grade> {
        let model = ActiveModel {
            id: Set(grade.id),
            grade_name: Set(grade.grade_name),
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("创建年级失败: {e}")))?;

        // 写入后重新读取
        self.get_grade_by_id_impl(grade.id)
            .await?
            .ok_or_else(|| SchoolError::database_operation("创建年级后读取失败"))
    }

    /// 通过 ID 获取年级
    pub async fn get_grade_by_id_impl(&self, grade_id: i64) -> Result<Option<Grade>> {
        let result = Grades::find_by_id(grade_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询年级失败: {e}")))?;

        Ok(result.map(|m| m.into_grade()))
    }

    /// 通过名称获取年级
    pub async fn get_grade_by_name_impl(&self, grade_name: &str) -> Result<Option<Grade>> {
        let result = Grades::find()
            .filter(Column::GradeName.eq(grade_name))
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询年级失败: {e}")))?;

        Ok(result.map(|m| m.into_grade()))
    }

    /// 列出全部年级
    pub async fn list_grades_impl(&self) -> Result<Vec<Grade>> {
        let grades = Grades::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询年级列表失败: {e}")))?;

        Ok(grades.into_iter().map(|m| m.into_grade()).collect())
    }

    /// 更新年级
    pub async fn update_grade_impl(
        &self,
        grade_id: i64,
        update: UpdateGradeRequest,
    ) -> Result<Option<Grade>> {
        // 先检查年级是否存在
        let existing = Grades::find_by_id(grade_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询年级失败: {e}")))?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();

        if let Some(grade_name) = update.grade_name {
            model.grade_name = Set(grade_name);
        }

        if model.is_changed() {
            model
                .update(&self.db)
                .await
                .map_err(|e| SchoolError::database_operation(format!("更新年级失败: {e}")))?;
        }

        self.get_grade_by_id_impl(grade_id).await
    }

    /// 删除年级
    pub async fn delete_grade_impl(&self, grade_id: i64) -> Result<bool> {
        let result = Grades::delete_by_id(grade_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("删除年级失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
