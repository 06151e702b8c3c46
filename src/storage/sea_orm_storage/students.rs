//! 学生存储操作

use super::SeaOrmStorage;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{Result, SchoolError};
use crate::models::students::{entities::Student, requests::UpdateStudentRequest};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建学生
    pub async fn create_student_impl(&self, student: Student) -> Result<Student> {
        let model = ActiveModel {
            id: Set(student.id),
            name: Set(student.name),
            grade_id: Set(student.grade_id),
            age: Set(student.age),
            email: Set(student.email),
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("创建学生失败: {e}")))?;

        // 写入后重新读取，返回数据库中的规范值
        self.get_student_by_id_impl(student.id)
            .await?
            .ok_or_else(|| SchoolError::database_operation("创建学生后读取失败"))
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, student_id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(student_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 通过邮箱获取学生
    pub async fn get_student_by_email_impl(&self, email: &str) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 列出全部学生
    pub async fn list_students_impl(&self) -> Result<Vec<Student>> {
        let students = Students::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(students.into_iter().map(|m| m.into_student()).collect())
    }

    /// 按偏移分页列出学生
    pub async fn list_students_with_offset_impl(
        &self,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Student>> {
        let students = Students::find()
            .order_by_asc(Column::Id)
            .offset(skip)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("分页查询学生失败: {e}")))?;

        Ok(students.into_iter().map(|m| m.into_student()).collect())
    }

    /// 列出某年级的学生
    pub async fn list_students_by_grade_impl(&self, grade_id: i64) -> Result<Vec<Student>> {
        let students = Students::find()
            .filter(Column::GradeId.eq(grade_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询年级学生失败: {e}")))?;

        Ok(students.into_iter().map(|m| m.into_student()).collect())
    }

    /// 统计某年级的学生数量
    pub async fn count_students_by_grade_impl(&self, grade_id: i64) -> Result<i64> {
        let count = Students::find()
            .filter(Column::GradeId.eq(grade_id))
            .count(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("统计年级学生数量失败: {e}")))?;

        Ok(count as i64)
    }

    /// 更新学生（仅应用出现的字段）
    pub async fn update_student_impl(
        &self,
        student_id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        // 先检查学生是否存在
        let existing = Students::find_by_id(student_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询学生失败: {e}")))?;

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

        if let Some(age) = update.age {
            model.age = Set(age);
        }

        if let Some(email) = update.email {
            model.email = Set(email);
        }

        if model.is_changed() {
            model
                .update(&self.db)
                .await
                .map_err(|e| SchoolError::database_operation(format!("更新学生失败: {e}")))?;
        }

        self.get_student_by_id_impl(student_id).await
    }

    /// 删除学生
    pub async fn delete_student_impl(&self, student_id: i64) -> Result<bool> {
        let result = Students::delete_by_id(student_id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("删除学生失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
