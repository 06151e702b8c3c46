use std::sync::Arc;

use crate::models::{
    grades::{entities::Grade, requests::UpdateGradeRequest},
    notifications::{entities::Notification, requests::CreateNotificationRequest},
    students::{entities::Student, requests::UpdateStudentRequest},
    teachers::{entities::Teacher, requests::UpdateTeacherRequest},
};

use crate::errors::Result;

pub mod sea_orm_storage;

/// 存储层接口
///
/// 写入方法接收的都是已经过校验与规范化的数据；
/// 创建与更新在写入后会重新读取，返回数据库中的规范值。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 年级管理方法
    // 创建年级
    async fn create_grade(&self, grade: Grade) -> Result<Grade>;
    // 通过ID获取年级信息
    async fn get_grade_by_id(&self, id: i64) -> Result<Option<Grade>>;
    // 通过名称获取年级信息
    async fn get_grade_by_name(&self, grade_name: &str) -> Result<Option<Grade>>;
    // 列出全部年级
    async fn list_grades(&self) -> Result<Vec<Grade>>;
    // 更新年级信息
    async fn update_grade(&self, id: i64, update: UpdateGradeRequest) -> Result<Option<Grade>>;
    // 删除年级（不级联）
    async fn delete_grade(&self, id: i64) -> Result<bool>;

    /// 学生管理方法
    // 创建学生
    async fn create_student(&self, student: Student) -> Result<Student>;
    // 通过ID获取学生信息
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 通过邮箱获取学生信息
    async fn get_student_by_email(&self, email: &str) -> Result<Option<Student>>;
    // 列出全部学生
    async fn list_students(&self) -> Result<Vec<Student>>;
    // 按偏移分页列出学生
    async fn list_students_with_offset(&self, skip: u64, limit: u64) -> Result<Vec<Student>>;
    // 列出某年级的学生
    async fn list_students_by_grade(&self, grade_id: i64) -> Result<Vec<Student>>;
    // 统计某年级的学生数量
    async fn count_students_by_grade(&self, grade_id: i64) -> Result<i64>;
    // 更新学生信息
    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>>;
    // 删除学生
    async fn delete_student(&self, id: i64) -> Result<bool>;

    /// 教师管理方法
    // 创建教师
    async fn create_teacher(&self, teacher: Teacher) -> Result<Teacher>;
    // 通过ID获取教师信息
    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>>;
    // 通过邮箱获取教师信息
    async fn get_teacher_by_email(&self, email: &str) -> Result<Option<Teacher>>;
    // 列出全部教师
    async fn list_teachers(&self) -> Result<Vec<Teacher>>;
    // 列出某年级的教师
    async fn list_teachers_by_grade(&self, grade_id: i64) -> Result<Vec<Teacher>>;
    // 统计某年级的教师数量
    async fn count_teachers_by_grade(&self, grade_id: i64) -> Result<i64>;
    // 更新教师信息
    async fn update_teacher(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>>;
    // 删除教师
    async fn delete_teacher(&self, id: i64) -> Result<bool>;

    /// 通知管理方法
    // 写入一条通知（独立提交）
    async fn create_notification(&self, req: CreateNotificationRequest) -> Result<Notification>;
    // 通过ID获取通知
    async fn get_notification_by_id(&self, id: i64) -> Result<Option<Notification>>;
    // 列出全部通知
    async fn list_notifications(&self) -> Result<Vec<Notification>>;
    // 删除通知
    async fn delete_notification(&self, id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
