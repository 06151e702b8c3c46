//! 写入前校验
//!
//! 检查按固定顺序执行，第一个失败的检查决定返回的错误：
//! 标识符合法 → 标识符唯一 → 姓名 → 年级是否提供 → 年级是否存在
//! → 领域规则（年龄 / 学历） → 邮箱格式 → 邮箱唯一。
//!
//! 更新时只检查请求中出现的字段，标识符来自路径且不可修改。
//! 本模块只做只读查询，不产生任何写入。

use std::future::Future;
use std::sync::Arc;

use crate::errors::{Result, SchoolError};
use crate::models::{
    grades::{
        entities::Grade,
        requests::{CreateGradeRequest, UpdateGradeRequest},
    },
    notifications::{entities::RecipientType, requests::SendNotificationRequest},
    students::{
        entities::Student,
        requests::{CreateStudentRequest, UpdateStudentRequest},
    },
    teachers::{
        entities::Teacher,
        requests::{CreateTeacherRequest, UpdateTeacherRequest},
    },
};
use crate::storage::Storage;
use crate::utils::validate::{
    normalize_qualification, validate_age, validate_email, validate_grade_name,
    validate_person_name, validate_positive_id,
};

/// 校验新年级
pub async fn check_new_grade(storage: &Arc<dyn Storage>, req: CreateGradeRequest) -> Result<Grade> {
    validate_positive_id(req.id).map_err(SchoolError::validation)?;

    if storage.get_grade_by_id(req.id).await?.is_some() {
        return Err(SchoolError::validation(format!(
            "Grade with id {} already exists",
            req.id
        )));
    }

    let grade_name = validate_grade_name(&req.grade_name).map_err(SchoolError::validation)?;

    if storage.get_grade_by_name(&grade_name).await?.is_some() {
        return Err(SchoolError::validation(format!(
            "Grade with name '{grade_name}' already exists"
        )));
    }

    Ok(Grade {
        id: req.id,
        grade_name,
    })
}

/// 校验年级更新
pub async fn check_grade_patch(
    storage: &Arc<dyn Storage>,
    grade_id: i64,
    mut patch: UpdateGradeRequest,
) -> Result<UpdateGradeRequest> {
    if let Some(grade_name) = patch.grade_name.take() {
        let grade_name = validate_grade_name(&grade_name).map_err(SchoolError::validation)?;

        if let Some(other) = storage.get_grade_by_name(&grade_name).await?
            && other.id != grade_id
        {
            return Err(SchoolError::validation(format!(
                "Grade with name '{grade_name}' already exists"
            )));
        }

        patch.grade_name = Some(grade_name);
    }

    Ok(patch)
}

/// 校验新学生，返回规范化后的学生数据
pub async fn check_new_student(
    storage: &Arc<dyn Storage>,
    req: CreateStudentRequest,
) -> Result<Student> {
    validate_positive_id(req.id).map_err(SchoolError::validation)?;

    if storage.get_student_by_id(req.id).await?.is_some() {
        return Err(SchoolError::validation(format!(
            "Student with id {} already exists",
            req.id
        )));
    }

    let name = validate_person_name(&req.name).map_err(SchoolError::validation)?;
    let grade_id = ensure_grade_reference(storage, req.grade_id).await?;
    validate_age(req.age).map_err(SchoolError::validation)?;

    check_email(&req.email, None, async {
        Ok(storage.get_student_by_email(&req.email).await?.map(|s| s.id))
    })
    .await?;

    Ok(Student {
        id: req.id,
        name,
        grade_id,
        age: req.age,
        email: req.email,
    })
}

/// 校验学生更新（部分更新，仅检查出现的字段）
pub async fn check_student_patch(
    storage: &Arc<dyn Storage>,
    student_id: i64,
    mut patch: UpdateStudentRequest,
) -> Result<UpdateStudentRequest> {
    if let Some(name) = patch.name.take() {
        patch.name = Some(validate_person_name(&name).map_err(SchoolError::validation)?);
    }

    if patch.grade_id.is_some() {
        patch.grade_id = Some(ensure_grade_reference(storage, patch.grade_id).await?);
    }

    if let Some(age) = patch.age {
        validate_age(age).map_err(SchoolError::validation)?;
    }

    if let Some(email) = patch.email.as_deref() {
        check_email(email, Some(student_id), async {
            Ok(storage.get_student_by_email(email).await?.map(|s| s.id))
        })
        .await?;
    }

    Ok(patch)
}

/// 校验新教师，返回规范化后的教师数据
pub async fn check_new_teacher(
    storage: &Arc<dyn Storage>,
    req: CreateTeacherRequest,
) -> Result<Teacher> {
    validate_positive_id(req.id).map_err(SchoolError::validation)?;

    if storage.get_teacher_by_id(req.id).await?.is_some() {
        return Err(SchoolError::validation(format!(
            "Teacher with id {} already exists",
            req.id
        )));
    }

    let name = validate_person_name(&req.name).map_err(SchoolError::validation)?;
    let grade_id = ensure_grade_reference(storage, req.grade_id).await?;
    let qualification = normalize_qualification(&req.qualification)
        .map_err(SchoolError::validation)?
        .to_string();

    check_email(&req.email, None, async {
        Ok(storage.get_teacher_by_email(&req.email).await?.map(|t| t.id))
    })
    .await?;

    Ok(Teacher {
        id: req.id,
        name,
        qualification,
        grade_id,
        email: req.email,
    })
}

/// 校验教师更新
///
/// 请求结构中字段均为可选，但 name、grade_id、qualification 缺任意一个都会直接拒绝，
/// 沿用既有接口行为。
pub async fn check_teacher_patch(
    storage: &Arc<dyn Storage>,
    teacher_id: i64,
    mut patch: UpdateTeacherRequest,
) -> Result<UpdateTeacherRequest> {
    let (Some(name), Some(_), Some(qualification)) = (
        patch.name.take(),
        patch.grade_id,
        patch.qualification.take(),
    ) else {
        return Err(SchoolError::validation(
            "name, grade_id and qualification are required to update a teacher",
        ));
    };

    patch.name = Some(validate_person_name(&name).map_err(SchoolError::validation)?);
    patch.grade_id = Some(ensure_grade_reference(storage, patch.grade_id).await?);
    patch.qualification = Some(
        normalize_qualification(&qualification)
            .map_err(SchoolError::validation)?
            .to_string(),
    );

    if let Some(email) = patch.email.as_deref() {
        check_email(email, Some(teacher_id), async {
            Ok(storage.get_teacher_by_email(email).await?.map(|t| t.id))
        })
        .await?;
    }

    Ok(patch)
}

/// 校验单条通知请求，返回解析后的接收者类型
pub async fn check_new_notification(
    storage: &Arc<dyn Storage>,
    req: &SendNotificationRequest,
) -> Result<RecipientType> {
    validate_positive_id(req.id).map_err(SchoolError::validation)?;

    if storage.get_notification_by_id(req.id).await?.is_some() {
        return Err(SchoolError::validation(format!(
            "Notification with id {} already exists",
            req.id
        )));
    }

    req.recipient_type
        .parse::<RecipientType>()
        .map_err(SchoolError::validation)
}

/// 年级引用检查：必须提供（非空、非零）且在写入前存在
async fn ensure_grade_reference(storage: &Arc<dyn Storage>, grade_id: Option<i64>) -> Result<i64> {
    let grade_id = match grade_id {
        Some(id) if id != 0 => id,
        _ => return Err(SchoolError::validation("grade_id is required")),
    };

    if storage.get_grade_by_id(grade_id).await?.is_none() {
        return Err(SchoolError::validation(format!(
            "Grade with id {grade_id} does not exist"
        )));
    }

    Ok(grade_id)
}

/// 邮箱检查：先校验格式，格式合法时才执行 `owner_lookup` 查询占用者
///
/// `current_id` 为正在更新的记录，允许保留自己的邮箱。
async fn check_email<F>(email: &str, current_id: Option<i64>, owner_lookup: F) -> Result<()>
where
    F: Future<Output = Result<Option<i64>>>,
{
    validate_email(email).map_err(SchoolError::validation)?;

    match owner_lookup.await? {
        Some(owner) if Some(owner) != current_id => Err(SchoolError::validation(format!(
            "Email '{email}' is already registered"
        ))),
        _ => Ok(()),
    }
}
