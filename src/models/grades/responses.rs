use serde::Serialize;
use ts_rs::TS;

use super::entities::Grade;
use crate::models::{students::entities::Student, teachers::entities::Teacher};

// 年级详情响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "grade.ts")]
pub struct GradeResponse {
    #[serde(rename = "Grade information")]
    pub grade: Grade,
}

// 年级更新响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "grade.ts")]
pub struct GradeUpdatedResponse {
    pub message: String,
    #[serde(rename = "Grade information")]
    pub grade: Grade,
}

// 年级总览：年级信息及其全部学生与教师
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "grade.ts")]
pub struct GradeOverviewResponse {
    pub grade_id: i64,
    pub grade_name: String,
    pub students: Vec<Student>,
    pub teachers: Vec<Teacher>,
}

// 年级人数统计响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "grade.ts")]
pub struct GradeCountResponse {
    pub grade_id: i64,
    pub count: i64,
}
