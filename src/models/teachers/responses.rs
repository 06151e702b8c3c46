use serde::Serialize;
use ts_rs::TS;

use super::entities::Teacher;

// 教师详情响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "teacher.ts")]
pub struct TeacherResponse {
    #[serde(rename = "Teacher information")]
    pub teacher: Teacher,
}

// 教师更新响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "teacher.ts")]
pub struct TeacherUpdatedResponse {
    pub message: String,
    #[serde(rename = "Teacher information")]
    pub teacher: Teacher,
}
