use serde::Serialize;
use ts_rs::TS;

use super::entities::Student;

// 学生详情响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "student.ts")]
pub struct StudentResponse {
    #[serde(rename = "Student information")]
    pub student: Student,
}

// 学生更新响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "student.ts")]
pub struct StudentUpdatedResponse {
    pub message: String,
    #[serde(rename = "Student information")]
    pub student: Student,
}
