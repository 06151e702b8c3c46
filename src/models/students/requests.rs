use serde::Deserialize;
use ts_rs::TS;

// 学生创建请求
//
// grade_id 允许为空以便由校验层给出明确的错误信息
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "student.ts")]
pub struct CreateStudentRequest {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub grade_id: Option<i64>,
    pub age: i32,
    pub email: String,
}

// 学生更新请求（部分更新），仅应用出现且非空的字段
#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "student.ts")]
pub struct UpdateStudentRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub grade_id: Option<i64>,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub email: Option<String>,
}
