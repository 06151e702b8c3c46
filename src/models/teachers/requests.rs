use serde::Deserialize;
use ts_rs::TS;

// 教师创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "teacher.ts")]
pub struct CreateTeacherRequest {
    pub id: i64,
    pub name: String,
    pub qualification: String,
    #[serde(default)]
    pub grade_id: Option<i64>,
    pub email: String,
}

// 教师更新请求
//
// 字段均可选，但服务层要求 name、grade_id、qualification 同时出现才会应用更新。
#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "teacher.ts")]
pub struct UpdateTeacherRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub qualification: Option<String>,
    #[serde(default)]
    pub grade_id: Option<i64>,
    #[serde(default)]
    pub email: Option<String>,
}
