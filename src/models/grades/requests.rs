use serde::Deserialize;
use ts_rs::TS;

// 年级创建请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "grade.ts")]
pub struct CreateGradeRequest {
    pub id: i64,
    #[serde(rename = "gradeName")]
    pub grade_name: String,
}

// 年级更新请求，字段缺省则保持不变
#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "grade.ts")]
pub struct UpdateGradeRequest {
    #[serde(rename = "gradeName", default)]
    pub grade_name: Option<String>,
}
