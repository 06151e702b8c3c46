use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 年级实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "grade.ts")]
pub struct Grade {
    pub id: i64,
    #[serde(rename = "gradeName")]
    pub grade_name: String,
}
