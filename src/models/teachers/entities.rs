use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 教师实体，qualification 始终为规范写法（见 Qualification）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "teacher.ts")]
pub struct Teacher {
    pub id: i64,
    pub name: String,
    pub qualification: String,
    pub grade_id: i64,
    pub email: String,
}

// 教师学历
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Qualification {
    BscBed, // BSc B.ed
    MscMed, // MSc M.ed
    Bsc,    // BSc
    Msc,    // MSc
}

impl Qualification {
    // 查找键（小写） -> 学历
    const LOOKUP: [(&'static str, Qualification); 4] = [
        ("bsc b.ed", Qualification::BscBed),
        ("msc m.ed", Qualification::MscMed),
        ("bsc", Qualification::Bsc),
        ("msc", Qualification::Msc),
    ];

    /// 规范展示写法
    pub fn as_str(&self) -> &'static str {
        match self {
            Qualification::BscBed => "BSc B.ed",
            Qualification::MscMed => "MSc M.ed",
            Qualification::Bsc => "BSc",
            Qualification::Msc => "MSc",
        }
    }

    /// 大小写不敏感地解析用户输入
    pub fn from_input(input: &str) -> Option<Self> {
        let key = input.trim().to_lowercase();
        Self::LOOKUP
            .iter()
            .find(|(lookup, _)| *lookup == key)
            .map(|(_, qualification)| *qualification)
    }

    pub fn supported() -> String {
        Self::LOOKUP
            .iter()
            .map(|(_, qualification)| qualification.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for Qualification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
