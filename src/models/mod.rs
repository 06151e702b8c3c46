//! 数据模型定义
//!
//! 每个领域按 entities（业务实体）、requests（请求体/查询参数）、
//! responses（响应体）划分。

pub mod common;
pub mod grades;
pub mod notifications;
pub mod students;
pub mod teachers;

pub use common::*;
