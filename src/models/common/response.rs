use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::SchoolError;

// 统一的错误响应结构
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "api.ts")]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

// 仅包含提示信息的响应（删除、发送通知等）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "api.ts")]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// 将业务错误转换为 HTTP 响应
///
/// - `Validation` -> 400
/// - `NotFound` -> 404
/// - 其余（数据库等）-> 500
pub fn error_response(err: &SchoolError) -> HttpResponse {
    let body = ErrorResponse::new(err.message());
    match err {
        SchoolError::Validation(_) => HttpResponse::BadRequest().json(body),
        SchoolError::NotFound(_) => HttpResponse::NotFound().json(body),
        _ => HttpResponse::InternalServerError().json(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_error_response_status() {
        assert_eq!(
            error_response(&SchoolError::validation("bad")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            error_response(&SchoolError::not_found("missing")).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            error_response(&SchoolError::database_operation("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
