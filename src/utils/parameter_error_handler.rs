use actix_web::{
    Error, HttpRequest, HttpResponse,
    error::{InternalError, JsonPayloadError, QueryPayloadError},
};
use tracing::debug;

use crate::models::ErrorResponse;

/// JSON 请求体解析失败时返回 400 与错误详情
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    let detail = format!("Invalid request body: {err}");
    debug!("{} {} -> {}", req.method(), req.path(), detail);
    let response = HttpResponse::BadRequest().json(ErrorResponse::new(detail));
    InternalError::from_response(err, response).into()
}

/// 查询参数解析失败时返回 400 与错误详情
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    let detail = format!("Invalid query parameters: {err}");
    debug!("{} {} -> {}", req.method(), req.path(), detail);
    let response = HttpResponse::BadRequest().json(ErrorResponse::new(detail));
    InternalError::from_response(err, response).into()
}
