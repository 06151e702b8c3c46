//! 路径参数提取器
//!
//! 将路径中的 ID 解析为 i64，解析失败时直接返回 400 响应，
//! 处理程序拿到的一定是合法整数。

use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError};
use std::future::{Ready, ready};

use crate::models::ErrorResponse;

macro_rules! define_safe_i64_extractor {
    ($($name:ident => $param:literal),* $(,)?) => {
        $(
            pub struct $name(pub i64);

            impl FromRequest for $name {
                type Error = actix_web::Error;
                type Future = Ready<Result<Self, Self::Error>>;

                fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
                    ready(parse_path_i64(req, $param).map($name))
                }
            }
        )*
    };
}

define_safe_i64_extractor! {
    SafeIDI64 => "id",
    SafeGradeIdI64 => "grade_id",
}

fn parse_path_i64(req: &HttpRequest, param: &str) -> Result<i64, actix_web::Error> {
    let raw = req.match_info().get(param).unwrap_or_default();
    raw.parse::<i64>().map_err(|_| {
        let detail = format!("Invalid path parameter '{param}': '{raw}' is not an integer");
        let response = HttpResponse::BadRequest().json(ErrorResponse::new(detail.clone()));
        InternalError::from_response(detail, response).into()
    })
}
