//! 路径参数提取器
//!
//! 对路径中的 ID 做解析与合法性校验，失败时直接返回统一的 400 响应，
//! 避免每个处理程序重复解析样板代码。

use actix_web::{HttpRequest, HttpResponse, dev::Payload, error::InternalError};
use std::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

/// 定义一个安全的 i64 路径参数提取器
///
/// 参数必须是正整数，否则返回 400。
#[macro_export]
macro_rules! define_safe_i64_extractor {
    ($name:ident, $param:literal) => {
        pub struct $name(pub i64);

        impl actix_web::FromRequest for $name {
            type Error = actix_web::Error;
            type Future = std::future::Ready<Result<Self, Self::Error>>;

            fn from_request(
                req: &actix_web::HttpRequest,
                _payload: &mut actix_web::dev::Payload,
            ) -> Self::Future {
                let parsed = req
                    .match_info()
                    .get($param)
                    .and_then(|raw| raw.parse::<i64>().ok())
                    .filter(|id| *id > 0);

                std::future::ready(match parsed {
                    Some(id) => Ok($name(id)),
                    None => Err($crate::utils::extractor::bad_path_parameter($param)),
                })
            }
        }
    };
}

/// 构造路径参数非法的 400 错误
pub fn bad_path_parameter(param: &str) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ApiResponse::<()>::error_empty(
        ErrorCode::BadRequest,
        format!("Invalid path parameter: {param}"),
    ));
    InternalError::from_response("invalid path parameter", response).into()
}

define_safe_i64_extractor!(SafeIDI64, "id");
define_safe_i64_extractor!(SafeExamIdI64, "exam_id");

/// 文件下载令牌提取器（UUID 格式）
pub struct SafeFileToken(pub String);

impl actix_web::FromRequest for SafeFileToken {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token = req
            .match_info()
            .get("token")
            .filter(|raw| uuid::Uuid::parse_str(raw).is_ok())
            .map(|raw| raw.to_string());

        ready(match token {
            Some(token) => Ok(SafeFileToken(token)),
            None => Err(bad_path_parameter("token")),
        })
    }
}
