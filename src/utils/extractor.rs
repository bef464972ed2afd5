//! 路径参数提取器
//!
//! 直接从 match_info 读取并校验为正整数 ID，失败时返回统一的 400 错误体。

use std::future::{Ready, ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::errors::{PortalError, Result};

fn parse_positive_id(req: &HttpRequest, param: &str) -> Result<i64> {
    let raw = req
        .match_info()
        .get(param)
        .ok_or_else(|| PortalError::validation(format!("Missing path parameter '{param}'")))?;

    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(PortalError::validation(format!(
            "Invalid {param}: '{raw}' is not a positive integer"
        ))),
    }
}

macro_rules! define_safe_id {
    ($($name:ident => $param:literal),* $(,)?) => {
        $(
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            pub struct $name(pub i64);

            impl FromRequest for $name {
                type Error = actix_web::Error;
                type Future = Ready<std::result::Result<Self, Self::Error>>;

                fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
                    ready(
                        parse_positive_id(req, $param)
                            .map($name)
                            .map_err(Into::into),
                    )
                }
            }
        )*
    };
}

define_safe_id! {
    SafeIDI64 => "id",
    SafeStudentIdI64 => "studentId",
    SafeUserIdI64 => "userId",
}
