//! 业务层通用权限检查
//!
//! 角色门禁在路由层由 RequireRole 处理；这里是更细的检查：
//! 当前用户提取、租户归属、教师的模块授权。

use actix_web::HttpResponse;
use std::sync::Arc;

use crate::middlewares::RequireJWT;
use crate::models::staff_access::AccessModule;
use crate::models::users::entities::{User, UserRole};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

/// 提取当前登录用户，失败时返回 401 响应
pub fn current_user(request: &actix_web::HttpRequest) -> Result<User, HttpResponse> {
    RequireJWT::extract_user_claims(request).ok_or_else(|| {
        HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "无法获取用户信息",
        ))
    })
}

/// 当前用户所属学校
///
/// 校内数据接口按登录账号的 school_id 限定租户；超级管理员不属于任何
/// 学校，对这类接口返回 403（他们通过学校/管理员接口运营平台）。
pub fn require_school(user: &User) -> Result<i64, HttpResponse> {
    user.school_id.ok_or_else(|| {
        HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::SchoolPermissionDenied,
            "该接口仅限学校内账号访问",
        ))
    })
}

/// 校验目标数据属于当前用户所在学校
pub fn ensure_same_school(user: &User, school_id: i64) -> Result<(), HttpResponse> {
    if user.can_access_school(school_id) {
        Ok(())
    } else {
        Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::SchoolPermissionDenied,
            "无权访问其他学校的数据",
        )))
    }
}

/// 校验教师对某后台模块的写权限
///
/// 管理员天然拥有全部模块；教师需要对应的授权记录；学生一律拒绝。
pub async fn ensure_staff_access(
    storage: &Arc<dyn Storage>,
    user: &User,
    module: AccessModule,
) -> Result<(), HttpResponse> {
    match user.role {
        UserRole::SuperAdmin | UserRole::Admin => Ok(()),
        UserRole::Teacher => match storage.has_staff_access(user.id, module).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::StaffAccessDenied,
                format!("未获得 {module} 模块的操作授权"),
            ))),
            Err(e) => Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询模块权限失败: {e}"),
                )),
            ),
        },
        UserRole::Student => Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "学生无权执行该操作",
        ))),
    }
}
