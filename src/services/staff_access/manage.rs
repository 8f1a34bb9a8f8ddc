use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StaffAccessService;
use crate::models::{
    ApiResponse, ErrorCode,
    staff_access::{AccessModule, GrantAccessRequest, StaffAccessListResponse},
    users::entities::UserRole,
};
use crate::services::guard::{current_user, ensure_same_school, require_school};

/// 授权（ADMIN）：只能授给本校的教师账号
pub async fn grant_access(
    service: &StaffAccessService,
    grant_data: GrantAccessRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let operator = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let school_id = match require_school(&operator) {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };

    let storage = service.get_storage(request);

    let target = match storage.get_user_by_id(grant_data.user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "用户不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询用户失败: {e}"),
                )),
            );
        }
    };

    if target.role != UserRole::Teacher {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "只能给教师账号授权",
        )));
    }

    if target.school_id != Some(school_id) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::SchoolPermissionDenied,
            "无权访问其他学校的数据",
        )));
    }

    match storage
        .grant_staff_access(school_id, grant_data.user_id, grant_data.module, operator.id)
        .await
    {
        Ok(grant) => Ok(HttpResponse::Created().json(ApiResponse::success(grant, "授权成功"))),
        Err(e) => {
            let msg = format!("授权失败: {e}");
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::StaffAccessAlreadyGranted,
                    "该模块已授权",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}

/// 撤销授权（ADMIN）
pub async fn revoke_access(
    service: &StaffAccessService,
    user_id: i64,
    module: AccessModule,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let operator = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    let storage = service.get_storage(request);

    // 目标账号的租户检查
    match storage.get_user_by_id(user_id).await {
        Ok(Some(target)) => {
            if let Some(target_school) = target.school_id
                && let Err(resp) = ensure_same_school(&operator, target_school)
            {
                return Ok(resp);
            }
        }
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "用户不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询用户失败: {e}"),
                )),
            );
        }
    }

    match storage.revoke_staff_access(user_id, module).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("已撤销授权"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StaffAccessNotFound,
            "授权记录不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("撤销授权失败: {e}"),
            )),
        ),
    }
}

/// 列出某教师的授权
pub async fn list_access(
    service: &StaffAccessService,
    user_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let operator = match current_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };

    let storage = service.get_storage(request);

    match storage.get_user_by_id(user_id).await {
        Ok(Some(target)) => {
            if let Some(target_school) = target.school_id
                && let Err(resp) = ensure_same_school(&operator, target_school)
            {
                return Ok(resp);
            }
        }
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "用户不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询用户失败: {e}"),
                )),
            );
        }
    }

    match storage.list_staff_access(user_id).await {
        Ok(grants) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(StaffAccessListResponse { grants }, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询授权失败: {e}"),
            )),
        ),
    }
}
