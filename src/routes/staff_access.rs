use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::staff_access::{AccessModule, GrantAccessRequest};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::StaffAccessService;
use crate::utils::SafeIDI64;

// 懒加载的全局 StaffAccessService 实例
static ACCESS_SERVICE: Lazy<StaffAccessService> = Lazy::new(StaffAccessService::new_lazy);

// 授权
pub async fn grant_access(
    req: HttpRequest,
    grant_data: web::Json<GrantAccessRequest>,
) -> ActixResult<HttpResponse> {
    ACCESS_SERVICE
        .grant_access(grant_data.into_inner(), &req)
        .await
}

// 撤销授权
pub async fn revoke_access(
    req: HttpRequest,
    path: web::Path<(i64, String)>,
) -> ActixResult<HttpResponse> {
    let (user_id, module_raw) = path.into_inner();
    let module: AccessModule = match module_raw.parse() {
        Ok(module) => module,
        Err(msg) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
        }
    };
    ACCESS_SERVICE.revoke_access(user_id, module, &req).await
}

// 列出某教师的授权
pub async fn list_access(req: HttpRequest, user_id: SafeIDI64) -> ActixResult<HttpResponse> {
    ACCESS_SERVICE.list_access(user_id.0, &req).await
}

// 配置路由（学校管理员）
pub fn configure_staff_access_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/staff-access")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .route("", web::post().to(grant_access))
                    .route("/{id}", web::get().to(list_access))
                    .route("/{user_id}/{module}", web::delete().to(revoke_access)),
            ),
    );
}
