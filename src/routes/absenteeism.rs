use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::absenteeism::{AbsenteeismListParams, RecordAbsenceRequest};
use crate::models::users::entities::UserRole;
use crate::services::AbsenteeismService;
use crate::utils::SafeIDI64;

// 懒加载的全局 AbsenteeismService 实例
static ABSENTEEISM_SERVICE: Lazy<AbsenteeismService> = Lazy::new(AbsenteeismService::new_lazy);

// 记录缺勤
pub async fn record_absence(
    req: HttpRequest,
    record_data: web::Json<RecordAbsenceRequest>,
) -> ActixResult<HttpResponse> {
    ABSENTEEISM_SERVICE
        .record_absence(record_data.into_inner(), &req)
        .await
}

// 列出缺勤记录
pub async fn list_absences(
    req: HttpRequest,
    query: web::Query<AbsenteeismListParams>,
) -> ActixResult<HttpResponse> {
    ABSENTEEISM_SERVICE
        .list_absences(query.into_inner(), &req)
        .await
}

// 删除缺勤记录
pub async fn delete_absence(req: HttpRequest, absence_id: SafeIDI64) -> ActixResult<HttpResponse> {
    ABSENTEEISM_SERVICE.delete_absence(absence_id.0, &req).await
}

// 配置路由（教职工，教师需缺勤模块授权）
pub fn configure_absenteeism_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/absenteeism")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
                    .route("", web::post().to(record_absence))
                    .route("", web::get().to(list_absences))
                    .route("/{id}", web::delete().to(delete_absence)),
            ),
    );
}
