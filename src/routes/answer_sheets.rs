use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::answer_sheets::requests::SheetListParams;
use crate::models::users::entities::UserRole;
use crate::services::AnswerSheetService;
use crate::utils::{SafeExamIdI64, SafeIDI64};

// 懒加载的全局 AnswerSheetService 实例
static SHEET_SERVICE: Lazy<AnswerSheetService> = Lazy::new(AnswerSheetService::new_lazy);

// 学生上传答卷
pub async fn upload_sheet(
    req: HttpRequest,
    exam_id: SafeExamIdI64,
    payload: Multipart,
) -> ActixResult<HttpResponse> {
    SHEET_SERVICE.upload_sheet(exam_id.0, payload, &req).await
}

// 列出某场考试的答卷
pub async fn list_sheets(
    req: HttpRequest,
    exam_id: SafeExamIdI64,
    query: web::Query<SheetListParams>,
) -> ActixResult<HttpResponse> {
    SHEET_SERVICE
        .list_sheets(exam_id.0, query.into_inner(), &req)
        .await
}

// 答卷详情
pub async fn get_sheet(req: HttpRequest, sheet_id: SafeIDI64) -> ActixResult<HttpResponse> {
    SHEET_SERVICE.get_sheet(sheet_id.0, &req).await
}

// 触发 AI 批改
pub async fn check_sheet(req: HttpRequest, sheet_id: SafeIDI64) -> ActixResult<HttpResponse> {
    SHEET_SERVICE.check_sheet(sheet_id.0, &req).await
}

// 配置路由
pub fn configure_answer_sheet_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/answer-sheets")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/exam/{exam_id}")
                    // 上传 - 学生（业务层校验学生档案与班级归属）
                    .route(
                        web::post()
                            .to(upload_sheet)
                            .wrap(middlewares::RateLimit::file_upload()),
                    )
                    // 列表 - 教职工
                    .route(
                        web::get()
                            .to(list_sheets)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    // 详情 - 学生本人或教职工（业务层校验）
                    .route(web::get().to(get_sheet)),
            )
            // AI 批改 - 教职工，单独限流
            .service(
                web::resource("/{id}/check")
                    .wrap(middlewares::RateLimit::ai_check())
                    .route(
                        web::post()
                            .to(check_sheet)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    ),
            ),
    );
}
