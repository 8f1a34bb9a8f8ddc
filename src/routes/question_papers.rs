use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::question_papers::requests::{
    CreatePaperRequest, GeneratePaperRequest, PaperListParams, UpdatePaperStatusRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::QuestionPaperService;
use crate::utils::SafeIDI64;

// 懒加载的全局 QuestionPaperService 实例
static PAPER_SERVICE: Lazy<QuestionPaperService> = Lazy::new(QuestionPaperService::new_lazy);

pub async fn list_papers(
    req: HttpRequest,
    query: web::Query<PaperListParams>,
) -> ActixResult<HttpResponse> {
    PAPER_SERVICE.list_papers(query.into_inner(), &req).await
}

pub async fn create_paper(
    req: HttpRequest,
    paper_data: web::Json<CreatePaperRequest>,
) -> ActixResult<HttpResponse> {
    PAPER_SERVICE
        .create_paper(paper_data.into_inner(), &req)
        .await
}

pub async fn generate_paper(
    req: HttpRequest,
    generate_data: web::Json<GeneratePaperRequest>,
) -> ActixResult<HttpResponse> {
    PAPER_SERVICE
        .generate_paper(generate_data.into_inner(), &req)
        .await
}

pub async fn get_paper(req: HttpRequest, paper_id: SafeIDI64) -> ActixResult<HttpResponse> {
    PAPER_SERVICE.get_paper(paper_id.0, &req).await
}

pub async fn update_paper_status(
    req: HttpRequest,
    paper_id: SafeIDI64,
    status_data: web::Json<UpdatePaperStatusRequest>,
) -> ActixResult<HttpResponse> {
    PAPER_SERVICE
        .update_paper_status(paper_id.0, status_data.into_inner(), &req)
        .await
}

pub async fn delete_paper(req: HttpRequest, paper_id: SafeIDI64) -> ActixResult<HttpResponse> {
    PAPER_SERVICE.delete_paper(paper_id.0, &req).await
}

pub async fn download_paper_pdf(
    req: HttpRequest,
    paper_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    PAPER_SERVICE.download_paper_pdf(paper_id.0, &req).await
}

// 配置路由
pub fn configure_question_paper_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/question-papers")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 列表 - 所有登录用户（学生只看到已发布）
                    .route(web::get().to(list_papers))
                    // 手动组卷 - 教职工
                    .route(
                        web::post()
                            .to(create_paper)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    ),
            )
            // AI 组卷 - 教职工，调用开销大，单独限流
            .service(
                web::resource("/generate")
                    .wrap(middlewares::RateLimit::ai_generation())
                    .route(
                        web::post()
                            .to(generate_paper)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_paper))
                    .route(
                        web::delete()
                            .to(delete_paper)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    ),
            )
            .service(
                web::resource("/{id}/status").route(
                    web::put()
                        .to(update_paper_status)
                        .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                ),
            )
            .service(web::resource("/{id}/pdf").route(web::get().to(download_paper_pdf))),
    );
}
