use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::sample_papers::{CreateSamplePaperRequest, SamplePaperListParams};
use crate::models::users::entities::UserRole;
use crate::services::SamplePaperService;
use crate::utils::SafeIDI64;

// 懒加载的全局 SamplePaperService 实例
static SAMPLE_PAPER_SERVICE: Lazy<SamplePaperService> = Lazy::new(SamplePaperService::new_lazy);

// 登记样卷
pub async fn create_sample_paper(
    req: HttpRequest,
    paper_data: web::Json<CreateSamplePaperRequest>,
) -> ActixResult<HttpResponse> {
    SAMPLE_PAPER_SERVICE
        .create_sample_paper(paper_data.into_inner(), &req)
        .await
}

// 列出样卷
pub async fn list_sample_papers(
    req: HttpRequest,
    query: web::Query<SamplePaperListParams>,
) -> ActixResult<HttpResponse> {
    SAMPLE_PAPER_SERVICE
        .list_sample_papers(query.into_inner(), &req)
        .await
}

// 样卷详情
pub async fn get_sample_paper(req: HttpRequest, paper_id: SafeIDI64) -> ActixResult<HttpResponse> {
    SAMPLE_PAPER_SERVICE.get_sample_paper(paper_id.0, &req).await
}

// 删除样卷
pub async fn delete_sample_paper(
    req: HttpRequest,
    paper_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    SAMPLE_PAPER_SERVICE
        .delete_sample_paper(paper_id.0, &req)
        .await
}

// 配置路由
pub fn configure_sample_paper_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/sample-papers")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 列表 - 所有登录用户
                    .route(web::get().to(list_sample_papers))
                    // 登记 - 教职工
                    .route(
                        web::post()
                            .to(create_sample_paper)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_sample_paper))
                    .route(
                        web::delete()
                            .to(delete_sample_paper)
                            .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles())),
                    ),
            ),
    );
}
