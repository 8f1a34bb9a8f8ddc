pub mod create;
pub mod delete;
pub mod generate;
pub mod get;
pub mod list;
pub mod pdf;
pub mod status;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::question_papers::requests::{
    CreatePaperRequest, GeneratePaperRequest, PaperListParams, UpdatePaperStatusRequest,
};
use crate::storage::Storage;

pub struct QuestionPaperService {
    storage: Option<Arc<dyn Storage>>,
}

impl QuestionPaperService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 手动组卷
    pub async fn create_paper(
        &self,
        paper_data: CreatePaperRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_paper(self, paper_data, request).await
    }

    // AI 组卷
    pub async fn generate_paper(
        &self,
        generate_data: GeneratePaperRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        generate::generate_paper(self, generate_data, request).await
    }

    // 列出试卷
    pub async fn list_papers(
        &self,
        params: PaperListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_papers(self, params, request).await
    }

    // 获取试卷详情（含题目）
    pub async fn get_paper(
        &self,
        paper_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_paper(self, paper_id, request).await
    }

    // 试卷状态流转
    pub async fn update_paper_status(
        &self,
        paper_id: i64,
        status_data: UpdatePaperStatusRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        status::update_paper_status(self, paper_id, status_data, request).await
    }

    // 删除试卷（仅草稿）
    pub async fn delete_paper(
        &self,
        paper_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_paper(self, paper_id, request).await
    }

    // 下载试卷 PDF
    pub async fn download_paper_pdf(
        &self,
        paper_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        pdf::download_paper_pdf(self, paper_id, request).await
    }
}
