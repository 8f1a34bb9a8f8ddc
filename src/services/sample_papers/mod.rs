pub mod manage;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::sample_papers::{CreateSamplePaperRequest, SamplePaperListParams};
use crate::storage::Storage;

pub struct SamplePaperService {
    storage: Option<Arc<dyn Storage>>,
}

impl SamplePaperService {
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

    // 登记样卷
    pub async fn create_sample_paper(
        &self,
        paper_data: CreateSamplePaperRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::create_sample_paper(self, paper_data, request).await
    }

    // 列出样卷
    pub async fn list_sample_papers(
        &self,
        params: SamplePaperListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::list_sample_papers(self, params, request).await
    }

    // 获取样卷详情
    pub async fn get_sample_paper(
        &self,
        paper_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::get_sample_paper(self, paper_id, request).await
    }

    // 删除样卷
    pub async fn delete_sample_paper(
        &self,
        paper_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::delete_sample_paper(self, paper_id, request).await
    }
}
