pub mod check;
pub mod get;
pub mod list;
pub mod upload;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::answer_sheets::requests::SheetListParams;
use crate::storage::Storage;

pub struct AnswerSheetService {
    storage: Option<Arc<dyn Storage>>,
}

impl AnswerSheetService {
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

    // 学生上传答卷
    pub async fn upload_sheet(
        &self,
        exam_id: i64,
        payload: Multipart,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        upload::upload_sheet(self, exam_id, payload, request).await
    }

    // 列出某场考试的答卷
    pub async fn list_sheets(
        &self,
        exam_id: i64,
        params: SheetListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_sheets(self, exam_id, params, request).await
    }

    // 获取答卷详情
    pub async fn get_sheet(
        &self,
        sheet_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_sheet(self, sheet_id, request).await
    }

    // 触发 AI 批改
    pub async fn check_sheet(
        &self,
        sheet_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        check::check_sheet(self, sheet_id, request).await
    }
}
