pub mod manage;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::absenteeism::{AbsenteeismListParams, RecordAbsenceRequest};
use crate::storage::Storage;

pub struct AbsenteeismService {
    storage: Option<Arc<dyn Storage>>,
}

impl AbsenteeismService {
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

    // 记录缺勤
    pub async fn record_absence(
        &self,
        record_data: RecordAbsenceRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::record_absence(self, record_data, request).await
    }

    // 列出缺勤记录
    pub async fn list_absences(
        &self,
        params: AbsenteeismListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::list_absences(self, params, request).await
    }

    // 删除缺勤记录
    pub async fn delete_absence(
        &self,
        absence_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::delete_absence(self, absence_id, request).await
    }
}
