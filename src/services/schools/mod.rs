pub mod manage;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::schools::{
    CreateSchoolRequest, SchoolListParams, UpdateSchoolRequest,
};
use crate::storage::Storage;

pub struct SchoolService {
    storage: Option<Arc<dyn Storage>>,
}

impl SchoolService {
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

    // 创建学校
    pub async fn create_school(
        &self,
        school_data: CreateSchoolRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::create_school(self, school_data, request).await
    }

    // 列出学校
    pub async fn list_schools(
        &self,
        params: SchoolListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::list_schools(self, params, request).await
    }

    // 获取学校详情
    pub async fn get_school(
        &self,
        school_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::get_school(self, school_id, request).await
    }

    // 更新学校
    pub async fn update_school(
        &self,
        school_id: i64,
        update_data: UpdateSchoolRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::update_school(self, school_id, update_data, request).await
    }

    // 删除学校
    pub async fn delete_school(
        &self,
        school_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::delete_school(self, school_id, request).await
    }
}
