pub mod manage;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::staff_access::{AccessModule, GrantAccessRequest};
use crate::storage::Storage;

pub struct StaffAccessService {
    storage: Option<Arc<dyn Storage>>,
}

impl StaffAccessService {
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

    // 授予教师模块权限
    pub async fn grant_access(
        &self,
        grant_data: GrantAccessRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::grant_access(self, grant_data, request).await
    }

    // 撤销教师模块权限
    pub async fn revoke_access(
        &self,
        user_id: i64,
        module: AccessModule,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::revoke_access(self, user_id, module, request).await
    }

    // 列出教师的模块权限
    pub async fn list_access(
        &self,
        user_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        manage::list_access(self, user_id, request).await
    }
}
