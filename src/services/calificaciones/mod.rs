pub mod create;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct CalificacionService {
    storage: Option<Arc<dyn Storage>>,
}

impl CalificacionService {
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

    pub async fn create_calificacion(
        &self,
        create_request: crate::models::calificaciones::requests::CreateCalificacionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::handle_create_calificacion(self, create_request, request).await
    }

    pub async fn list_calificaciones(
        &self,
        params: crate::models::calificaciones::requests::CalificacionListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_calificaciones(self, params, request).await
    }
}
