pub mod aulas;
pub mod create;
pub mod directores;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct PlantelService {
    storage: Option<Arc<dyn Storage>>,
}

impl PlantelService {
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

    pub async fn create_plantel(
        &self,
        create_request: crate::models::planteles::requests::CreatePlantelRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::handle_create_plantel(self, create_request, request).await
    }

    pub async fn list_planteles(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::handle_list_planteles(self, request).await
    }

    pub async fn create_director(
        &self,
        create_request: crate::models::planteles::requests::CreateDirectorRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        directores::handle_create_director(self, create_request, request).await
    }

    pub async fn actualizar_aulas(
        &self,
        aulas_request: crate::models::planteles::requests::ActualizarAulasRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        aulas::handle_actualizar_aulas(self, aulas_request, request).await
    }
}
