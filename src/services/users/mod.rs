pub mod alumnos;
pub mod coordinadores;
pub mod docentes;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::storage::Storage;

pub struct UserService {
    storage: Option<Arc<dyn Storage>>,
}

impl UserService {
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

    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    pub async fn list_docentes(
        &self,
        params: crate::models::users::requests::UserListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        docentes::handle_list_docentes(self, params, request).await
    }

    pub async fn create_docente(
        &self,
        create_request: crate::models::users::requests::CreateDocenteRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        docentes::handle_create_docente(self, create_request, request).await
    }

    pub async fn get_docente(
        &self,
        docente_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        docentes::handle_get_docente(self, docente_id, request).await
    }

    pub async fn update_docente(
        &self,
        docente_id: i64,
        update_request: crate::models::users::requests::UpdateDocenteRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        docentes::handle_update_docente(self, docente_id, update_request, request).await
    }

    pub async fn delete_docente(
        &self,
        docente_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        docentes::handle_delete_docente(self, docente_id, request).await
    }

    pub async fn list_coordinadores(
        &self,
        params: crate::models::users::requests::UserListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        coordinadores::handle_list_coordinadores(self, params, request).await
    }

    pub async fn create_coordinador(
        &self,
        create_request: crate::models::users::requests::CreateCoordinadorRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        coordinadores::handle_create_coordinador(self, create_request, request).await
    }

    pub async fn reset_coordinador_password(
        &self,
        coordinador_id: i64,
        reset_request: crate::models::users::requests::ResetPasswordRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        coordinadores::handle_reset_password(self, coordinador_id, reset_request, request).await
    }

    pub async fn registrar_alumno(
        &self,
        registro: crate::models::users::requests::RegistrarAlumnoRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        alumnos::handle_registrar_alumno(self, registro, request).await
    }

    pub async fn list_alumnos_de_grupo(
        &self,
        grupo_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        alumnos::handle_list_alumnos_de_grupo(self, grupo_id, request).await
    }
}
