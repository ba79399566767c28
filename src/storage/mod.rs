use std::sync::Arc;

use crate::models::{
    asignaturas::{entities::Asignatura, requests::NewAsignatura, responses::AsignaturaCatalogRow},
    asistencias::{entities::Asistencia, requests::NewAsistencia},
    calificaciones::{entities::Calificacion, requests::NewCalificacion},
    carreras::{entities::Carrera, requests::CreateCarreraRequest},
    grupos::{
        entities::Grupo,
        requests::{NewGrupo, UpdateGrupoData},
    },
    periodos::{entities::Periodo, requests::NewPeriodo},
    planteles::{entities::Plantel, requests::CreatePlantelRequest},
    tutores::{entities::Tutor, requests::CreateTutorRequest},
    users::{
        entities::{Estatus, UserRole, Usuario},
        requests::{NewUsuario, UpdateUsuarioData, UserListParams},
        responses::UserListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

/// Persistence boundary. Campus scoping lives here: every `_scoped` method
/// combines the primary-key filter with the acting campus, so a cross-campus
/// id simply comes back as `None`.
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    // Users
    async fn create_user(&self, user: NewUsuario) -> Result<Usuario>;
    async fn get_user_by_id(&self, id: i64) -> Result<Option<Usuario>>;
    async fn get_user_by_username(&self, username: &str) -> Result<Option<Usuario>>;
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<Usuario>>;
    async fn get_user_scoped(&self, id: i64, plantel_id: i64) -> Result<Option<Usuario>>;
    async fn list_users_by_rol(
        &self,
        plantel_id: i64,
        rol: UserRole,
        params: UserListParams,
    ) -> Result<UserListResponse>;
    async fn list_alumnos_by_grupo(&self, grupo_id: i64) -> Result<Vec<Usuario>>;
    async fn update_user_scoped(
        &self,
        id: i64,
        plantel_id: i64,
        update: UpdateUsuarioData,
    ) -> Result<Option<Usuario>>;
    /// Own-profile update, no campus filter.
    async fn update_own_profile(
        &self,
        id: i64,
        update: UpdateUsuarioData,
    ) -> Result<Option<Usuario>>;
    async fn delete_user_scoped(&self, id: i64, plantel_id: i64) -> Result<bool>;
    async fn set_password(
        &self,
        id: i64,
        password_hash: String,
        estatus: Option<Estatus>,
    ) -> Result<bool>;
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    async fn set_foto_perfil(&self, id: i64, filename: String) -> Result<bool>;
    async fn count_users_by_rol(&self, plantel_id: i64, rol: UserRole) -> Result<i64>;
    async fn count_users(&self) -> Result<u64>;

    // Planteles
    async fn create_plantel(&self, plantel: CreatePlantelRequest) -> Result<Plantel>;
    async fn get_plantel_by_id(&self, id: i64) -> Result<Option<Plantel>>;
    async fn list_planteles(&self) -> Result<Vec<Plantel>>;
    async fn update_total_aulas(&self, plantel_id: i64, total_aulas: i32) -> Result<bool>;

    // Periodos
    async fn create_periodo(&self, periodo: NewPeriodo) -> Result<Periodo>;
    async fn get_periodo_by_id(&self, id: i64) -> Result<Option<Periodo>>;
    async fn list_periodos(&self, activo: Option<bool>) -> Result<Vec<Periodo>>;

    // Carreras
    async fn create_carrera(&self, plantel_id: i64, carrera: CreateCarreraRequest)
    -> Result<Carrera>;
    async fn get_carrera_scoped(&self, id: i64, plantel_id: i64) -> Result<Option<Carrera>>;
    async fn list_carreras(&self, plantel_id: i64) -> Result<Vec<Carrera>>;

    // Grupos
    async fn create_grupo(&self, plantel_id: i64, grupo: NewGrupo) -> Result<Grupo>;
    async fn get_grupo_scoped(&self, id: i64, plantel_id: i64) -> Result<Option<Grupo>>;
    async fn list_grupos(&self, plantel_id: i64) -> Result<Vec<Grupo>>;
    async fn update_grupo_scoped(
        &self,
        id: i64,
        plantel_id: i64,
        update: UpdateGrupoData,
    ) -> Result<Option<Grupo>>;
    async fn delete_grupo_scoped(&self, id: i64, plantel_id: i64) -> Result<bool>;
    async fn count_grupos(&self, plantel_id: i64) -> Result<i64>;
    /// Atomic bulk promotion; returns the number of promoted groups.
    async fn promote_grupos(&self, plantel_id: i64, periodo_id: i64) -> Result<u64>;
    async fn list_docentes_for_grupo(&self, grupo_id: i64) -> Result<Vec<Usuario>>;

    // Grupo KPI aggregates
    async fn count_alumnos_in_grupo(&self, grupo_id: i64) -> Result<i64>;
    async fn notas_for_grupo(&self, grupo_id: i64) -> Result<Vec<f64>>;
    /// `(presentes, total)` attendance rows for the group in `[desde, hasta)`.
    async fn asistencia_counts_for_grupo(
        &self,
        grupo_id: i64,
        desde: i64,
        hasta: i64,
    ) -> Result<(i64, i64)>;

    // At-risk detection (distinct students with at least one failing grade)
    async fn count_alumnos_en_riesgo(
        &self,
        plantel_id: i64,
        grupo_id: Option<i64>,
    ) -> Result<i64>;
    /// Up to `limit` at-risk students with their worst grade.
    async fn list_alumnos_en_riesgo(
        &self,
        plantel_id: i64,
        grupo_id: Option<i64>,
        limit: u64,
    ) -> Result<Vec<(Usuario, f64)>>;

    // Asignaturas
    /// Atomic fan-out creation; returns the number of groups replicated into.
    async fn replicate_asignatura(&self, plantel_id: i64, asignatura: NewAsignatura)
    -> Result<u64>;
    async fn get_asignatura_scoped(&self, id: i64, plantel_id: i64) -> Result<Option<Asignatura>>;
    async fn list_asignaturas_catalog(&self, plantel_id: i64)
    -> Result<Vec<AsignaturaCatalogRow>>;
    async fn count_asignaturas_for_grupo(&self, grupo_id: i64) -> Result<i64>;
    /// Distinct teachers owning at least one subject with no recorded grade.
    async fn count_docentes_actas_pendientes(&self, plantel_id: i64) -> Result<i64>;

    // Calificaciones
    async fn create_calificacion(&self, calificacion: NewCalificacion) -> Result<Calificacion>;
    async fn list_calificaciones(
        &self,
        alumno_id: Option<i64>,
        asignatura_id: Option<i64>,
    ) -> Result<Vec<Calificacion>>;

    // Asistencias
    async fn create_asistencia(&self, asistencia: NewAsistencia) -> Result<Asistencia>;
    /// Whether the student already has a record in `[desde, hasta)`.
    async fn exists_asistencia(&self, alumno_id: i64, desde: i64, hasta: i64) -> Result<bool>;
    async fn list_asistencias(&self, grupo_id: i64, desde: i64, hasta: i64)
    -> Result<Vec<Asistencia>>;
    /// `(presentes, total)` across the whole campus in `[desde, hasta)`.
    async fn asistencia_counts_for_plantel(
        &self,
        plantel_id: i64,
        desde: i64,
        hasta: i64,
    ) -> Result<(i64, i64)>;

    // Tutores
    async fn create_tutor(&self, tutor: CreateTutorRequest) -> Result<Tutor>;
    async fn list_tutores_by_alumno(&self, alumno_id: i64) -> Result<Vec<Tutor>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
