//! SeaORM storage implementation.
//!
//! One storage layer over SQLite, PostgreSQL and MySQL; the backend is
//! inferred from the connection URL.

mod asignaturas;
mod asistencias;
mod calificaciones;
mod carreras;
mod grupos;
mod periodos;
mod planteles;
mod tutores;
mod users;

use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::AppConfig;
use crate::errors::{Result, SgaError};

#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        Migrator::up(&db, None)
            .await
            .map_err(|e| SgaError::database_operation(format!("migration failed: {e}")))?;

        info!("SeaORM storage initialized, database: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite connection with WAL and pragma tuning.
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| SgaError::database_config(format!("invalid SQLite URL: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| SgaError::database_connection(format!("SQLite connection failed: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// PostgreSQL / MySQL connection.
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| SgaError::database_connection(format!("database connection failed: {e}")))
    }

    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(SgaError::database_config(format!(
                "cannot infer database type from URL: {url}. Supported: sqlite://, postgres://, mysql://, or a .db/.sqlite file path"
            )))
        }
    }
}

use async_trait::async_trait;

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
use crate::storage::Storage;

#[async_trait]
impl Storage for SeaOrmStorage {
    // Users
    async fn create_user(&self, user: NewUsuario) -> Result<Usuario> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<Usuario>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<Usuario>> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<Usuario>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn get_user_scoped(&self, id: i64, plantel_id: i64) -> Result<Option<Usuario>> {
        self.get_user_scoped_impl(id, plantel_id).await
    }

    async fn list_users_by_rol(
        &self,
        plantel_id: i64,
        rol: UserRole,
        params: UserListParams,
    ) -> Result<UserListResponse> {
        self.list_users_by_rol_impl(plantel_id, rol, params).await
    }

    async fn list_alumnos_by_grupo(&self, grupo_id: i64) -> Result<Vec<Usuario>> {
        self.list_alumnos_by_grupo_impl(grupo_id).await
    }

    async fn update_user_scoped(
        &self,
        id: i64,
        plantel_id: i64,
        update: UpdateUsuarioData,
    ) -> Result<Option<Usuario>> {
        self.update_user_scoped_impl(id, plantel_id, update).await
    }

    async fn update_own_profile(
        &self,
        id: i64,
        update: UpdateUsuarioData,
    ) -> Result<Option<Usuario>> {
        self.update_own_profile_impl(id, update).await
    }

    async fn delete_user_scoped(&self, id: i64, plantel_id: i64) -> Result<bool> {
        self.delete_user_scoped_impl(id, plantel_id).await
    }

    async fn set_password(
        &self,
        id: i64,
        password_hash: String,
        estatus: Option<Estatus>,
    ) -> Result<bool> {
        self.set_password_impl(id, password_hash, estatus).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn set_foto_perfil(&self, id: i64, filename: String) -> Result<bool> {
        self.set_foto_perfil_impl(id, filename).await
    }

    async fn count_users_by_rol(&self, plantel_id: i64, rol: UserRole) -> Result<i64> {
        self.count_users_by_rol_impl(plantel_id, rol).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // Planteles
    async fn create_plantel(&self, plantel: CreatePlantelRequest) -> Result<Plantel> {
        self.create_plantel_impl(plantel).await
    }

    async fn get_plantel_by_id(&self, id: i64) -> Result<Option<Plantel>> {
        self.get_plantel_by_id_impl(id).await
    }

    async fn list_planteles(&self) -> Result<Vec<Plantel>> {
        self.list_planteles_impl().await
    }

    async fn update_total_aulas(&self, plantel_id: i64, total_aulas: i32) -> Result<bool> {
        self.update_total_aulas_impl(plantel_id, total_aulas).await
    }

    // Periodos
    async fn create_periodo(&self, periodo: NewPeriodo) -> Result<Periodo> {
        self.create_periodo_impl(periodo).await
    }

    async fn get_periodo_by_id(&self, id: i64) -> Result<Option<Periodo>> {
        self.get_periodo_by_id_impl(id).await
    }

    async fn list_periodos(&self, activo: Option<bool>) -> Result<Vec<Periodo>> {
        self.list_periodos_impl(activo).await
    }

    // Carreras
    async fn create_carrera(
        &self,
        plantel_id: i64,
        carrera: CreateCarreraRequest,
    ) -> Result<Carrera> {
        self.create_carrera_impl(plantel_id, carrera).await
    }

    async fn get_carrera_scoped(&self, id: i64, plantel_id: i64) -> Result<Option<Carrera>> {
        self.get_carrera_scoped_impl(id, plantel_id).await
    }

    async fn list_carreras(&self, plantel_id: i64) -> Result<Vec<Carrera>> {
        self.list_carreras_impl(plantel_id).await
    }

    // Grupos
    async fn create_grupo(&self, plantel_id: i64, grupo: NewGrupo) -> Result<Grupo> {
        self.create_grupo_impl(plantel_id, grupo).await
    }

    async fn get_grupo_scoped(&self, id: i64, plantel_id: i64) -> Result<Option<Grupo>> {
        self.get_grupo_scoped_impl(id, plantel_id).await
    }

    async fn list_grupos(&self, plantel_id: i64) -> Result<Vec<Grupo>> {
        self.list_grupos_impl(plantel_id).await
    }

    async fn update_grupo_scoped(
        &self,
        id: i64,
        plantel_id: i64,
        update: UpdateGrupoData,
    ) -> Result<Option<Grupo>> {
        self.update_grupo_scoped_impl(id, plantel_id, update).await
    }

    async fn delete_grupo_scoped(&self, id: i64, plantel_id: i64) -> Result<bool> {
        self.delete_grupo_scoped_impl(id, plantel_id).await
    }

    async fn count_grupos(&self, plantel_id: i64) -> Result<i64> {
        self.count_grupos_impl(plantel_id).await
    }

    async fn promote_grupos(&self, plantel_id: i64, periodo_id: i64) -> Result<u64> {
        self.promote_grupos_impl(plantel_id, periodo_id).await
    }

    async fn list_docentes_for_grupo(&self, grupo_id: i64) -> Result<Vec<Usuario>> {
        self.list_docentes_for_grupo_impl(grupo_id).await
    }

    // KPI aggregates
    async fn count_alumnos_in_grupo(&self, grupo_id: i64) -> Result<i64> {
        self.count_alumnos_in_grupo_impl(grupo_id).await
    }

    async fn notas_for_grupo(&self, grupo_id: i64) -> Result<Vec<f64>> {
        self.notas_for_grupo_impl(grupo_id).await
    }

    async fn asistencia_counts_for_grupo(
        &self,
        grupo_id: i64,
        desde: i64,
        hasta: i64,
    ) -> Result<(i64, i64)> {
        self.asistencia_counts_for_grupo_impl(grupo_id, desde, hasta)
            .await
    }

    // At-risk
    async fn count_alumnos_en_riesgo(
        &self,
        plantel_id: i64,
        grupo_id: Option<i64>,
    ) -> Result<i64> {
        self.count_alumnos_en_riesgo_impl(plantel_id, grupo_id).await
    }

    async fn list_alumnos_en_riesgo(
        &self,
        plantel_id: i64,
        grupo_id: Option<i64>,
        limit: u64,
    ) -> Result<Vec<(Usuario, f64)>> {
        self.list_alumnos_en_riesgo_impl(plantel_id, grupo_id, limit)
            .await
    }

    // Asignaturas
    async fn replicate_asignatura(
        &self,
        plantel_id: i64,
        asignatura: NewAsignatura,
    ) -> Result<u64> {
        self.replicate_asignatura_impl(plantel_id, asignatura).await
    }

    async fn get_asignatura_scoped(&self, id: i64, plantel_id: i64) -> Result<Option<Asignatura>> {
        self.get_asignatura_scoped_impl(id, plantel_id).await
    }

    async fn list_asignaturas_catalog(
        &self,
        plantel_id: i64,
    ) -> Result<Vec<AsignaturaCatalogRow>> {
        self.list_asignaturas_catalog_impl(plantel_id).await
    }

    async fn count_asignaturas_for_grupo(&self, grupo_id: i64) -> Result<i64> {
        self.count_asignaturas_for_grupo_impl(grupo_id).await
    }

    async fn count_docentes_actas_pendientes(&self, plantel_id: i64) -> Result<i64> {
        self.count_docentes_actas_pendientes_impl(plantel_id).await
    }

    // Calificaciones
    async fn create_calificacion(&self, calificacion: NewCalificacion) -> Result<Calificacion> {
        self.create_calificacion_impl(calificacion).await
    }

    async fn list_calificaciones(
        &self,
        alumno_id: Option<i64>,
        asignatura_id: Option<i64>,
    ) -> Result<Vec<Calificacion>> {
        self.list_calificaciones_impl(alumno_id, asignatura_id).await
    }

    // Asistencias
    async fn create_asistencia(&self, asistencia: NewAsistencia) -> Result<Asistencia> {
        self.create_asistencia_impl(asistencia).await
    }

    async fn exists_asistencia(&self, alumno_id: i64, desde: i64, hasta: i64) -> Result<bool> {
        self.exists_asistencia_impl(alumno_id, desde, hasta).await
    }

    async fn list_asistencias(
        &self,
        grupo_id: i64,
        desde: i64,
        hasta: i64,
    ) -> Result<Vec<Asistencia>> {
        self.list_asistencias_impl(grupo_id, desde, hasta).await
    }

    async fn asistencia_counts_for_plantel(
        &self,
        plantel_id: i64,
        desde: i64,
        hasta: i64,
    ) -> Result<(i64, i64)> {
        self.asistencia_counts_for_plantel_impl(plantel_id, desde, hasta)
            .await
    }

    // Tutores
    async fn create_tutor(&self, tutor: CreateTutorRequest) -> Result<Tutor> {
        self.create_tutor_impl(tutor).await
    }

    async fn list_tutores_by_alumno(&self, alumno_id: i64) -> Result<Vec<Tutor>> {
        self.list_tutores_by_alumno_impl(alumno_id).await
    }
}
