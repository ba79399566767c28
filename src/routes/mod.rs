pub mod asignaturas;
pub mod asistencias;
pub mod auth;
pub mod calificaciones;
pub mod carreras;
pub mod dashboard;
pub mod grupos;
pub mod periodos;
pub mod planteles;
pub mod system;
pub mod tutores;
pub mod users;

pub use asignaturas::configure_asignatura_routes;
pub use asistencias::configure_asistencia_routes;
pub use auth::configure_auth_routes;
pub use calificaciones::configure_calificacion_routes;
pub use carreras::configure_carrera_routes;
pub use dashboard::configure_dashboard_routes;
pub use grupos::configure_grupo_routes;
pub use periodos::configure_periodo_routes;
pub use planteles::configure_plantel_routes;
pub use system::configure_system_routes;
pub use tutores::configure_tutor_routes;
pub use users::configure_user_routes;
