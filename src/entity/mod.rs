//! SeaORM entity definitions.
//!
//! Database rows only; the storage layer converts them into the business
//! entities under `models` before anything else sees them.

pub mod prelude;

pub mod asignatura_docentes;
pub mod asignaturas;
pub mod asistencias;
pub mod calificaciones;
pub mod carreras;
pub mod grupo_docentes;
pub mod grupos;
pub mod periodos;
pub mod planteles;
pub mod tutores;
pub mod users;
