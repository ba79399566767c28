//! Re-exports with disambiguated names for the storage layer.

pub use super::asignatura_docentes::{
    ActiveModel as AsignaturaDocenteActiveModel, Entity as AsignaturaDocentes,
    Model as AsignaturaDocenteModel,
};
pub use super::asignaturas::{
    ActiveModel as AsignaturaActiveModel, Entity as Asignaturas, Model as AsignaturaModel,
};
pub use super::asistencias::{
    ActiveModel as AsistenciaActiveModel, Entity as Asistencias, Model as AsistenciaModel,
};
pub use super::calificaciones::{
    ActiveModel as CalificacionActiveModel, Entity as Calificaciones, Model as CalificacionModel,
};
pub use super::carreras::{
    ActiveModel as CarreraActiveModel, Entity as Carreras, Model as CarreraModel,
};
pub use super::grupo_docentes::{
    ActiveModel as GrupoDocenteActiveModel, Entity as GrupoDocentes, Model as GrupoDocenteModel,
};
pub use super::grupos::{ActiveModel as GrupoActiveModel, Entity as Grupos, Model as GrupoModel};
pub use super::periodos::{
    ActiveModel as PeriodoActiveModel, Entity as Periodos, Model as PeriodoModel,
};
pub use super::planteles::{
    ActiveModel as PlantelActiveModel, Entity as Planteles, Model as PlantelModel,
};
pub use super::tutores::{ActiveModel as TutorActiveModel, Entity as Tutores, Model as TutorModel};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
