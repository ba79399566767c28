use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Planteles (campuses)
        manager
            .create_table(
                Table::create()
                    .table(Planteles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Planteles::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Planteles::Nombre).string().not_null())
                    .col(ColumnDef::new(Planteles::Direccion).string().null())
                    .col(
                        ColumnDef::new(Planteles::NivelEducativo)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Planteles::ColorTema).string().not_null())
                    .col(ColumnDef::new(Planteles::LogoUrl).string().null())
                    .col(
                        ColumnDef::new(Planteles::TotalAulas)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Planteles::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Periodos (school terms, shared across campuses)
        manager
            .create_table(
                Table::create()
                    .table(Periodos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Periodos::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Periodos::Nombre).string().not_null())
                    .col(ColumnDef::new(Periodos::FechaInicio).big_integer().null())
                    .col(ColumnDef::new(Periodos::FechaFin).big_integer().null())
                    .col(
                        ColumnDef::new(Periodos::Activo)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        // Carreras (programs, per campus)
        manager
            .create_table(
                Table::create()
                    .table(Carreras::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Carreras::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Carreras::PlantelId).big_integer().not_null())
                    .col(ColumnDef::new(Carreras::Nombre).string().not_null())
                    .col(ColumnDef::new(Carreras::Nivel).string().not_null())
                    .col(ColumnDef::new(Carreras::ClaveRvoe).string().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Carreras::Table, Carreras::PlantelId)
                            .to(Planteles::Table, Planteles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Grupos (class groups)
        manager
            .create_table(
                Table::create()
                    .table(Grupos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Grupos::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Grupos::PlantelId).big_integer().not_null())
                    .col(ColumnDef::new(Grupos::CarreraId).big_integer().null())
                    .col(ColumnDef::new(Grupos::PeriodoId).big_integer().null())
                    .col(ColumnDef::new(Grupos::Nombre).string().not_null())
                    .col(ColumnDef::new(Grupos::Grado).integer().not_null())
                    .col(ColumnDef::new(Grupos::Aula).string().null())
                    .col(
                        ColumnDef::new(Grupos::CapacidadMaxima)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Grupos::FechaInicio).big_integer().null())
                    .col(ColumnDef::new(Grupos::FechaFin).big_integer().null())
                    .col(ColumnDef::new(Grupos::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Grupos::Table, Grupos::PlantelId)
                            .to(Planteles::Table, Planteles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Grupos::Table, Grupos::CarreraId)
                            .to(Carreras::Table, Carreras::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Grupos::Table, Grupos::PeriodoId)
                            .to(Periodos::Table, Periodos::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Users (admins, directors, coordinators, docentes, alumnos)
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Users::Rol).string().not_null())
                    .col(ColumnDef::new(Users::Estatus).string().not_null())
                    .col(ColumnDef::new(Users::PlantelId).big_integer().null())
                    .col(ColumnDef::new(Users::GrupoId).big_integer().null())
                    .col(ColumnDef::new(Users::FirstName).string().not_null())
                    .col(ColumnDef::new(Users::LastName).string().not_null())
                    .col(ColumnDef::new(Users::Telefono).string().null())
                    .col(ColumnDef::new(Users::Direccion).string().null())
                    .col(
                        ColumnDef::new(Users::FechaNacimiento)
                            .big_integer()
                            .null(),
                    )
                    .col(ColumnDef::new(Users::FotoPerfil).string().null())
                    .col(ColumnDef::new(Users::LastLogin).big_integer().null())
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Users::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Users::Table, Users::PlantelId)
                            .to(Planteles::Table, Planteles::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Users::Table, Users::GrupoId)
                            .to(Grupos::Table, Grupos::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Tutores (guardians of alumnos)
        manager
            .create_table(
                Table::create()
                    .table(Tutores::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tutores::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tutores::AlumnoId).big_integer().not_null())
                    .col(ColumnDef::new(Tutores::Nombre).string().not_null())
                    .col(ColumnDef::new(Tutores::Parentesco).string().not_null())
                    .col(ColumnDef::new(Tutores::Telefono).string().not_null())
                    .col(ColumnDef::new(Tutores::Correo).string().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Tutores::Table, Tutores::AlumnoId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Asignaturas (subjects, one row per group)
        manager
            .create_table(
                Table::create()
                    .table(Asignaturas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Asignaturas::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Asignaturas::GrupoId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Asignaturas::CarreraId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Asignaturas::Nombre).string().not_null())
                    .col(ColumnDef::new(Asignaturas::Clave).string().null())
                    .col(ColumnDef::new(Asignaturas::Creditos).integer().null())
                    .col(
                        ColumnDef::new(Asignaturas::SeriacionId)
                            .big_integer()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Asignaturas::Table, Asignaturas::GrupoId)
                            .to(Grupos::Table, Grupos::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Asignaturas::Table, Asignaturas::CarreraId)
                            .to(Carreras::Table, Carreras::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Asignaturas::Table, Asignaturas::SeriacionId)
                            .to(Asignaturas::Table, Asignaturas::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Grupo <-> docente assignments
        manager
            .create_table(
                Table::create()
                    .table(GrupoDocentes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GrupoDocentes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(GrupoDocentes::GrupoId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GrupoDocentes::DocenteId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(GrupoDocentes::Table, GrupoDocentes::GrupoId)
                            .to(Grupos::Table, Grupos::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(GrupoDocentes::Table, GrupoDocentes::DocenteId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Asignatura <-> docente assignments
        manager
            .create_table(
                Table::create()
                    .table(AsignaturaDocentes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AsignaturaDocentes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AsignaturaDocentes::AsignaturaId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AsignaturaDocentes::DocenteId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                AsignaturaDocentes::Table,
                                AsignaturaDocentes::AsignaturaId,
                            )
                            .to(Asignaturas::Table, Asignaturas::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(AsignaturaDocentes::Table, AsignaturaDocentes::DocenteId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Calificaciones (grades)
        manager
            .create_table(
                Table::create()
                    .table(Calificaciones::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Calificaciones::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Calificaciones::AlumnoId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Calificaciones::AsignaturaId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Calificaciones::Nota).double().not_null())
                    .col(
                        ColumnDef::new(Calificaciones::Fecha)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Calificaciones::Table, Calificaciones::AlumnoId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Calificaciones::Table, Calificaciones::AsignaturaId)
                            .to(Asignaturas::Table, Asignaturas::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Asistencias (attendance records)
        manager
            .create_table(
                Table::create()
                    .table(Asistencias::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Asistencias::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Asistencias::AlumnoId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Asistencias::GrupoId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Asistencias::Fecha).big_integer().not_null())
                    .col(ColumnDef::new(Asistencias::Presente).boolean().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Asistencias::Table, Asistencias::AlumnoId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Asistencias::Table, Asistencias::GrupoId)
                            .to(Grupos::Table, Grupos::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop in reverse creation order
        manager
            .drop_table(Table::drop().table(Asistencias::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Calificaciones::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AsignaturaDocentes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GrupoDocentes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Asignaturas::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tutores::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Grupos::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Carreras::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Periodos::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Planteles::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Planteles {
    #[sea_orm(iden = "planteles")]
    Table,
    Id,
    Nombre,
    Direccion,
    NivelEducativo,
    ColorTema,
    LogoUrl,
    TotalAulas,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Periodos {
    #[sea_orm(iden = "periodos")]
    Table,
    Id,
    Nombre,
    FechaInicio,
    FechaFin,
    Activo,
}

#[derive(DeriveIden)]
enum Carreras {
    #[sea_orm(iden = "carreras")]
    Table,
    Id,
    PlantelId,
    Nombre,
    Nivel,
    ClaveRvoe,
}

#[derive(DeriveIden)]
enum Grupos {
    #[sea_orm(iden = "grupos")]
    Table,
    Id,
    PlantelId,
    CarreraId,
    PeriodoId,
    Nombre,
    Grado,
    Aula,
    CapacidadMaxima,
    FechaInicio,
    FechaFin,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    Rol,
    Estatus,
    PlantelId,
    GrupoId,
    FirstName,
    LastName,
    Telefono,
    Direccion,
    FechaNacimiento,
    FotoPerfil,
    LastLogin,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Tutores {
    #[sea_orm(iden = "tutores")]
    Table,
    Id,
    AlumnoId,
    Nombre,
    Parentesco,
    Telefono,
    Correo,
}

#[derive(DeriveIden)]
enum Asignaturas {
    #[sea_orm(iden = "asignaturas")]
    Table,
    Id,
    GrupoId,
    CarreraId,
    Nombre,
    Clave,
    Creditos,
    SeriacionId,
}

#[derive(DeriveIden)]
enum GrupoDocentes {
    #[sea_orm(iden = "grupo_docentes")]
    Table,
    Id,
    GrupoId,
    DocenteId,
}

#[derive(DeriveIden)]
enum AsignaturaDocentes {
    #[sea_orm(iden = "asignatura_docentes")]
    Table,
    Id,
    AsignaturaId,
    DocenteId,
}

#[derive(DeriveIden)]
enum Calificaciones {
    #[sea_orm(iden = "calificaciones")]
    Table,
    Id,
    AlumnoId,
    AsignaturaId,
    Nota,
    Fecha,
}

#[derive(DeriveIden)]
enum Asistencias {
    #[sea_orm(iden = "asistencias")]
    Table,
    Id,
    AlumnoId,
    GrupoId,
    Fecha,
    Presente,
}
