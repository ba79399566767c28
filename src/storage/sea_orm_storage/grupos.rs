//! Group storage operations, including bulk promotion and the KPI
//! aggregates the dashboard and detail views consume.

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::calificaciones::{
    Column as CalificacionColumn, Entity as Calificaciones, Relation as CalificacionRelation,
};
use crate::entity::grupo_docentes::{
    ActiveModel as GrupoDocenteActiveModel, Column as GrupoDocenteColumn, Entity as GrupoDocentes,
};
use crate::entity::grupos::{ActiveModel, Column, Entity as Grupos};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{Result, SgaError};
use crate::models::calificaciones::entities::{NOTA_RIESGO, peores_por_alumno};
use crate::models::grupos::{
    entities::Grupo,
    requests::{NewGrupo, UpdateGrupoData},
};
use crate::models::users::entities::{UserRole, Usuario};
use crate::utils::fechas::SECONDS_PER_YEAR;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Set, TransactionTrait,
};

/// Grades eligible for promotion; the terminal grade is left untouched.
const GRADOS_PROMOVIBLES: [i32; 2] = [1, 2];

impl SeaOrmStorage {
    /// Creates the group and its teacher assignments in one transaction.
    pub async fn create_grupo_impl(&self, plantel_id: i64, req: NewGrupo) -> Result<Grupo> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SgaError::database_operation(format!("transaction start failed: {e}")))?;

        let model = ActiveModel {
            plantel_id: Set(plantel_id),
            carrera_id: Set(req.carrera_id),
            periodo_id: Set(req.periodo_id),
            nombre: Set(req.nombre),
            grado: Set(req.grado),
            aula: Set(req.aula),
            capacidad_maxima: Set(req.capacidad_maxima),
            fecha_inicio: Set(req.fecha_inicio),
            fecha_fin: Set(req.fecha_fin),
            created_at: Set(now),
            ..Default::default()
        };

        let grupo = model
            .insert(&txn)
            .await
            .map_err(|e| SgaError::database_operation(format!("group creation failed: {e}")))?;

        for docente_id in &req.docente_ids {
            GrupoDocenteActiveModel {
                grupo_id: Set(grupo.id),
                docente_id: Set(*docente_id),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(|e| {
                SgaError::database_operation(format!("teacher assignment failed: {e}"))
            })?;
        }

        txn.commit()
            .await
            .map_err(|e| SgaError::database_operation(format!("transaction commit failed: {e}")))?;

        Ok(grupo.into_grupo())
    }

    /// Campus-scoped lookup; an id from another campus comes back as None.
    pub async fn get_grupo_scoped_impl(&self, id: i64, plantel_id: i64) -> Result<Option<Grupo>> {
        let result = Grupos::find()
            .filter(Column::Id.eq(id))
            .filter(Column::PlantelId.eq(plantel_id))
            .one(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("group lookup failed: {e}")))?;

        Ok(result.map(|m| m.into_grupo()))
    }

    pub async fn list_grupos_impl(&self, plantel_id: i64) -> Result<Vec<Grupo>> {
        let grupos = Grupos::find()
            .filter(Column::PlantelId.eq(plantel_id))
            .order_by_asc(Column::Grado)
            .order_by_asc(Column::Nombre)
            .all(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("group listing failed: {e}")))?;

        Ok(grupos.into_iter().map(|m| m.into_grupo()).collect())
    }

    pub async fn update_grupo_scoped_impl(
        &self,
        id: i64,
        plantel_id: i64,
        update: UpdateGrupoData,
    ) -> Result<Option<Grupo>> {
        let existing = self.get_grupo_scoped_impl(id, plantel_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SgaError::database_operation(format!("transaction start failed: {e}")))?;

        let mut model = ActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(nombre) = update.nombre {
            model.nombre = Set(nombre);
        }
        if let Some(grado) = update.grado {
            model.grado = Set(grado);
        }
        if let Some(carrera_id) = update.carrera_id {
            model.carrera_id = Set(carrera_id);
        }
        if let Some(periodo_id) = update.periodo_id {
            model.periodo_id = Set(periodo_id);
        }
        if let Some(aula) = update.aula {
            model.aula = Set(aula);
        }
        if let Some(capacidad) = update.capacidad_maxima {
            model.capacidad_maxima = Set(capacidad);
        }

        model
            .update(&txn)
            .await
            .map_err(|e| SgaError::database_operation(format!("group update failed: {e}")))?;

        // Teacher set replacement, when requested
        if let Some(docente_ids) = update.docente_ids {
            GrupoDocentes::delete_many()
                .filter(GrupoDocenteColumn::GrupoId.eq(id))
                .exec(&txn)
                .await
                .map_err(|e| {
                    SgaError::database_operation(format!("teacher unassignment failed: {e}"))
                })?;

            for docente_id in docente_ids {
                GrupoDocenteActiveModel {
                    grupo_id: Set(id),
                    docente_id: Set(docente_id),
                    ..Default::default()
                }
                .insert(&txn)
                .await
                .map_err(|e| {
                    SgaError::database_operation(format!("teacher assignment failed: {e}"))
                })?;
            }
        }

        txn.commit()
            .await
            .map_err(|e| SgaError::database_operation(format!("transaction commit failed: {e}")))?;

        self.get_grupo_scoped_impl(id, plantel_id).await
    }

    pub async fn delete_grupo_scoped_impl(&self, id: i64, plantel_id: i64) -> Result<bool> {
        let result = Grupos::delete_many()
            .filter(Column::Id.eq(id))
            .filter(Column::PlantelId.eq(plantel_id))
            .exec(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("group deletion failed: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count_grupos_impl(&self, plantel_id: i64) -> Result<i64> {
        let count = Grupos::find()
            .filter(Column::PlantelId.eq(plantel_id))
            .count(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("group count failed: {e}")))?;

        Ok(count as i64)
    }

    /// Bulk promotion: one UPDATE inside one transaction. Groups at grades
    /// 1 and 2 advance a grade, move to the target period, and shift their
    /// dates forward a year; grade-3 groups stay as they are.
    pub async fn promote_grupos_impl(&self, plantel_id: i64, periodo_id: i64) -> Result<u64> {
        use sea_orm::sea_query::{Expr, ExprTrait};

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SgaError::database_operation(format!("transaction start failed: {e}")))?;

        let result = Grupos::update_many()
            .col_expr(Column::Grado, Expr::col(Column::Grado).add(1))
            .col_expr(Column::PeriodoId, Expr::value(Some(periodo_id)))
            .col_expr(
                Column::FechaInicio,
                Expr::col(Column::FechaInicio).add(SECONDS_PER_YEAR),
            )
            .col_expr(
                Column::FechaFin,
                Expr::col(Column::FechaFin).add(SECONDS_PER_YEAR),
            )
            .filter(Column::PlantelId.eq(plantel_id))
            .filter(Column::Grado.is_in(GRADOS_PROMOVIBLES))
            .exec(&txn)
            .await
            .map_err(|e| SgaError::database_operation(format!("bulk promotion failed: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| SgaError::database_operation(format!("transaction commit failed: {e}")))?;

        Ok(result.rows_affected)
    }

    pub async fn list_docentes_for_grupo_impl(&self, grupo_id: i64) -> Result<Vec<Usuario>> {
        let docente_ids: Vec<i64> = GrupoDocentes::find()
            .filter(GrupoDocenteColumn::GrupoId.eq(grupo_id))
            .all(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("assignment lookup failed: {e}")))?
            .into_iter()
            .map(|m| m.docente_id)
            .collect();

        if docente_ids.is_empty() {
            return Ok(Vec::new());
        }

        let docentes = Users::find()
            .filter(UserColumn::Id.is_in(docente_ids))
            .order_by_asc(UserColumn::LastName)
            .all(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("teacher lookup failed: {e}")))?;

        Ok(docentes.into_iter().map(|m| m.into_usuario()).collect())
    }

    // KPI aggregates

    pub async fn count_alumnos_in_grupo_impl(&self, grupo_id: i64) -> Result<i64> {
        let count = Users::find()
            .filter(UserColumn::GrupoId.eq(grupo_id))
            .filter(UserColumn::Rol.eq(UserRole::Alumno.to_string()))
            .count(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("student count failed: {e}")))?;

        Ok(count as i64)
    }

    /// All grades recorded under the group's subjects.
    pub async fn notas_for_grupo_impl(&self, grupo_id: i64) -> Result<Vec<f64>> {
        use crate::entity::asignaturas::Column as AsignaturaColumn;

        let notas = Calificaciones::find()
            .join(JoinType::InnerJoin, CalificacionRelation::Asignatura.def())
            .filter(AsignaturaColumn::GrupoId.eq(grupo_id))
            .select_only()
            .column(CalificacionColumn::Nota)
            .into_tuple::<f64>()
            .all(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("grade query failed: {e}")))?;

        Ok(notas)
    }

    pub async fn asistencia_counts_for_grupo_impl(
        &self,
        grupo_id: i64,
        desde: i64,
        hasta: i64,
    ) -> Result<(i64, i64)> {
        use crate::entity::asistencias::{Column as AsistenciaColumn, Entity as Asistencias};

        let total = Asistencias::find()
            .filter(AsistenciaColumn::GrupoId.eq(grupo_id))
            .filter(AsistenciaColumn::Fecha.gte(desde))
            .filter(AsistenciaColumn::Fecha.lt(hasta))
            .count(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("attendance count failed: {e}")))?;

        let presentes = Asistencias::find()
            .filter(AsistenciaColumn::GrupoId.eq(grupo_id))
            .filter(AsistenciaColumn::Fecha.gte(desde))
            .filter(AsistenciaColumn::Fecha.lt(hasta))
            .filter(AsistenciaColumn::Presente.eq(true))
            .count(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("attendance count failed: {e}")))?;

        Ok((presentes as i64, total as i64))
    }

    // At-risk detection

    /// Failing grades per student, deduplicated to the worst one. Campus
    /// (and optionally group) scoped through the student row.
    async fn peores_notas_por_alumno(
        &self,
        plantel_id: i64,
        grupo_id: Option<i64>,
    ) -> Result<HashMap<i64, f64>> {
        let mut select = Calificaciones::find()
            .join(JoinType::InnerJoin, CalificacionRelation::Alumno.def())
            .filter(UserColumn::PlantelId.eq(plantel_id))
            .filter(UserColumn::Rol.eq(UserRole::Alumno.to_string()))
            .filter(CalificacionColumn::Nota.lt(NOTA_RIESGO));

        if let Some(grupo_id) = grupo_id {
            select = select.filter(UserColumn::GrupoId.eq(grupo_id));
        }

        let rows = select
            .select_only()
            .column(CalificacionColumn::AlumnoId)
            .column(CalificacionColumn::Nota)
            .into_tuple::<(i64, f64)>()
            .all(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("at-risk query failed: {e}")))?;

        Ok(peores_por_alumno(rows))
    }

    pub async fn count_alumnos_en_riesgo_impl(
        &self,
        plantel_id: i64,
        grupo_id: Option<i64>,
    ) -> Result<i64> {
        let peores = self.peores_notas_por_alumno(plantel_id, grupo_id).await?;
        Ok(peores.len() as i64)
    }

    pub async fn list_alumnos_en_riesgo_impl(
        &self,
        plantel_id: i64,
        grupo_id: Option<i64>,
        limit: u64,
    ) -> Result<Vec<(Usuario, f64)>> {
        let peores = self.peores_notas_por_alumno(plantel_id, grupo_id).await?;
        if peores.is_empty() {
            return Ok(Vec::new());
        }

        // Worst first, capped
        let mut ordenados: Vec<(i64, f64)> = peores.into_iter().collect();
        ordenados.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
        ordenados.truncate(limit as usize);

        let ids: Vec<i64> = ordenados.iter().map(|(id, _)| *id).collect();
        let usuarios: HashMap<i64, Usuario> = Users::find()
            .filter(UserColumn::Id.is_in(ids))
            .all(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("student lookup failed: {e}")))?
            .into_iter()
            .map(|m| (m.id, m.into_usuario()))
            .collect();

        Ok(ordenados
            .into_iter()
            .filter_map(|(id, peor)| usuarios.get(&id).cloned().map(|u| (u, peor)))
            .collect())
    }
}
