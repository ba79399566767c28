//! Subject storage operations, including the fan-out replication that turns
//! one logical creation into one row per matching group.

use std::collections::{HashMap, HashSet};

use super::SeaOrmStorage;
use crate::entity::asignatura_docentes::{
    ActiveModel as AsignaturaDocenteActiveModel, Column as AsignaturaDocenteColumn,
    Entity as AsignaturaDocentes,
};
use crate::entity::asignaturas::{ActiveModel, Column, Entity as Asignaturas};
use crate::entity::carreras::{Column as CarreraColumn, Entity as Carreras};
use crate::entity::grupos::{Column as GrupoColumn, Entity as Grupos};
use crate::errors::{Result, SgaError};
use crate::models::asignaturas::{
    entities::Asignatura, requests::NewAsignatura, responses::AsignaturaCatalogRow,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// Replicates the subject into every campus group matching
    /// (grado_destino, nivel_academico), all inside one transaction. Zero
    /// matching groups commits nothing and reports 0.
    pub async fn replicate_asignatura_impl(
        &self,
        plantel_id: i64,
        req: NewAsignatura,
    ) -> Result<u64> {
        // Programs of the campus at the requested academic level
        let carrera_ids: Vec<i64> = Carreras::find()
            .filter(CarreraColumn::PlantelId.eq(plantel_id))
            .filter(CarreraColumn::Nivel.eq(req.nivel_academico.to_string()))
            .select_only()
            .column(CarreraColumn::Id)
            .into_tuple::<i64>()
            .all(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("program query failed: {e}")))?;

        if carrera_ids.is_empty() {
            return Ok(0);
        }

        // Matching groups: same campus, target grade, program at that level
        let grupos: Vec<(i64, i64)> = Grupos::find()
            .filter(GrupoColumn::PlantelId.eq(plantel_id))
            .filter(GrupoColumn::Grado.eq(req.grado_destino))
            .filter(GrupoColumn::CarreraId.is_in(carrera_ids))
            .select_only()
            .column(GrupoColumn::Id)
            .column(GrupoColumn::CarreraId)
            .into_tuple::<(i64, Option<i64>)>()
            .all(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("group query failed: {e}")))?
            .into_iter()
            .filter_map(|(grupo_id, carrera_id)| carrera_id.map(|c| (grupo_id, c)))
            .collect();

        if grupos.is_empty() {
            return Ok(0);
        }

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SgaError::database_operation(format!("transaction start failed: {e}")))?;

        let mut created = 0u64;
        for (grupo_id, carrera_id) in grupos {
            let asignatura = ActiveModel {
                grupo_id: Set(grupo_id),
                carrera_id: Set(carrera_id),
                nombre: Set(req.nombre.clone()),
                clave: Set(req.clave.clone()),
                creditos: Set(req.creditos),
                seriacion_id: Set(req.seriacion_id),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(|e| {
                SgaError::database_operation(format!("subject replication failed: {e}"))
            })?;

            for docente_id in &req.docente_ids {
                AsignaturaDocenteActiveModel {
                    asignatura_id: Set(asignatura.id),
                    docente_id: Set(*docente_id),
                    ..Default::default()
                }
                .insert(&txn)
                .await
                .map_err(|e| {
                    SgaError::database_operation(format!("teacher assignment failed: {e}"))
                })?;
            }

            created += 1;
        }

        txn.commit()
            .await
            .map_err(|e| SgaError::database_operation(format!("transaction commit failed: {e}")))?;

        Ok(created)
    }

    /// Campus-scoped lookup through the owning group.
    pub async fn get_asignatura_scoped_impl(
        &self,
        id: i64,
        plantel_id: i64,
    ) -> Result<Option<Asignatura>> {
        use crate::entity::asignaturas::Relation as AsignaturaRelation;
        use sea_orm::{JoinType, RelationTrait};

        let result = Asignaturas::find()
            .join(JoinType::InnerJoin, AsignaturaRelation::Grupo.def())
            .filter(Column::Id.eq(id))
            .filter(GrupoColumn::PlantelId.eq(plantel_id))
            .one(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("subject lookup failed: {e}")))?;

        Ok(result.map(|m| m.into_asignatura()))
    }

    /// Full subject catalog of a campus with group and program names, for
    /// the per-program listing.
    pub async fn list_asignaturas_catalog_impl(
        &self,
        plantel_id: i64,
    ) -> Result<Vec<AsignaturaCatalogRow>> {
        let grupos: HashMap<i64, (String, i32)> = Grupos::find()
            .filter(GrupoColumn::PlantelId.eq(plantel_id))
            .all(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("group listing failed: {e}")))?
            .into_iter()
            .map(|g| (g.id, (g.nombre, g.grado)))
            .collect();

        let carreras: HashMap<i64, String> = Carreras::find()
            .filter(CarreraColumn::PlantelId.eq(plantel_id))
            .all(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("program listing failed: {e}")))?
            .into_iter()
            .map(|c| (c.id, c.nombre))
            .collect();

        if grupos.is_empty() {
            return Ok(Vec::new());
        }

        let asignaturas = Asignaturas::find()
            .filter(Column::GrupoId.is_in(grupos.keys().copied().collect::<Vec<_>>()))
            .order_by_asc(Column::Nombre)
            .all(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("subject listing failed: {e}")))?;

        let rows = asignaturas
            .into_iter()
            .filter_map(|m| {
                let (grupo_nombre, grado) = grupos.get(&m.grupo_id)?.clone();
                let carrera_nombre = carreras.get(&m.carrera_id).cloned()?;
                let carrera_id = m.carrera_id;
                Some(AsignaturaCatalogRow {
                    asignatura: m.into_asignatura(),
                    grupo_nombre,
                    grado,
                    carrera_id,
                    carrera_nombre,
                })
            })
            .collect();

        Ok(rows)
    }

    pub async fn count_asignaturas_for_grupo_impl(&self, grupo_id: i64) -> Result<i64> {
        let count = Asignaturas::find()
            .filter(Column::GrupoId.eq(grupo_id))
            .count(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("subject count failed: {e}")))?;

        Ok(count as i64)
    }

    /// Distinct teachers with at least one subject that has no grade
    /// recorded yet ("actas pendientes").
    pub async fn count_docentes_actas_pendientes_impl(&self, plantel_id: i64) -> Result<i64> {
        use crate::entity::calificaciones::{
            Column as CalificacionColumn, Entity as Calificaciones,
        };

        let grupo_ids: Vec<i64> = Grupos::find()
            .filter(GrupoColumn::PlantelId.eq(plantel_id))
            .select_only()
            .column(GrupoColumn::Id)
            .into_tuple::<i64>()
            .all(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("group query failed: {e}")))?;

        if grupo_ids.is_empty() {
            return Ok(0);
        }

        let asignatura_ids: Vec<i64> = Asignaturas::find()
            .filter(Column::GrupoId.is_in(grupo_ids))
            .select_only()
            .column(Column::Id)
            .into_tuple::<i64>()
            .all(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("subject query failed: {e}")))?;

        if asignatura_ids.is_empty() {
            return Ok(0);
        }

        let graded: HashSet<i64> = Calificaciones::find()
            .filter(CalificacionColumn::AsignaturaId.is_in(asignatura_ids.clone()))
            .select_only()
            .column(CalificacionColumn::AsignaturaId)
            .into_tuple::<i64>()
            .all(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("grade query failed: {e}")))?
            .into_iter()
            .collect();

        let pendientes: Vec<i64> = asignatura_ids
            .into_iter()
            .filter(|id| !graded.contains(id))
            .collect();

        if pendientes.is_empty() {
            return Ok(0);
        }

        let docentes: HashSet<i64> = AsignaturaDocentes::find()
            .filter(AsignaturaDocenteColumn::AsignaturaId.is_in(pendientes))
            .select_only()
            .column(AsignaturaDocenteColumn::DocenteId)
            .into_tuple::<i64>()
            .all(&self.db)
            .await
            .map_err(|e| SgaError::database_operation(format!("assignment query failed: {e}")))?
            .into_iter()
            .collect();

        Ok(docentes.len() as i64)
    }
}
