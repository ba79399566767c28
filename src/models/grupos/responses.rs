use serde::Serialize;

use super::entities::Grupo;
use super::kpi::GrupoKpis;
use crate::models::carreras::entities::{Carrera, NivelAcademico};
use crate::models::planteles::theme::CampusTheme;
use crate::models::users::entities::Usuario;

#[derive(Debug, Serialize)]
pub struct GrupoConKpis {
    pub grupo: Grupo,
    pub kpis: GrupoKpis,
    pub docentes: Vec<Usuario>,
}

// Groups are rendered in sections: by carrera for SUPERIOR campuses, by
// nivel for BASICA ones. The section title carries whichever applies.
#[derive(Debug, Serialize)]
pub struct GrupoSeccion {
    pub titulo: String,
    pub grupos: Vec<GrupoConKpis>,
}

/// Section title for the group overview. SUPERIOR campuses section per
/// program; básica ones per the program's academic level, so a secundaria
/// and a preparatoria group at the same grade land in different sections.
pub fn seccion_titulo(superior: bool, carrera: Option<&Carrera>) -> String {
    match (superior, carrera) {
        (true, Some(carrera)) => carrera.nombre.clone(),
        (true, None) => "Sin carrera".to_string(),
        (false, Some(carrera)) => match carrera.nivel {
            NivelAcademico::Secundaria => "Secundaria".to_string(),
            NivelAcademico::Preparatoria => "Preparatoria".to_string(),
            NivelAcademico::Universidad => "Universidad".to_string(),
        },
        (false, None) => "Sin nivel".to_string(),
    }
}

#[derive(Debug, Serialize)]
pub struct AulasInfo {
    pub total_aulas: i32,
    pub aulas_ocupadas: i64,
    pub aulas_disponibles: i64,
    /// Occupancy as a truncated percentage; 0 when no classrooms exist.
    pub porcentaje_ocupacion: i64,
    pub estado: &'static str,
}

impl AulasInfo {
    pub fn calcular(total_aulas: i32, aulas_ocupadas: i64) -> Self {
        let porcentaje_ocupacion = if total_aulas > 0 {
            aulas_ocupadas * 100 / total_aulas as i64
        } else {
            0
        };
        let estado = if total_aulas > 0 && aulas_ocupadas >= total_aulas as i64 {
            "CRÍTICO"
        } else {
            "NORMAL"
        };
        AulasInfo {
            total_aulas,
            aulas_ocupadas,
            aulas_disponibles: (total_aulas as i64 - aulas_ocupadas).max(0),
            porcentaje_ocupacion,
            estado,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GrupoListResponse {
    pub secciones: Vec<GrupoSeccion>,
    pub aulas: AulasInfo,
    pub theme: CampusTheme,
}

#[derive(Debug, Serialize)]
pub struct AlumnoEnRiesgo {
    pub usuario: Usuario,
    pub peor_nota: f64,
}

#[derive(Debug, Serialize)]
pub struct GrupoDetailResponse {
    pub grupo: Grupo,
    pub kpis: GrupoKpis,
    pub docentes: Vec<Usuario>,
    pub alumnos: Vec<Usuario>,
    pub en_riesgo_total: i64,
    pub en_riesgo: Vec<AlumnoEnRiesgo>,
    /// Human-readable alerts (full classroom, students at risk, missing
    /// subject assignments).
    pub alertas: Vec<String>,
    pub theme: CampusTheme,
}

#[derive(Debug, Serialize)]
pub struct PromocionResponse {
    pub grupos_promovidos: u64,
    pub periodo_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carrera(nombre: &str, nivel: NivelAcademico) -> Carrera {
        Carrera {
            id: 1,
            plantel_id: 1,
            nombre: nombre.to_string(),
            nivel,
            clave_rvoe: None,
        }
    }

    #[test]
    fn basica_sections_by_level_not_grade() {
        let sec = carrera("Secundaria General", NivelAcademico::Secundaria);
        let prepa = carrera("Bachillerato", NivelAcademico::Preparatoria);
        assert_eq!(seccion_titulo(false, Some(&sec)), "Secundaria");
        assert_eq!(seccion_titulo(false, Some(&prepa)), "Preparatoria");
        assert_ne!(
            seccion_titulo(false, Some(&sec)),
            seccion_titulo(false, Some(&prepa))
        );
    }

    #[test]
    fn superior_sections_by_program_name() {
        let derecho = carrera("Derecho", NivelAcademico::Universidad);
        assert_eq!(seccion_titulo(true, Some(&derecho)), "Derecho");
        assert_eq!(seccion_titulo(true, None), "Sin carrera");
    }

    #[test]
    fn basica_without_program_gets_fallback_section() {
        assert_eq!(seccion_titulo(false, None), "Sin nivel");
    }

    #[test]
    fn aulas_full_campus_is_critical() {
        let info = AulasInfo::calcular(18, 18);
        assert_eq!(info.porcentaje_ocupacion, 100);
        assert_eq!(info.estado, "CRÍTICO");
        assert_eq!(info.aulas_disponibles, 0);
    }

    #[test]
    fn aulas_partial_occupancy_is_normal() {
        let info = AulasInfo::calcular(20, 5);
        assert_eq!(info.porcentaje_ocupacion, 25);
        assert_eq!(info.estado, "NORMAL");
        assert_eq!(info.aulas_disponibles, 15);
    }

    #[test]
    fn aulas_zero_total_does_not_divide() {
        let info = AulasInfo::calcular(0, 0);
        assert_eq!(info.porcentaje_ocupacion, 0);
        assert_eq!(info.estado, "NORMAL");
    }
}
