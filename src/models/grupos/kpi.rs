//! Group KPI arithmetic.
//!
//! Pure functions over aggregates supplied by storage; recomputed on every
//! read, never cached. Division by zero always yields 0, never an error.

use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GrupoKpis {
    pub alumnos_inscritos: i64,
    pub ocupacion_pct: f64,
    pub promedio_general: f64,
    pub asistencia_mensual: i64,
}

pub fn ocupacion_pct(alumnos_inscritos: i64, capacidad_maxima: i32) -> f64 {
    if capacidad_maxima <= 0 {
        return 0.0;
    }
    alumnos_inscritos as f64 / capacidad_maxima as f64 * 100.0
}

/// Mean over every grade of every subject of the group, rounded to one
/// decimal. 0.0 with no grades.
pub fn promedio_general(notas: &[f64]) -> f64 {
    if notas.is_empty() {
        return 0.0;
    }
    let mean = notas.iter().sum::<f64>() / notas.len() as f64;
    (mean * 10.0).round() / 10.0
}

/// Attendance rate for the current month, truncated to integer percent.
pub fn asistencia_mensual(presentes: i64, total: i64) -> i64 {
    if total <= 0 {
        return 0;
    }
    presentes * 100 / total
}

/// Human-readable alerts for a group: full classroom (at or over
/// capacity), students at risk, and no subjects assigned yet.
pub fn alertas_para_grupo(
    alumnos_inscritos: i64,
    capacidad_maxima: i32,
    en_riesgo: i64,
    asignaturas: i64,
) -> Vec<String> {
    let mut alertas = Vec::new();
    if capacidad_maxima > 0 && alumnos_inscritos >= capacidad_maxima as i64 {
        alertas.push(format!(
            "Aula llena: {alumnos_inscritos} alumnos inscritos con capacidad para {capacidad_maxima}"
        ));
    }
    if en_riesgo > 0 {
        alertas.push(format!("{en_riesgo} alumno(s) en riesgo académico en este grupo"));
    }
    if asignaturas == 0 {
        alertas.push("Falta asignar materias a este grupo".to_string());
    }
    alertas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ocupacion_zero_capacity_is_zero() {
        assert_eq!(ocupacion_pct(15, 0), 0.0);
    }

    #[test]
    fn ocupacion_basic() {
        assert_eq!(ocupacion_pct(15, 30), 50.0);
        assert_eq!(ocupacion_pct(33, 30), 110.0);
    }

    #[test]
    fn promedio_empty_is_zero() {
        assert_eq!(promedio_general(&[]), 0.0);
    }

    #[test]
    fn promedio_rounds_to_one_decimal() {
        assert_eq!(promedio_general(&[7.0, 8.0, 8.5]), 7.8);
        assert_eq!(promedio_general(&[6.0, 6.0, 7.0]), 6.3);
    }

    #[test]
    fn asistencia_no_rows_is_zero() {
        assert_eq!(asistencia_mensual(0, 0), 0);
    }

    #[test]
    fn asistencia_truncates() {
        assert_eq!(asistencia_mensual(2, 3), 66);
        assert_eq!(asistencia_mensual(1, 1), 100);
    }

    #[test]
    fn grupo_exactly_full_raises_alert() {
        let alertas = alertas_para_grupo(30, 30, 0, 4);
        assert_eq!(alertas.len(), 1);
        assert!(alertas[0].starts_with("Aula llena"));
    }

    #[test]
    fn grupo_below_capacity_with_subjects_has_no_alerts() {
        assert!(alertas_para_grupo(29, 30, 0, 4).is_empty());
    }

    #[test]
    fn grupo_without_subjects_raises_alert() {
        let alertas = alertas_para_grupo(10, 30, 0, 0);
        assert_eq!(alertas, vec!["Falta asignar materias a este grupo".to_string()]);
    }

    #[test]
    fn grupo_with_risk_raises_alert() {
        let alertas = alertas_para_grupo(10, 30, 3, 2);
        assert_eq!(alertas, vec!["3 alumno(s) en riesgo académico en este grupo".to_string()]);
    }
}
