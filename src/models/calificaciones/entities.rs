use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Grade below which a student counts as at risk.
pub const NOTA_RIESGO: f64 = 6.0;

/// Collapses failing-grade rows to one entry per student carrying their
/// worst grade. The at-risk count is the size of the result, so a student
/// with several failing grades still counts once.
pub fn peores_por_alumno(rows: impl IntoIterator<Item = (i64, f64)>) -> HashMap<i64, f64> {
    let mut peores: HashMap<i64, f64> = HashMap::new();
    for (alumno_id, nota) in rows {
        peores
            .entry(alumno_id)
            .and_modify(|peor| *peor = peor.min(nota))
            .or_insert(nota);
    }
    peores
}

// One grading event. Multiple rows per student/subject accumulate and are
// averaged; there is no uniqueness constraint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Calificacion {
    pub id: i64,
    pub alumno_id: i64,
    pub asignatura_id: i64,
    pub nota: f64,
    pub fecha: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_with_several_failing_grades_counts_once() {
        let peores = peores_por_alumno(vec![(7, 5.5), (7, 3.0), (7, 5.9), (9, 4.0)]);
        assert_eq!(peores.len(), 2);
        assert_eq!(peores[&7], 3.0);
        assert_eq!(peores[&9], 4.0);
    }

    #[test]
    fn no_failing_rows_yields_empty() {
        assert!(peores_por_alumno(Vec::new()).is_empty());
    }
}
