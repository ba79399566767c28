//! Campus theme resolution.
//!
//! One pure function mapping a campus to the vocabulary and color token the
//! external renderer substitutes into the shell. The legacy system derived
//! the university tier from a hardcoded campus id and re-implemented the
//! mapping in four places; here the tier is the campus's own
//! `nivel_educativo` and the mapping lives only here.

use serde::Serialize;

use super::entities::{NivelEducativo, Plantel};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ThemeLabels {
    pub docente: &'static str,
    pub docentes: &'static str,
    pub alumnos: &'static str,
    pub grupo: &'static str,
    pub grupos: &'static str,
    pub grado: &'static str,
    pub seccion: &'static str,
    pub nivel: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CampusTheme {
    pub color: &'static str,
    pub hex_color: &'static str,
    /// Credits are a university-tier concept; the renderer hides the
    /// column entirely on básica campuses.
    pub mostrar_creditos: bool,
    pub labels: ThemeLabels,
}

const SUPERIOR_THEME: CampusTheme = CampusTheme {
    color: "purple",
    hex_color: "#9333ea",
    mostrar_creditos: true,
    labels: ThemeLabels {
        docente: "Catedrático",
        docentes: "Catedráticos",
        alumnos: "Universitarios",
        grupo: "Facultad/Carrera",
        grupos: "Facultades",
        grado: "Semestre",
        seccion: "Carrera",
        nivel: "Nivel Superior",
    },
};

const BASICA_THEME: CampusTheme = CampusTheme {
    color: "blue",
    hex_color: "#2563eb",
    mostrar_creditos: false,
    labels: ThemeLabels {
        docente: "Docente",
        docentes: "Docentes",
        alumnos: "Alumnos",
        grupo: "Grupo Escolar",
        grupos: "Grupos",
        grado: "Grado Escolar",
        seccion: "Sección",
        nivel: "Nivel Básico",
    },
};

impl CampusTheme {
    /// Resolves the theme for a campus. Users without a campus (orphaned or
    /// superusers) get the default basic theme.
    pub fn resolve(plantel: Option<&Plantel>) -> CampusTheme {
        match plantel {
            Some(p) if p.nivel_educativo == NivelEducativo::Superior => SUPERIOR_THEME,
            _ => BASICA_THEME,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plantel(nivel: NivelEducativo) -> Plantel {
        Plantel {
            id: 7,
            nombre: "Campus Centro".to_string(),
            direccion: None,
            nivel_educativo: nivel,
            color_tema: "blue".to_string(),
            logo_url: None,
            total_aulas: 20,
            created_at: 0,
        }
    }

    #[test]
    fn superior_gets_university_vocabulary() {
        let theme = CampusTheme::resolve(Some(&plantel(NivelEducativo::Superior)));
        assert_eq!(theme.color, "purple");
        assert_eq!(theme.hex_color, "#9333ea");
        assert_eq!(theme.labels.docente, "Catedrático");
        assert_eq!(theme.labels.alumnos, "Universitarios");
        assert_eq!(theme.labels.grupos, "Facultades");
        assert_eq!(theme.labels.grado, "Semestre");
        assert!(theme.mostrar_creditos);
    }

    #[test]
    fn basica_gets_default_vocabulary() {
        let theme = CampusTheme::resolve(Some(&plantel(NivelEducativo::Basica)));
        assert_eq!(theme.color, "blue");
        assert_eq!(theme.hex_color, "#2563eb");
        assert_eq!(theme.labels.docentes, "Docentes");
        assert_eq!(theme.labels.nivel, "Nivel Básico");
        assert!(!theme.mostrar_creditos);
    }

    #[test]
    fn no_campus_falls_back_to_basica() {
        let theme = CampusTheme::resolve(None);
        assert_eq!(theme, CampusTheme::resolve(Some(&plantel(NivelEducativo::Basica))));
    }

    #[test]
    fn tier_not_tied_to_campus_id() {
        // Any campus id resolves by its own tier.
        let mut p = plantel(NivelEducativo::Superior);
        p.id = 99;
        assert_eq!(CampusTheme::resolve(Some(&p)).color, "purple");
    }
}
