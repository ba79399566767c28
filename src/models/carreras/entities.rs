use serde::{Deserialize, Serialize};

// Academic level of a program; subject replication matches on it.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NivelAcademico {
    Secundaria,
    Preparatoria,
    Universidad,
}

impl<'de> Deserialize<'de> for NivelAcademico {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "nivel académico inválido: '{s}'. Soportados: SECUNDARIA, PREPARATORIA, UNIVERSIDAD"
            ))
        })
    }
}

impl std::fmt::Display for NivelAcademico {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NivelAcademico::Secundaria => write!(f, "SECUNDARIA"),
            NivelAcademico::Preparatoria => write!(f, "PREPARATORIA"),
            NivelAcademico::Universidad => write!(f, "UNIVERSIDAD"),
        }
    }
}

impl std::str::FromStr for NivelAcademico {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SECUNDARIA" => Ok(NivelAcademico::Secundaria),
            "PREPARATORIA" => Ok(NivelAcademico::Preparatoria),
            "UNIVERSIDAD" => Ok(NivelAcademico::Universidad),
            _ => Err(format!("Invalid nivel academico: {s}")),
        }
    }
}

// Academic program, campus-scoped
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Carrera {
    pub id: i64,
    pub plantel_id: i64,
    pub nombre: String,
    pub nivel: NivelAcademico,
    /// Accreditation code (RVOE), university programs only.
    pub clave_rvoe: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nivel_round_trip() {
        for nivel in [
            NivelAcademico::Secundaria,
            NivelAcademico::Preparatoria,
            NivelAcademico::Universidad,
        ] {
            let parsed: NivelAcademico = nivel.to_string().parse().unwrap();
            assert_eq!(parsed, nivel);
        }
    }
}
