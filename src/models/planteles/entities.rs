use serde::{Deserialize, Serialize};

/// Educational tier of a campus. Drives theme resolution and per-tier field
/// visibility (credits only exist for SUPERIOR).
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NivelEducativo {
    Basica,
    Superior,
}

impl<'de> Deserialize<'de> for NivelEducativo {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "nivel educativo inválido: '{s}'. Soportados: BASICA, SUPERIOR"
            ))
        })
    }
}

impl std::fmt::Display for NivelEducativo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NivelEducativo::Basica => write!(f, "BASICA"),
            NivelEducativo::Superior => write!(f, "SUPERIOR"),
        }
    }
}

impl std::str::FromStr for NivelEducativo {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BASICA" => Ok(NivelEducativo::Basica),
            "SUPERIOR" => Ok(NivelEducativo::Superior),
            _ => Err(format!("Invalid nivel educativo: {s}")),
        }
    }
}

// Campus entity, the root tenant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plantel {
    pub id: i64,
    pub nombre: String,
    pub direccion: Option<String>,
    pub nivel_educativo: NivelEducativo,
    pub color_tema: String,
    pub logo_url: Option<String>,
    /// Total classrooms; must stay >= the campus's occupied group count.
    pub total_aulas: i32,
    pub created_at: i64,
}
