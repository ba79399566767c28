use serde::{Deserialize, Serialize};

// Roles, stored uppercase as the legacy system did
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,    // superusuario
    Director, // dirección de plantel
    Coord,    // coordinación académica
    Docente,
    Alumno,
    Tutor,
}

impl UserRole {
    pub const ADMIN: &'static str = "ADMIN";
    pub const DIRECTOR: &'static str = "DIRECTOR";
    pub const COORD: &'static str = "COORD";
    pub const DOCENTE: &'static str = "DOCENTE";
    pub const ALUMNO: &'static str = "ALUMNO";
    pub const TUTOR: &'static str = "TUTOR";

    pub fn admin_roles() -> &'static [&'static UserRole] {
        &[&Self::Admin]
    }
    /// Roles that run a campus.
    pub fn direction_roles() -> &'static [&'static UserRole] {
        &[&Self::Admin, &Self::Director]
    }
    /// Administrative staff of a campus.
    pub fn staff_roles() -> &'static [&'static UserRole] {
        &[&Self::Admin, &Self::Director, &Self::Coord]
    }
    /// Anyone allowed to record grades and attendance.
    pub fn teaching_roles() -> &'static [&'static UserRole] {
        &[&Self::Admin, &Self::Director, &Self::Coord, &Self::Docente]
    }
    pub fn all_roles() -> &'static [&'static UserRole] {
        &[
            &Self::Admin,
            &Self::Director,
            &Self::Coord,
            &Self::Docente,
            &Self::Alumno,
            &Self::Tutor,
        ]
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "rol inválido: '{s}'. Roles soportados: ADMIN, DIRECTOR, COORD, DOCENTE, ALUMNO, TUTOR"
            ))
        })
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            UserRole::Admin => Self::ADMIN,
            UserRole::Director => Self::DIRECTOR,
            UserRole::Coord => Self::COORD,
            UserRole::Docente => Self::DOCENTE,
            UserRole::Alumno => Self::ALUMNO,
            UserRole::Tutor => Self::TUTOR,
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::ADMIN => Ok(UserRole::Admin),
            Self::DIRECTOR => Ok(UserRole::Director),
            Self::COORD => Ok(UserRole::Coord),
            Self::DOCENTE => Ok(UserRole::Docente),
            Self::ALUMNO => Ok(UserRole::Alumno),
            Self::TUTOR => Ok(UserRole::Tutor),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

// Enrollment status
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Estatus {
    Activo,
    /// Registered with the temporary password, pending first change.
    Pendiente,
    /// Deregistered; kept for history, may no longer log in.
    Baja,
}

impl<'de> Deserialize<'de> for Estatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "estatus inválido: '{s}'. Soportados: ACTIVO, PENDIENTE, BAJA"
            ))
        })
    }
}

impl std::fmt::Display for Estatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Estatus::Activo => write!(f, "ACTIVO"),
            Estatus::Pendiente => write!(f, "PENDIENTE"),
            Estatus::Baja => write!(f, "BAJA"),
        }
    }
}

impl std::str::FromStr for Estatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVO" => Ok(Estatus::Activo),
            "PENDIENTE" => Ok(Estatus::Pendiente),
            "BAJA" => Ok(Estatus::Baja),
            _ => Err(format!("Invalid estatus: {s}")),
        }
    }
}

// User entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usuario {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub rol: UserRole,
    pub estatus: Estatus,
    pub plantel_id: Option<i64>,
    /// Set only for ALUMNO users.
    pub grupo_id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
    /// Birth date as epoch seconds at midnight UTC.
    pub fecha_nacimiento: Option<i64>,
    pub foto_perfil: Option<String>,
    pub last_login: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Usuario {
    pub fn nombre_completo(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub async fn generate_access_token(&self) -> String {
        match crate::utils::jwt::JwtUtils::generate_access_token(self.id, &self.rol.to_string()) {
            Ok(token) => token,
            Err(e) => {
                tracing::error!("JWT token generation failed: {}", e);
                format!(
                    "fallback_token_{}_{}",
                    self.id,
                    chrono::Utc::now().timestamp()
                )
            }
        }
    }

    pub async fn generate_token_pair(
        &self,
        refresh_token_expiry: Option<chrono::Duration>,
    ) -> Result<crate::utils::jwt::TokenPair, String> {
        crate::utils::jwt::JwtUtils::generate_token_pair(
            self.id,
            &self.rol.to_string(),
            refresh_token_expiry,
        )
        .map_err(|e| format!("token pair generation failed: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trip() {
        for rol in UserRole::all_roles() {
            let parsed: UserRole = rol.to_string().parse().unwrap();
            assert_eq!(&&parsed, rol);
        }
    }

    #[test]
    fn role_rejects_unknown() {
        assert!("PROFESOR".parse::<UserRole>().is_err());
        assert!("admin".parse::<UserRole>().is_err());
    }

    #[test]
    fn staff_roles_exclude_docente() {
        assert!(!UserRole::staff_roles().contains(&&UserRole::Docente));
        assert!(UserRole::teaching_roles().contains(&&UserRole::Docente));
    }

    // Coordinators belong to the staff surface (dashboard, carreras) but
    // not to the direction surface (periodo creation, aulas update).
    #[test]
    fn coord_is_staff_but_not_direction() {
        assert!(UserRole::staff_roles().contains(&&UserRole::Coord));
        assert!(!UserRole::direction_roles().contains(&&UserRole::Coord));
    }

    #[test]
    fn estatus_round_trip() {
        for e in [Estatus::Activo, Estatus::Pendiente, Estatus::Baja] {
            let parsed: Estatus = e.to_string().parse().unwrap();
            assert_eq!(parsed, e);
        }
    }

    #[test]
    fn password_hash_never_serialized() {
        let usuario = Usuario {
            id: 1,
            username: "A0001".to_string(),
            email: "a@b.mx".to_string(),
            password_hash: "secreto".to_string(),
            rol: UserRole::Alumno,
            estatus: Estatus::Activo,
            plantel_id: Some(1),
            grupo_id: Some(4),
            first_name: "Ana".to_string(),
            last_name: "Luna".to_string(),
            telefono: None,
            direccion: None,
            fecha_nacimiento: None,
            foto_perfil: None,
            last_login: None,
            created_at: 0,
            updated_at: 0,
        };
        let json = serde_json::to_string(&usuario).unwrap();
        assert!(!json.contains("secreto"));
    }
}
