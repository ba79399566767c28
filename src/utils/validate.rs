use once_cell::sync::Lazy;
use regex::Regex;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("Invalid username regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

static TELEFONO_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("Invalid telefono regex"));

/// Usernames double as student enrollment numbers (matrícula), so only
/// letters and digits are accepted.
pub fn validate_username(username: &str) -> Result<(), &'static str> {
    if username.len() < 3 || username.len() > 30 {
        return Err("Username length must be between 3 and 30 characters");
    }
    if !USERNAME_RE.is_match(username) {
        return Err("Username must contain only letters and numbers");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

pub fn validate_telefono(telefono: &str) -> Result<(), &'static str> {
    if !TELEFONO_RE.is_match(telefono) {
        return Err("Telefono must be exactly 10 digits");
    }
    Ok(())
}

/// Grades are recorded on the 0.00-10.00 scale.
pub fn validate_nota(nota: f64) -> Result<(), &'static str> {
    if !nota.is_finite() {
        return Err("Nota must be a finite number");
    }
    if !(0.0..=10.0).contains(&nota) {
        return Err("Nota must be between 0.00 and 10.00");
    }
    Ok(())
}

pub fn validate_grado(grado: i32) -> Result<(), &'static str> {
    if !(1..=12).contains(&grado) {
        return Err("Grado must be between 1 and 12");
    }
    Ok(())
}

pub fn validate_capacidad(capacidad: i32) -> Result<(), &'static str> {
    if capacidad < 0 {
        return Err("Capacidad must not be negative");
    }
    Ok(())
}

/// Profile photo extension check; content is separately verified against
/// its magic bytes.
pub fn validate_foto_extension(filename: &str) -> Result<(), &'static str> {
    let extension = std::path::Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "jpg" | "jpeg" | "png" => Ok(()),
        _ => Err("Only JPG and PNG photos are allowed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_username() {
        assert!(validate_username("A2024001").is_ok());
        assert!(validate_username("docente01").is_ok());
    }

    #[test]
    fn test_username_rejects_special_characters() {
        assert!(validate_username("user<script>").is_err());
        assert!(validate_username("user name").is_err());
        assert!(validate_username("user_1").is_err());
    }

    #[test]
    fn test_username_length() {
        assert!(validate_username("ab").is_err());
        assert!(validate_username(&"a".repeat(31)).is_err());
    }

    #[test]
    fn test_email() {
        assert!(validate_email("alumno@plantel.edu.mx").is_ok());
        assert!(validate_email("not-an-email").is_err());
    }

    #[test]
    fn test_telefono() {
        assert!(validate_telefono("5512345678").is_ok());
        assert!(validate_telefono("55123").is_err());
        assert!(validate_telefono("55-12-34-56").is_err());
    }

    #[test]
    fn test_nota_range() {
        assert!(validate_nota(0.0).is_ok());
        assert!(validate_nota(10.0).is_ok());
        assert!(validate_nota(5.9).is_ok());
        assert!(validate_nota(-0.1).is_err());
        assert!(validate_nota(10.01).is_err());
        assert!(validate_nota(f64::NAN).is_err());
    }

    #[test]
    fn test_foto_extension() {
        assert!(validate_foto_extension("perfil.jpg").is_ok());
        assert!(validate_foto_extension("perfil.JPEG").is_ok());
        assert!(validate_foto_extension("perfil.png").is_ok());
        assert!(validate_foto_extension("perfil.gif").is_err());
        assert!(validate_foto_extension("perfil.php").is_err());
        assert!(validate_foto_extension("perfil").is_err());
    }
}
