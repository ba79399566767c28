/// Business status codes carried in the `code` field of [`super::response::ApiResponse`].
///
/// Codes below 1000 mirror the HTTP status of the response; codes at and
/// above 1000 identify a specific business failure within a domain block
/// (1xxx users/auth, 2xxx planteles, 3xxx grupos/periodos/carreras,
/// 4xxx asignaturas, 5xxx calificaciones/asistencias, 6xxx tutores,
/// 7xxx uploads).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 200,
    BadRequest = 400,
    Unauthorized = 401,
    Forbidden = 403,
    NotFound = 404,
    Conflict = 409,
    InternalServerError = 500,

    AuthFailed = 1001,
    UserNameInvalid = 1002,
    UserEmailInvalid = 1003,
    UserAlreadyExists = 1004,
    UserNotFound = 1005,
    UserCreationFailed = 1006,
    PasswordPolicyViolation = 1007,

    PlantelNotFound = 2001,
    AulasReductionRejected = 2002,

    GrupoNotFound = 3001,
    GrupoCreationFailed = 3002,
    PromotionFailed = 3003,
    PeriodoNotFound = 3004,
    CarreraNotFound = 3005,

    AsignaturaCreationFailed = 4001,
    AsignaturaNotFound = 4002,

    NotaOutOfRange = 5001,
    CalificacionCreationFailed = 5002,
    AsistenciaDuplicate = 5003,
    AsistenciaCreationFailed = 5004,

    TutorCreationFailed = 6001,

    FileTypeNotAllowed = 7001,
    FileSizeExceeded = 7002,
    FileUploadFailed = 7003,
    MultifileUploadNotAllowed = 7004,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_mirroring_codes() {
        assert_eq!(ErrorCode::Success as i32, 200);
        assert_eq!(ErrorCode::NotFound as i32, 404);
        assert_eq!(ErrorCode::Conflict as i32, 409);
    }

    #[test]
    fn business_codes_are_namespaced() {
        assert_eq!(ErrorCode::AulasReductionRejected as i32, 2002);
        assert_eq!(ErrorCode::AsistenciaDuplicate as i32, 5003);
    }
}
