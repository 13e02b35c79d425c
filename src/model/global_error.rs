use actix_web::{HttpResponse, ResponseError};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use thiserror::Error;
use std::fmt;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // 400 BAD REQUEST
    ValidationError,
    InvalidRequest,

    // 404 NOT FOUND
    TicketNotFound,

    // 409 CONFLICT
    ConstraintViolation,

    // 500 SERVER ERRORS
    DatabaseError,
    ExportFailed,
    InternalError,
}

impl ErrorCode {
    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "Complete todos los campos obligatorios (*)",
            ErrorCode::InvalidRequest => "La solicitud no tiene un formato válido",

            ErrorCode::TicketNotFound => "El ticket solicitado no existe",

            ErrorCode::ConstraintViolation => "Ya existe un registro con el mismo código o número de serie",

            ErrorCode::DatabaseError => "Error en la consulta a la base de datos",
            ErrorCode::ExportFailed => "No se pudo generar el archivo de exportación",
            ErrorCode::InternalError => "Error interno del servidor",
        }
    }

    pub fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            ErrorCode::ValidationError |
            ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,

            ErrorCode::TicketNotFound => StatusCode::NOT_FOUND,

            ErrorCode::ConstraintViolation => StatusCode::CONFLICT,

            ErrorCode::DatabaseError |
            ErrorCode::ExportFailed |
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ValidationFieldError {
    pub field: String,
    pub message: String,
}

impl ValidationFieldError {
    pub fn required(field: &str) -> Self {
        Self {
            field: field.to_string(),
            message: format!("El campo '{}' es obligatorio", field),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    ApiError(ErrorCode, Option<String>),

    #[error("{}", ErrorCode::ValidationError)]
    ValidationError(Vec<ValidationFieldError>),
}

impl AppError {
    pub fn new(code: ErrorCode) -> Self {
        AppError::ApiError(code, None)
    }

    pub fn with_detail(code: ErrorCode, detail: String) -> Self {
        AppError::ApiError(code, Some(detail))
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::ApiError(code, _) => *code,
            AppError::ValidationError(_) => ErrorCode::ValidationError,
        }
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                tracing::warn!("Violación de restricción única: {}", detail);
                AppError::with_detail(ErrorCode::ConstraintViolation, detail)
            }
            _ => {
                tracing::error!("Error en la consulta: {}", err);
                AppError::new(ErrorCode::DatabaseError)
            }
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    code: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<ValidationFieldError>,
}

impl ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        self.code().status_code()
    }

    fn error_response(&self) -> HttpResponse {
        let code = self.code();
        let (detail, errors) = match self {
            AppError::ApiError(_, detail) => (detail.clone(), Vec::new()),
            AppError::ValidationError(errors) => (None, errors.clone()),
        };

        let response = ErrorResponse {
            code: format!("{:?}", code),
            message: code.message().to_string(),
            detail,
            errors,
        };

        HttpResponse::build(code.status_code())
            .json(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn unique_violation_maps_to_conflict() {
        let err = DbErr::Custom("other".to_string());
        assert_eq!(AppError::from(err).code(), ErrorCode::DatabaseError);

        let conflict = AppError::with_detail(ErrorCode::ConstraintViolation, "codigo_equipo".to_string());
        assert_eq!(conflict.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn validation_error_lists_missing_fields() {
        let err = AppError::ValidationError(vec![ValidationFieldError::required("titulo")]);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), ErrorCode::ValidationError.message());
    }
}
