use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use crate::entity::ticket::{Model as TicketModel, TicketCategory, TicketPriority, TicketStatus};
use crate::model::global_error::{AppError, ValidationFieldError};

/// Valores del filtro que equivalen a "sin filtro".
const ALL_STATUSES: [&str; 2] = ["Todos", "All"];

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketCreateRequest {
    #[serde(default)]
    pub requester: String,
    #[serde(default)]
    pub email: String,
    pub category: TicketCategory,
    pub priority: TicketPriority,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub assigned_technician: Option<String>, // None => "Sin asignar"
}

impl TicketCreateRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        let errors: Vec<ValidationFieldError> = [
            ("requester", &self.requester),
            ("email", &self.email),
            ("title", &self.title),
            ("description", &self.description),
        ]
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| ValidationFieldError::required(field))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::ValidationError(errors))
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketUpdateRequest {
    pub status: TicketStatus,
    pub resolution: Option<String>,
    pub assigned_technician: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct TicketListQuery {
    /// Estado exacto ("Abierto", "En_Proceso", ...). "Todos" o vacío devuelve todos.
    pub status: Option<String>,
}

impl TicketListQuery {
    pub fn status_filter(&self) -> Result<Option<TicketStatus>, AppError> {
        let Some(raw) = self.status.as_deref().map(str::trim) else {
            return Ok(None);
        };

        if raw.is_empty() || ALL_STATUSES.contains(&raw) {
            return Ok(None);
        }

        TicketStatus::from_label(raw)
            .map(Some)
            .ok_or_else(|| AppError::ValidationError(vec![ValidationFieldError {
                field: "status".to_string(),
                message: format!("Estado desconocido: {}", raw),
            }]))
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketResponse {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub requester: String,
    pub email: String,
    pub category: TicketCategory,
    pub priority: TicketPriority,
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    pub assigned_technician: String,
    pub resolution: String,
    pub closed_at: Option<DateTime<Utc>>,
    pub site: String,
}

impl From<TicketModel> for TicketResponse {
    fn from(model: TicketModel) -> Self {
        Self {
            id: model.id,
            created_at: model.created_at,
            requester: model.requester,
            email: model.email,
            category: model.category,
            priority: model.priority,
            title: model.title,
            description: model.description,
            status: model.status,
            assigned_technician: model.assigned_technician,
            resolution: model.resolution,
            closed_at: model.closed_at,
            site: model.site,
        }
    }
}
