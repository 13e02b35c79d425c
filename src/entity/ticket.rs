use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveEnum, Iterable, Set};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use crate::model::ticket::TicketCreateRequest;

/// Valor guardado cuando el ticket no tiene técnico. Nunca se usa NULL.
pub const UNASSIGNED: &str = "Sin asignar";
pub const DEFAULT_SITE: &str = "Lima Sur";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tickets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "fecha_creacion")]
    pub created_at: DateTime<Utc>,
    #[sea_orm(column_name = "usuario_solicitante")]
    pub requester: String,
    pub email: String,
    #[sea_orm(column_name = "categoria")]
    pub category: TicketCategory,
    #[sea_orm(column_name = "prioridad")]
    pub priority: TicketPriority,
    #[sea_orm(column_name = "titulo")]
    pub title: String,
    #[sea_orm(column_name = "descripcion")]
    pub description: String,
    #[sea_orm(column_name = "estado")]
    pub status: TicketStatus,
    #[sea_orm(column_name = "tecnico_asignado")]
    pub assigned_technician: String,
    #[sea_orm(column_name = "solucion")]
    pub resolution: String,
    #[sea_orm(column_name = "fecha_cierre")]
    pub closed_at: Option<DateTime<Utc>>,
    #[sea_orm(column_name = "sede")]
    pub site: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum TicketCategory {
    #[sea_orm(string_value = "Hardware")]
    Hardware,
    #[sea_orm(string_value = "Software")]
    Software,
    #[serde(rename = "Red")]
    #[sea_orm(string_value = "Red")]
    Network,
    #[serde(rename = "Cuenta_Usuario")]
    #[sea_orm(string_value = "Cuenta_Usuario")]
    UserAccount,
    #[serde(rename = "Impresora")]
    #[sea_orm(string_value = "Impresora")]
    Printer,
    #[serde(rename = "Otro")]
    #[sea_orm(string_value = "Otro")]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum TicketPriority {
    #[serde(rename = "Baja")]
    #[sea_orm(string_value = "Baja")]
    Low,
    #[serde(rename = "Media")]
    #[sea_orm(string_value = "Media")]
    Medium,
    #[serde(rename = "Alta")]
    #[sea_orm(string_value = "Alta")]
    High,
    #[serde(rename = "Crítica")]
    #[sea_orm(string_value = "Crítica")]
    Critical,
}

/// No hay grafo de transiciones: cualquier estado puede pasar a cualquier otro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum TicketStatus {
    #[serde(rename = "Abierto")]
    #[sea_orm(string_value = "Abierto")]
    Open,
    #[serde(rename = "En_Proceso")]
    #[sea_orm(string_value = "En_Proceso")]
    InProgress,
    #[serde(rename = "Pendiente_Usuario")]
    #[sea_orm(string_value = "Pendiente_Usuario")]
    PendingUser,
    #[serde(rename = "Resuelto")]
    #[sea_orm(string_value = "Resuelto")]
    Resolved,
    #[serde(rename = "Cerrado")]
    #[sea_orm(string_value = "Cerrado")]
    Closed,
}

impl TicketStatus {
    /// Al pasar a este estado se registra la fecha de cierre.
    pub fn is_closing(&self) -> bool {
        matches!(self, TicketStatus::Resolved | TicketStatus::Closed)
    }

    /// Estados que cuentan como "abiertos" en el dashboard.
    pub fn is_active(&self) -> bool {
        matches!(self, TicketStatus::Open | TicketStatus::InProgress)
    }

    /// Busca el estado a partir de la etiqueta guardada ("Abierto", ...).
    pub fn from_label(label: &str) -> Option<Self> {
        Self::iter().find(|status| status.to_value() == label)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C: ConnectionTrait>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr> {
        if insert {
            self.created_at = Set(Utc::now());
        }
        Ok(self)
    }
}

impl ActiveModel {
    pub fn from_request(request: &TicketCreateRequest) -> Self {
        let technician = request
            .assigned_technician
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(UNASSIGNED);

        Self {
            requester: Set(request.requester.trim().to_string()),
            email: Set(request.email.trim().to_string()),
            category: Set(request.category),
            priority: Set(request.priority),
            title: Set(request.title.trim().to_string()),
            description: Set(request.description.trim().to_string()),
            status: Set(TicketStatus::Open),
            assigned_technician: Set(technician.to_string()),
            resolution: Set(String::new()),
            closed_at: Set(None),
            site: Set(DEFAULT_SITE.to_string()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels_round_trip_through_from_label() {
        for status in TicketStatus::iter() {
            assert_eq!(TicketStatus::from_label(&status.to_value()), Some(status));
        }
        assert_eq!(TicketStatus::from_label("Todos"), None);
        assert_eq!(TicketStatus::from_label("abierto"), None);
    }

    #[test]
    fn only_resolved_and_closed_are_closing() {
        let closing: Vec<_> = TicketStatus::iter().filter(TicketStatus::is_closing).collect();
        assert_eq!(closing, vec![TicketStatus::Resolved, TicketStatus::Closed]);
    }

    #[test]
    fn blank_technician_falls_back_to_unassigned() {
        let request = TicketCreateRequest {
            requester: "Prof. Juan Pérez".to_string(),
            email: "juan.perez@utp.edu.pe".to_string(),
            category: TicketCategory::Network,
            priority: TicketPriority::Critical,
            title: "Sin red".to_string(),
            description: "Aula 305 sin conexión".to_string(),
            assigned_technician: Some("   ".to_string()),
        };

        let model = ActiveModel::from_request(&request);
        assert_eq!(model.assigned_technician, Set(UNASSIGNED.to_string()));
        assert_eq!(model.status, Set(TicketStatus::Open));
        assert_eq!(model.site, Set(DEFAULT_SITE.to_string()));
    }
}
