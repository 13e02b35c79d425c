use sea_orm::FromQueryResult;
use serde::Serialize;
use utoipa::ToSchema;
use crate::model::inventory::InventorySummaryRow;

/// Resultado de `COUNT(*) AS total`.
#[derive(Debug, Clone, Copy, PartialEq, FromQueryResult)]
pub struct TotalRow {
    pub total: i64,
}

/// Una fila de un conteo agrupado (estado, categoría o técnico).
#[derive(Debug, Clone, PartialEq, FromQueryResult, Serialize, ToSchema)]
pub struct CountRow {
    pub label: String,
    pub total: i64,
}

/// Métricas del dashboard. Las claves JSON son los nombres de métrica
/// que consumen los gráficos.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TicketMetrics {
    pub total_tickets: i64,
    pub tickets_abiertos: i64,
    pub tickets_cerrados_hoy: i64,
    pub tickets_por_estado: Vec<CountRow>,
    pub tickets_por_categoria: Vec<CountRow>,
    pub tickets_por_tecnico: Vec<CountRow>,
}

impl TicketMetrics {
    /// Porcentaje de tickets que ya no están abiertos, con un decimal.
    pub fn resolution_rate(&self) -> f64 {
        if self.total_tickets <= 0 {
            return 0.0;
        }
        let resolved = (self.total_tickets - self.tickets_abiertos) as f64;
        (resolved / self.total_tickets as f64 * 1000.0).round() / 10.0
    }
}

/// `metrics` conserva las claves en snake_case (`total_tickets`,
/// `tickets_abiertos`, ...): son los nombres de métrica del dashboard.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub metrics: TicketMetrics,
    pub resolution_rate: f64,
}

impl From<TicketMetrics> for DashboardResponse {
    fn from(metrics: TicketMetrics) -> Self {
        Self {
            resolution_rate: metrics.resolution_rate(),
            metrics,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummaryResponse {
    pub tickets_by_status: Vec<CountRow>,
    pub inventory_by_type_and_status: Vec<InventorySummaryRow>,
}
