use chrono::{Days, NaiveDate, Utc};
use sea_orm::{ActiveEnum, ConnectionTrait, Iterable, Value};
use tracing::instrument;
use crate::db;
use crate::entity::ticket::{TicketStatus, UNASSIGNED};
use crate::model::global_error::{AppError, ErrorCode};
use crate::model::metrics::{CountRow, DashboardResponse, ReportSummaryResponse, TicketMetrics, TotalRow};
use crate::service::inventory::inventory_summary;

const COUNT_BY_STATUS: &str =
    "SELECT estado AS label, COUNT(*) AS total FROM tickets \
     GROUP BY estado ORDER BY total DESC, label ASC";

const COUNT_BY_CATEGORY: &str =
    "SELECT categoria AS label, COUNT(*) AS total FROM tickets \
     GROUP BY categoria ORDER BY total DESC, label ASC";

const COUNT_BY_TECHNICIAN: &str =
    "SELECT tecnico_asignado AS label, COUNT(*) AS total FROM tickets \
     WHERE tecnico_asignado != ? \
     GROUP BY tecnico_asignado ORDER BY total DESC, label ASC";

/// Métricas del dashboard calculadas sobre el día actual (UTC).
pub async fn compute_metrics<C: ConnectionTrait>(db: &C) -> Result<TicketMetrics, AppError> {
    compute_metrics_on(db, Utc::now().date_naive()).await
}

/// Igual que [`compute_metrics`], pero `tickets_cerrados_hoy` cuenta los
/// cierres de `day`. No hay caché: cada llamada consulta la base de datos.
#[instrument(skip(db))]
pub async fn compute_metrics_on<C: ConnectionTrait>(
    db: &C,
    day: NaiveDate,
) -> Result<TicketMetrics, AppError> {
    let total_tickets = scalar(db, "SELECT COUNT(*) AS total FROM tickets", Vec::new()).await?;

    let active = statuses_where(TicketStatus::is_active);
    let tickets_abiertos = scalar(
        db,
        &format!("SELECT COUNT(*) AS total FROM tickets WHERE estado IN ({})", placeholders(active.len())),
        active,
    ).await?;

    let start = day
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| AppError::new(ErrorCode::InternalError))?
        .and_utc();
    let end = start
        .checked_add_days(Days::new(1))
        .ok_or_else(|| AppError::new(ErrorCode::InternalError))?;
    let closing = statuses_where(TicketStatus::is_closing);
    let mut values: Vec<Value> = vec![start.into(), end.into()];
    let closing_placeholders = placeholders(closing.len());
    values.extend(closing);
    let tickets_cerrados_hoy = scalar(
        db,
        &format!(
            "SELECT COUNT(*) AS total FROM tickets \
             WHERE fecha_cierre >= ? AND fecha_cierre < ? AND estado IN ({})",
            closing_placeholders
        ),
        values,
    ).await?;

    let tickets_por_estado: Vec<CountRow> = db::query_all(db, COUNT_BY_STATUS, []).await?;
    let tickets_por_categoria: Vec<CountRow> = db::query_all(db, COUNT_BY_CATEGORY, []).await?;
    let tickets_por_tecnico: Vec<CountRow> =
        db::query_all(db, COUNT_BY_TECHNICIAN, [UNASSIGNED.into()]).await?;

    Ok(TicketMetrics {
        total_tickets,
        tickets_abiertos,
        tickets_cerrados_hoy,
        tickets_por_estado,
        tickets_por_categoria,
        tickets_por_tecnico,
    })
}

pub async fn dashboard<C: ConnectionTrait>(db: &C) -> Result<DashboardResponse, AppError> {
    Ok(compute_metrics(db).await?.into())
}

/// Resumen general: tickets por estado e inventario por tipo y estado.
pub async fn report_summary<C: ConnectionTrait>(db: &C) -> Result<ReportSummaryResponse, AppError> {
    let tickets_by_status: Vec<CountRow> = db::query_all(db, COUNT_BY_STATUS, []).await?;
    let inventory_by_type_and_status = inventory_summary(db).await?;

    Ok(ReportSummaryResponse {
        tickets_by_status,
        inventory_by_type_and_status,
    })
}

async fn scalar<C: ConnectionTrait>(db: &C, sql: &str, values: Vec<Value>) -> Result<i64, AppError> {
    let rows: Vec<TotalRow> = db::query_all(db, sql, values).await?;
    Ok(rows.first().map(|row| row.total).unwrap_or(0))
}

fn statuses_where(predicate: fn(&TicketStatus) -> bool) -> Vec<Value> {
    TicketStatus::iter()
        .filter(predicate)
        .map(|status| status.to_value().into())
        .collect()
}

fn placeholders(count: usize) -> String {
    vec!["?"; count].join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_match_value_count() {
        assert_eq!(placeholders(2), "?, ?");
        assert_eq!(placeholders(1), "?");
        assert_eq!(statuses_where(TicketStatus::is_active).len(), 2);
        assert_eq!(
            statuses_where(TicketStatus::is_closing),
            vec![Value::from("Resuelto".to_string()), Value::from("Cerrado".to_string())]
        );
    }
}
