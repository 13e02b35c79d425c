use chrono::Utc;
use sea_orm::{ActiveEnum, ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Value};
use sea_query::Condition;
use tracing::{info, instrument};
use crate::db;
use crate::entity::ticket::{self, ActiveModel as TicketActiveModel, Entity as TicketEntity, TicketStatus, UNASSIGNED};
use crate::model::global_error::{AppError, ErrorCode};
use crate::model::ticket::{TicketCreateRequest, TicketUpdateRequest};

#[instrument(skip(db, request), fields(category = ?request.category, priority = ?request.priority))]
pub async fn create_ticket<C: ConnectionTrait>(
    db: &C,
    request: &TicketCreateRequest,
) -> Result<ticket::Model, AppError> {
    let inserted = TicketActiveModel::from_request(request).insert(db).await?;
    info!(ticket_id = inserted.id, "Ticket creado");
    Ok(inserted)
}

/// Lista los tickets, del más reciente al más antiguo.
/// Con `status` sólo devuelve los tickets en ese estado exacto.
#[instrument(skip(db))]
pub async fn list_tickets<C: ConnectionTrait>(
    db: &C,
    status: Option<TicketStatus>,
) -> Result<Vec<ticket::Model>, AppError> {
    let tickets = TicketEntity::find()
        .filter(Condition::all().add_option(status.map(|s| ticket::Column::Status.eq(s))))
        .order_by_desc(ticket::Column::CreatedAt)
        .order_by_desc(ticket::Column::Id)
        .all(db)
        .await?;

    Ok(tickets)
}

pub async fn get_ticket<C: ConnectionTrait>(db: &C, ticket_id: i32) -> Result<ticket::Model, AppError> {
    TicketEntity::find_by_id(ticket_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::TicketNotFound))
}

/// Cambia estado, solución y técnico de un ticket.
///
/// Cualquier estado es alcanzable desde cualquier otro. Pasar a Resuelto o
/// Cerrado fija `fecha_cierre` a la hora actual; los demás estados no la
/// tocan, así que un ticket reabierto conserva su fecha de cierre anterior.
#[instrument(skip(db, request), fields(status = ?request.status))]
pub async fn update_ticket<C: ConnectionTrait>(
    db: &C,
    ticket_id: i32,
    request: &TicketUpdateRequest,
) -> Result<ticket::Model, AppError> {
    let status: Value = request.status.to_value().into();
    let resolution: Value = request.resolution.clone().unwrap_or_default().into();
    let technician: Value = request
        .assigned_technician
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(UNASSIGNED)
        .to_string()
        .into();

    let affected = if request.status.is_closing() {
        db::execute(
            db,
            "UPDATE tickets SET estado = ?, solucion = ?, tecnico_asignado = ?, fecha_cierre = ? WHERE id = ?",
            [status, resolution, technician, Utc::now().into(), ticket_id.into()],
        ).await?
    } else {
        db::execute(
            db,
            "UPDATE tickets SET estado = ?, solucion = ?, tecnico_asignado = ? WHERE id = ?",
            [status, resolution, technician, ticket_id.into()],
        ).await?
    };

    if affected == 0 {
        return Err(AppError::new(ErrorCode::TicketNotFound));
    }

    info!(ticket_id, "Ticket actualizado");
    get_ticket(db, ticket_id).await
}
