use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder};
use tracing::{info, instrument, warn};
use crate::db;
use crate::entity::inventory::{self, ActiveModel as InventoryActiveModel, Entity as InventoryEntity};
use crate::model::global_error::{AppError, ErrorCode};
use crate::model::inventory::{InventoryCreateRequest, InventorySummaryRow};

#[instrument(skip(db))]
pub async fn list_inventory<C: ConnectionTrait>(db: &C) -> Result<Vec<inventory::Model>, AppError> {
    let items = InventoryEntity::find()
        .order_by_asc(inventory::Column::Code)
        .all(db)
        .await?;

    Ok(items)
}

/// Agrega un equipo. Un código o número de serie repetido falla con
/// `ConstraintViolation` y no inserta nada.
#[instrument(skip(db, request), fields(code = %request.code))]
pub async fn add_inventory_item<C: ConnectionTrait>(
    db: &C,
    request: &InventoryCreateRequest,
) -> Result<inventory::Model, AppError> {
    let inserted = InventoryActiveModel::from_request(request)
        .insert(db)
        .await
        .map_err(AppError::from)
        .inspect_err(|err| {
            if err.code() == ErrorCode::ConstraintViolation {
                warn!("Equipo duplicado: {}", request.code);
            }
        })?;

    info!(item_id = inserted.id, "Equipo agregado al inventario");
    Ok(inserted)
}

/// Cantidad de equipos por tipo y estado, para la página de reportes.
pub async fn inventory_summary<C: ConnectionTrait>(db: &C) -> Result<Vec<InventorySummaryRow>, AppError> {
    db::query_all(
        db,
        "SELECT tipo_equipo AS equipment_type, estado AS status, COUNT(*) AS total \
         FROM inventario GROUP BY tipo_equipo, estado ORDER BY tipo_equipo, estado",
        [],
    ).await
}
