use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};
use crate::entity::technician::{self, Entity as TechnicianEntity, TechnicianStatus};
use crate::model::global_error::AppError;

/// Técnicos activos, en el orden en que fueron registrados.
pub async fn list_active_technicians<C: ConnectionTrait>(db: &C) -> Result<Vec<technician::Model>, AppError> {
    let technicians = TechnicianEntity::find()
        .filter(technician::Column::Status.eq(TechnicianStatus::Active))
        .order_by_asc(technician::Column::Id)
        .all(db)
        .await?;

    Ok(technicians)
}
