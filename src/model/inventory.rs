use chrono::NaiveDate;
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use crate::entity::inventory::{EquipmentStatus, EquipmentType, Model as InventoryModel};
use crate::model::global_error::{AppError, ValidationFieldError};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryCreateRequest {
    #[serde(default)]
    pub code: String,
    pub equipment_type: EquipmentType,
    #[serde(default)]
    pub brand: String,
    #[serde(default, rename = "model")]
    pub model_name: String,
    pub serial_number: Option<String>,
    #[serde(default)]
    pub location: String,
    pub status: Option<EquipmentStatus>, // None => "Activo"
    pub responsible: Option<String>,
    pub acquired_on: Option<NaiveDate>,
    pub observations: Option<String>,
}

impl InventoryCreateRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = Vec::new();

        if self.code.trim().is_empty() {
            errors.push(ValidationFieldError::required("code"));
        }
        if self.brand.trim().is_empty() {
            errors.push(ValidationFieldError::required("brand"));
        }
        if self.model_name.trim().is_empty() {
            errors.push(ValidationFieldError::required("model"));
        }
        if self.location.trim().is_empty() {
            errors.push(ValidationFieldError::required("location"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::ValidationError(errors))
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryResponse {
    pub id: i32,
    pub code: String,
    pub equipment_type: EquipmentType,
    pub brand: String,
    pub model: String,
    pub serial_number: Option<String>,
    pub location: String,
    pub status: EquipmentStatus,
    pub responsible: Option<String>,
    pub acquired_on: Option<NaiveDate>,
    pub observations: Option<String>,
}

impl From<InventoryModel> for InventoryResponse {
    fn from(model: InventoryModel) -> Self {
        Self {
            id: model.id,
            code: model.code,
            equipment_type: model.equipment_type,
            brand: model.brand,
            model: model.model_name,
            serial_number: model.serial_number,
            location: model.location,
            status: model.status,
            responsible: model.responsible,
            acquired_on: model.acquired_on,
            observations: model.observations,
        }
    }
}

/// Fila del resumen de inventario agrupado por tipo y estado.
#[derive(Debug, Clone, PartialEq, FromQueryResult, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventorySummaryRow {
    pub equipment_type: String,
    pub status: String,
    pub total: i64,
}
