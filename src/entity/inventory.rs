use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use crate::model::inventory::InventoryCreateRequest;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inventario")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "codigo_equipo", unique)]
    pub code: String,
    #[sea_orm(column_name = "tipo_equipo")]
    pub equipment_type: EquipmentType,
    #[sea_orm(column_name = "marca")]
    pub brand: String,
    #[sea_orm(column_name = "modelo")]
    pub model_name: String,
    // único sólo cuando viene informado; SQLite admite varios NULL
    #[sea_orm(column_name = "numero_serie", unique)]
    pub serial_number: Option<String>,
    #[sea_orm(column_name = "ubicacion")]
    pub location: String,
    #[sea_orm(column_name = "estado")]
    pub status: EquipmentStatus,
    #[sea_orm(column_name = "responsable")]
    pub responsible: Option<String>,
    #[sea_orm(column_name = "fecha_adquisicion")]
    pub acquired_on: Option<NaiveDate>,
    #[sea_orm(column_name = "observaciones")]
    pub observations: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum EquipmentType {
    #[sea_orm(string_value = "Desktop")]
    Desktop,
    #[sea_orm(string_value = "Laptop")]
    Laptop,
    #[serde(rename = "Proyector")]
    #[sea_orm(string_value = "Proyector")]
    Projector,
    #[serde(rename = "Impresora")]
    #[sea_orm(string_value = "Impresora")]
    Printer,
    #[sea_orm(string_value = "Switch")]
    Switch,
    #[sea_orm(string_value = "Router")]
    Router,
    #[sea_orm(string_value = "Monitor")]
    Monitor,
    #[serde(rename = "Otro")]
    #[sea_orm(string_value = "Otro")]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum EquipmentStatus {
    #[default]
    #[serde(rename = "Activo")]
    #[sea_orm(string_value = "Activo")]
    Active,
    #[serde(rename = "Mantenimiento")]
    #[sea_orm(string_value = "Mantenimiento")]
    Maintenance,
    #[serde(rename = "Dañado")]
    #[sea_orm(string_value = "Dañado")]
    Damaged,
    #[serde(rename = "Disponible")]
    #[sea_orm(string_value = "Disponible")]
    Available,
    #[serde(rename = "Dado_de_baja")]
    #[sea_orm(string_value = "Dado_de_baja")]
    Decommissioned,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    pub fn from_request(request: &InventoryCreateRequest) -> Self {
        Self {
            code: Set(request.code.trim().to_string()),
            equipment_type: Set(request.equipment_type),
            brand: Set(request.brand.trim().to_string()),
            model_name: Set(request.model_name.trim().to_string()),
            serial_number: Set(non_blank(request.serial_number.as_deref())),
            location: Set(request.location.trim().to_string()),
            status: Set(request.status.unwrap_or_default()),
            responsible: Set(non_blank(request.responsible.as_deref())),
            acquired_on: Set(request.acquired_on),
            observations: Set(non_blank(request.observations.as_deref())),
            ..Default::default()
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
}
