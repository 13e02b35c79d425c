use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Registro de técnicos. Los tickets guardan el nombre como texto libre,
/// no una referencia a esta tabla.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tecnicos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "nombre")]
    pub name: String,
    #[sea_orm(column_name = "especialidad")]
    pub specialty: Option<String>,
    #[sea_orm(column_name = "telefono")]
    pub phone: Option<String>,
    pub email: Option<String>,
    #[sea_orm(column_name = "estado")]
    pub status: TechnicianStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum TechnicianStatus {
    #[serde(rename = "Activo")]
    #[sea_orm(string_value = "Activo")]
    Active,
    #[serde(rename = "Inactivo")]
    #[sea_orm(string_value = "Inactivo")]
    Inactive,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
