use actix_web::http::header::ContentDisposition;
use actix_web::{get, post, web, HttpResponse};
use chrono::Utc;
use sea_orm::DatabaseConnection;
use crate::export::{inventory_file_name, inventory_to_xlsx, XLSX_CONTENT_TYPE};
use crate::model::global_error::{AppError, ErrorCode};
use crate::model::inventory::{InventoryCreateRequest, InventoryResponse};
use crate::service::inventory as inventory_service;

#[utoipa::path(
    get,
    path = "/api/inventory",
    summary = "Inventario completo ordenado por código",
    responses(
        (status = 200, description = "Equipos registrados", body = Vec<InventoryResponse>),
    ),
    tag = "inventory",
)]
#[get("/inventory")]
pub async fn list_inventory(
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, AppError> {
    let items = inventory_service::list_inventory(db.get_ref()).await?;

    let response: Vec<InventoryResponse> = items
        .into_iter()
        .map(InventoryResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(response))
}

#[utoipa::path(
    post,
    path = "/api/inventory",
    summary = "Agregar equipo al inventario",
    request_body = InventoryCreateRequest,
    responses(
        (status = 201, description = "Equipo agregado", body = InventoryResponse),
        (status = 400, description = "Faltan campos obligatorios"),
        (status = 409, description = "Código o número de serie repetido"),
    ),
    tag = "inventory",
)]
#[post("/inventory")]
pub async fn add_inventory_item(
    body: web::Json<InventoryCreateRequest>,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, AppError> {
    body.validate()?;

    let item = inventory_service::add_inventory_item(db.get_ref(), &body).await?;

    Ok(HttpResponse::Created().json(InventoryResponse::from(item)))
}

#[utoipa::path(
    get,
    path = "/api/inventory/export",
    summary = "Exportar inventario a Excel",
    responses(
        (status = 200, description = "Archivo inventario_ti_YYYYMMDD.xlsx", content_type = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
    ),
    tag = "inventory",
)]
#[get("/inventory/export")]
pub async fn export_inventory(
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, AppError> {
    let items = inventory_service::list_inventory(db.get_ref()).await?;

    let bytes = inventory_to_xlsx(&items).map_err(|e| {
        log::error!("Error al generar el Excel de inventario: {}", e);
        AppError::with_detail(ErrorCode::ExportFailed, e.to_string())
    })?;

    let file_name = inventory_file_name(Utc::now().date_naive());

    Ok(HttpResponse::Ok()
        .content_type(XLSX_CONTENT_TYPE)
        .insert_header(ContentDisposition::attachment(file_name))
        .body(bytes))
}
