use actix_web::{get, web, HttpResponse};
use sea_orm::DatabaseConnection;
use crate::model::global_error::AppError;
use crate::model::technician::TechnicianResponse;
use crate::service::technician as technician_service;

#[utoipa::path(
    get,
    path = "/api/technicians",
    summary = "Técnicos activos asignables",
    responses(
        (status = 200, description = "Técnicos activos", body = Vec<TechnicianResponse>),
    ),
    tag = "technicians",
)]
#[get("/technicians")]
pub async fn list_technicians(
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, AppError> {
    let technicians = technician_service::list_active_technicians(db.get_ref()).await?;

    let response: Vec<TechnicianResponse> = technicians
        .into_iter()
        .map(TechnicianResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(response))
}
