use actix_web::{get, web, HttpResponse};
use sea_orm::DatabaseConnection;
use crate::model::global_error::AppError;
use crate::model::metrics::{DashboardResponse, ReportSummaryResponse, TicketMetrics};
use crate::service::metrics as metrics_service;

#[utoipa::path(
    get,
    path = "/api/dashboard",
    summary = "Dashboard de soporte TI",
    responses(
        (status = 200, description = "Métricas y porcentaje de resolución", body = DashboardResponse),
    ),
    tag = "dashboard",
)]
#[get("/dashboard")]
pub async fn dashboard(
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, AppError> {
    let response = metrics_service::dashboard(db.get_ref()).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[utoipa::path(
    get,
    path = "/api/metrics",
    summary = "Métricas de tickets",
    responses(
        (status = 200, description = "Conteos y agrupaciones", body = TicketMetrics),
    ),
    tag = "dashboard",
)]
#[get("/metrics")]
pub async fn ticket_metrics(
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, AppError> {
    let metrics = metrics_service::compute_metrics(db.get_ref()).await?;

    Ok(HttpResponse::Ok().json(metrics))
}

#[utoipa::path(
    get,
    path = "/api/reports/summary",
    summary = "Resumen general del sistema",
    responses(
        (status = 200, description = "Tickets por estado e inventario por tipo y estado", body = ReportSummaryResponse),
    ),
    tag = "reports",
)]
#[get("/reports/summary")]
pub async fn report_summary(
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, AppError> {
    let response = metrics_service::report_summary(db.get_ref()).await?;

    Ok(HttpResponse::Ok().json(response))
}
