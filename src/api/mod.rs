mod health_check;
mod inventory;
mod metrics;
mod technician;
mod ticket;

use actix_web::web::{self, scope};
use utoipa::OpenApi;
use crate::model::global_error::{AppError, ErrorCode, ErrorResponse};

pub use crate::api::inventory::{add_inventory_item, export_inventory, list_inventory};
pub use crate::api::metrics::{dashboard, report_summary, ticket_metrics};
pub use crate::api::technician::list_technicians;
pub use crate::api::ticket::{create_ticket, get_ticket, list_tickets, update_ticket};

#[derive(OpenApi)]
#[openapi(
    info(title = "Sistema de Tickets - Soporte TI UTP"),
    paths(
        health_check::health_check,
        ticket::create_ticket,
        ticket::list_tickets,
        ticket::get_ticket,
        ticket::update_ticket,
        technician::list_technicians,
        inventory::list_inventory,
        inventory::add_inventory_item,
        inventory::export_inventory,
        metrics::dashboard,
        metrics::ticket_metrics,
        metrics::report_summary,
    ),
    components(schemas(ErrorResponse)),
)]
pub struct ApiDoc;

/// Registra las rutas de la aplicación. Lo usan `main` y los tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .app_data(web::JsonConfig::default().error_handler(|err, _req| invalid_request(err)))
        .app_data(web::QueryConfig::default().error_handler(|err, _req| invalid_request(err)))
        .app_data(web::PathConfig::default().error_handler(|err, _req| invalid_request(err)))
        .service(health_check::health_check)
        .service(
            scope("/api")
                .service(dashboard)
                .service(ticket_metrics)
                .service(report_summary)
                .service(create_ticket)
                .service(list_tickets)
                .service(get_ticket)
                .service(update_ticket)
                .service(list_technicians)
                .service(export_inventory)
                .service(list_inventory)
                .service(add_inventory_item)
        );
}

fn invalid_request(err: impl std::fmt::Display) -> actix_web::Error {
    AppError::with_detail(ErrorCode::InvalidRequest, err.to_string()).into()
}
