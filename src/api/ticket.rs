use actix_web::{get, post, put, web, HttpResponse};
use sea_orm::DatabaseConnection;
use crate::model::global_error::AppError;
use crate::model::ticket::{TicketCreateRequest, TicketListQuery, TicketResponse, TicketUpdateRequest};
use crate::service::ticket as ticket_service;

#[utoipa::path(
    post,
    path = "/api/tickets",
    summary = "Crear ticket de soporte",
    request_body = TicketCreateRequest,
    responses(
        (status = 201, description = "Ticket creado", body = TicketResponse),
        (status = 400, description = "Faltan campos obligatorios"),
    ),
    tag = "tickets",
)]
#[post("/tickets")]
pub async fn create_ticket(
    body: web::Json<TicketCreateRequest>,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, AppError> {
    body.validate()?;

    let ticket = ticket_service::create_ticket(db.get_ref(), &body).await?;

    Ok(HttpResponse::Created().json(TicketResponse::from(ticket)))
}

#[utoipa::path(
    get,
    path = "/api/tickets",
    summary = "Listar tickets",
    params(TicketListQuery),
    responses(
        (status = 200, description = "Tickets del más reciente al más antiguo", body = Vec<TicketResponse>),
        (status = 400, description = "Estado desconocido"),
    ),
    tag = "tickets",
)]
#[get("/tickets")]
pub async fn list_tickets(
    query: web::Query<TicketListQuery>,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, AppError> {
    let status = query.status_filter()?;

    let tickets = ticket_service::list_tickets(db.get_ref(), status).await?;

    let response: Vec<TicketResponse> = tickets
        .into_iter()
        .map(TicketResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(response))
}

#[utoipa::path(
    get,
    path = "/api/tickets/{id}",
    summary = "Detalle de ticket",
    params(
        ("id", description = "ID del ticket", example = 1),
    ),
    responses(
        (status = 200, description = "Ticket encontrado", body = TicketResponse),
        (status = 404, description = "El ticket no existe"),
    ),
    tag = "tickets",
)]
#[get("/tickets/{id}")]
pub async fn get_ticket(
    path: web::Path<i32>,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, AppError> {
    let ticket = ticket_service::get_ticket(db.get_ref(), path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(TicketResponse::from(ticket)))
}

#[utoipa::path(
    put,
    path = "/api/tickets/{id}",
    summary = "Actualizar estado, técnico y solución",
    params(
        ("id", description = "ID del ticket", example = 2),
    ),
    request_body = TicketUpdateRequest,
    responses(
        (status = 200, description = "Ticket actualizado", body = TicketResponse),
        (status = 404, description = "El ticket no existe"),
    ),
    tag = "tickets",
)]
#[put("/tickets/{id}")]
pub async fn update_ticket(
    path: web::Path<i32>,
    body: web::Json<TicketUpdateRequest>,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, AppError> {
    let ticket = ticket_service::update_ticket(db.get_ref(), path.into_inner(), &body).await?;

    Ok(HttpResponse::Ok().json(TicketResponse::from(ticket)))
}
