mod common;

use chrono::{Days, Utc};
use soporte_ti::entity::ticket::{TicketStatus, UNASSIGNED};
use soporte_ti::model::metrics::CountRow;
use soporte_ti::model::ticket::TicketUpdateRequest;
use soporte_ti::service::metrics::{compute_metrics, compute_metrics_on, dashboard, report_summary};
use soporte_ti::service::ticket::{create_ticket, list_tickets, update_ticket};

fn count_of(rows: &[CountRow], label: &str) -> i64 {
    rows.iter()
        .find(|row| row.label == label)
        .map(|row| row.total)
        .unwrap_or(0)
}

fn resolve() -> TicketUpdateRequest {
    TicketUpdateRequest {
        status: TicketStatus::Resolved,
        resolution: Some("Cable HDMI reemplazado".to_string()),
        assigned_technician: Some("Carlos López".to_string()),
    }
}

#[actix_web::test]
async fn seeded_database_metrics() {
    let test_db = common::seeded_db().await;

    let metrics = compute_metrics(&test_db.db).await.unwrap();

    assert_eq!(metrics.total_tickets, 5);
    assert_eq!(metrics.tickets_abiertos, 4);
    assert_eq!(metrics.tickets_cerrados_hoy, 0);

    assert_eq!(count_of(&metrics.tickets_por_estado, "Abierto"), 2);
    assert_eq!(count_of(&metrics.tickets_por_estado, "En_Proceso"), 2);
    assert_eq!(count_of(&metrics.tickets_por_estado, "Pendiente_Usuario"), 1);

    assert_eq!(count_of(&metrics.tickets_por_categoria, "Hardware"), 2);
    assert_eq!(count_of(&metrics.tickets_por_categoria, "Red"), 1);

    assert_eq!(metrics.tickets_por_tecnico[0].label, "Carlos López");
    assert_eq!(metrics.tickets_por_tecnico[0].total, 2);
}

#[actix_web::test]
async fn resolving_counts_as_closed_today_only() {
    let test_db = common::seeded_db().await;
    let db = &test_db.db;

    update_ticket(db, 2, &resolve()).await.unwrap();

    let today = compute_metrics(db).await.unwrap();
    assert_eq!(today.tickets_cerrados_hoy, 1);
    assert_eq!(today.tickets_abiertos, 3);
    assert_eq!(count_of(&today.tickets_por_estado, "Resuelto"), 1);

    let yesterday = Utc::now().date_naive().checked_sub_days(Days::new(1)).unwrap();
    let earlier = compute_metrics_on(db, yesterday).await.unwrap();
    assert_eq!(earlier.tickets_cerrados_hoy, 0);
    assert_eq!(earlier.total_tickets, 5);
}

#[actix_web::test]
async fn reopened_ticket_is_not_closed_today() {
    let test_db = common::seeded_db().await;
    let db = &test_db.db;

    update_ticket(db, 2, &resolve()).await.unwrap();
    update_ticket(db, 2, &TicketUpdateRequest {
        status: TicketStatus::InProgress,
        resolution: None,
        assigned_technician: Some("Carlos López".to_string()),
    })
        .await
        .unwrap();

    let metrics = compute_metrics(db).await.unwrap();
    assert_eq!(metrics.tickets_cerrados_hoy, 0);
    assert_eq!(metrics.tickets_abiertos, 4);
}

#[actix_web::test]
async fn unassigned_tickets_are_left_out_of_technician_counts() {
    let test_db = common::seeded_db().await;
    let db = &test_db.db;

    create_ticket(db, &common::ticket_request("Sin técnico")).await.unwrap();

    let metrics = compute_metrics(db).await.unwrap();
    assert_eq!(metrics.total_tickets, list_tickets(db, None).await.unwrap().len() as i64);
    assert_eq!(count_of(&metrics.tickets_por_tecnico, UNASSIGNED), 0);
    assert_eq!(metrics.tickets_por_tecnico.iter().map(|row| row.total).sum::<i64>(), 5);
}

#[actix_web::test]
async fn empty_database_has_zero_metrics() {
    let test_db = common::migrated_db().await;

    let response = dashboard(&test_db.db).await.unwrap();

    assert_eq!(response.metrics.total_tickets, 0);
    assert!(response.metrics.tickets_por_estado.is_empty());
    assert_eq!(response.resolution_rate, 0.0);
}

#[actix_web::test]
async fn dashboard_rate_counts_tickets_no_longer_open() {
    let test_db = common::seeded_db().await;

    let response = dashboard(&test_db.db).await.unwrap();

    assert_eq!(response.resolution_rate, 20.0);
}

#[actix_web::test]
async fn report_summary_covers_tickets_and_inventory() {
    let test_db = common::seeded_db().await;

    let summary = report_summary(&test_db.db).await.unwrap();

    assert_eq!(summary.tickets_by_status.iter().map(|row| row.total).sum::<i64>(), 5);
    assert_eq!(summary.inventory_by_type_and_status.iter().map(|row| row.total).sum::<i64>(), 5);
}
