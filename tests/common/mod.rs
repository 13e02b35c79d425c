#![allow(dead_code)]

use sea_orm::DatabaseConnection;
use soporte_ti::db::init_db;
use soporte_ti::entity::ticket::{TicketCategory, TicketPriority};
use soporte_ti::migration::{Migrator, MigratorTrait};
use soporte_ti::model::inventory::InventoryCreateRequest;
use soporte_ti::model::ticket::TicketCreateRequest;
use soporte_ti::seed::seed_if_empty;
use tempfile::TempDir;

/// Base de datos SQLite en un directorio temporal. El directorio se borra
/// al soltar `TestDb`, así que debe vivir tanto como la prueba.
pub struct TestDb {
    pub db: DatabaseConnection,
    pub url: String,
    _dir: TempDir,
}

pub async fn migrated_db() -> TestDb {
    let dir = tempfile::tempdir().expect("directorio temporal");
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("soporte_ti.db").display());
    let db = init_db(&url).await.expect("conexión a la base de datos");
    Migrator::up(&db, None).await.expect("migraciones");
    TestDb { db, url, _dir: dir }
}

pub async fn seeded_db() -> TestDb {
    let test_db = migrated_db().await;
    seed_if_empty(&test_db.db).await.expect("datos iniciales");
    test_db
}

pub fn ticket_request(title: &str) -> TicketCreateRequest {
    TicketCreateRequest {
        requester: "Prof. Luis Mendoza".to_string(),
        email: "luis.mendoza@utp.edu.pe".to_string(),
        category: TicketCategory::Network,
        priority: TicketPriority::Critical,
        title: title.to_string(),
        description: "Sin acceso a internet en el aula".to_string(),
        assigned_technician: None,
    }
}

pub fn inventory_request(code: &str, serial: Option<&str>) -> InventoryCreateRequest {
    serde_json::from_value(serde_json::json!({
        "code": code,
        "equipmentType": "Monitor",
        "brand": "LG",
        "model": "24MK430H",
        "serialNumber": serial,
        "location": "Laboratorio 2",
        "responsible": "Prof. Roberto Silva",
        "acquiredOn": "2024-02-01",
    }))
        .expect("solicitud de inventario válida")
}
