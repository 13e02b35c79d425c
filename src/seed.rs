//! Datos iniciales de ejemplo.
//!
//! Cada tabla se puebla sólo si está vacía, de modo que la rutina se puede
//! ejecutar en cada arranque sin duplicar filas.

use chrono::{NaiveDate, Utc};
use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait, Set};
use tracing::{info, instrument};
use crate::entity::inventory::{self, EquipmentStatus, EquipmentType};
use crate::entity::technician::{self, TechnicianStatus};
use crate::entity::ticket::{self, TicketCategory, TicketPriority, TicketStatus, DEFAULT_SITE};
use crate::model::global_error::AppError;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub technicians: usize,
    pub inventory: usize,
    pub tickets: usize,
}

#[instrument(skip(db))]
pub async fn seed_if_empty<C: ConnectionTrait>(db: &C) -> Result<SeedReport, AppError> {
    let mut report = SeedReport::default();

    if technician::Entity::find().count(db).await? == 0 {
        let rows = technician_rows();
        report.technicians = rows.len();
        technician::Entity::insert_many(rows).exec(db).await?;
    }

    if inventory::Entity::find().count(db).await? == 0 {
        let rows = inventory_rows();
        report.inventory = rows.len();
        inventory::Entity::insert_many(rows).exec(db).await?;
    }

    if ticket::Entity::find().count(db).await? == 0 {
        let rows = ticket_rows();
        report.tickets = rows.len();
        ticket::Entity::insert_many(rows).exec(db).await?;
    }

    info!(
        technicians = report.technicians,
        inventory = report.inventory,
        tickets = report.tickets,
        "Datos iniciales verificados"
    );
    Ok(report)
}

fn technician_rows() -> Vec<technician::ActiveModel> {
    [
        ("Juan Pérez", "Hardware y Redes", "999-111-001", "juan.perez@utp.edu.pe"),
        ("María García", "Software y Sistemas", "999-111-002", "maria.garcia@utp.edu.pe"),
        ("Carlos López", "Infraestructura TI", "999-111-003", "carlos.lopez@utp.edu.pe"),
        ("Ana Rodríguez", "Soporte General", "999-111-004", "ana.rodriguez@utp.edu.pe"),
    ]
        .into_iter()
        .map(|(name, specialty, phone, email)| technician::ActiveModel {
            name: Set(name.to_string()),
            specialty: Set(Some(specialty.to_string())),
            phone: Set(Some(phone.to_string())),
            email: Set(Some(email.to_string())),
            status: Set(TechnicianStatus::Active),
            ..Default::default()
        })
        .collect()
}

fn inventory_rows() -> Vec<inventory::ActiveModel> {
    [
        ("PC-LAB-001", EquipmentType::Desktop, "HP", "EliteDesk 800", "HP001234", "Laboratorio 1", "Prof. Roberto Silva", (2023, 1, 15), "Equipo en buen estado"),
        ("PC-LAB-002", EquipmentType::Desktop, "Dell", "OptiPlex 7090", "DL001235", "Laboratorio 1", "Prof. Roberto Silva", (2023, 1, 15), "Equipo nuevo"),
        ("PROJ-AUL-001", EquipmentType::Projector, "Epson", "EB-X41", "EP001236", "Aula 201", "Prof. Carmen Torres", (2022, 8, 20), "Mantenimiento trimestral"),
        ("IMP-ADM-001", EquipmentType::Printer, "Canon", "ImageClass MF3010", "CN001237", "Administración", "Secretaria Ana", (2022, 6, 10), "Cambio de tóner reciente"),
        ("LAP-MOB-001", EquipmentType::Laptop, "Lenovo", "ThinkPad E14", "LN001238", "Soporte Móvil", "Técnico Juan", (2023, 3, 1), "Para soporte en campo"),
    ]
        .into_iter()
        .map(|(code, equipment_type, brand, model, serial, location, responsible, (y, m, d), observations)| {
            inventory::ActiveModel {
                code: Set(code.to_string()),
                equipment_type: Set(equipment_type),
                brand: Set(brand.to_string()),
                model_name: Set(model.to_string()),
                serial_number: Set(Some(serial.to_string())),
                location: Set(location.to_string()),
                status: Set(EquipmentStatus::Active),
                responsible: Set(Some(responsible.to_string())),
                acquired_on: Set(NaiveDate::from_ymd_opt(y, m, d)),
                observations: Set(Some(observations.to_string())),
                ..Default::default()
            }
        })
        .collect()
}

fn ticket_rows() -> Vec<ticket::ActiveModel> {
    let now = Utc::now();

    [
        ("Prof. Roberto Silva", "roberto.silva@utp.edu.pe", TicketCategory::Hardware, TicketPriority::High,
         "PC no enciende en Lab 1",
         "La computadora PC-LAB-001 no enciende al presionar el botón de power. Se escucha un sonido extraño al conectar.",
         TicketStatus::InProgress, "Juan Pérez", "Revisando fuente de poder"),
        ("Carmen Torres", "carmen.torres@utp.edu.pe", TicketCategory::Hardware, TicketPriority::Medium,
         "Proyector sin imagen",
         "El proyector del aula 201 enciende pero no muestra imagen. Cable HDMI conectado correctamente.",
         TicketStatus::Open, "Carlos López", ""),
        ("Ana Secretaria", "ana.sec@utp.edu.pe", TicketCategory::Printer, TicketPriority::Low,
         "Impresora no imprime",
         "La impresora Canon de administración no responde a trabajos de impresión. Luz roja parpadeante.",
         TicketStatus::PendingUser, "María García", "Esperando cambio de cartucho"),
        ("Estudiante Mario", "mario.est@utp.edu.pe", TicketCategory::Software, TicketPriority::Medium,
         "No puede acceder al sistema académico",
         "Error al intentar ingresar credenciales en el portal académico. Mensaje de usuario no encontrado.",
         TicketStatus::Open, "Ana Rodríguez", ""),
        ("Prof. Luis Mendoza", "luis.mendoza@utp.edu.pe", TicketCategory::Network, TicketPriority::Critical,
         "Sin conexión a internet en aula 305",
         "Toda el aula 305 sin acceso a internet. Afecta clase en curso con 30 estudiantes.",
         TicketStatus::InProgress, "Carlos López", "Verificando switch de red"),
    ]
        .into_iter()
        .map(|(requester, email, category, priority, title, description, status, technician, resolution)| {
            // insert_many no pasa por before_save: la fecha se fija aquí
            ticket::ActiveModel {
                created_at: Set(now),
                requester: Set(requester.to_string()),
                email: Set(email.to_string()),
                category: Set(category),
                priority: Set(priority),
                title: Set(title.to_string()),
                description: Set(description.to_string()),
                status: Set(status),
                assigned_technician: Set(technician.to_string()),
                resolution: Set(resolution.to_string()),
                closed_at: Set(None),
                site: Set(DEFAULT_SITE.to_string()),
                ..Default::default()
            }
        })
        .collect()
}
