mod common;

use soporte_ti::db::init_db;
use soporte_ti::migration::{Migrator, MigratorTrait};
use soporte_ti::seed::{seed_if_empty, SeedReport};
use soporte_ti::service::inventory::list_inventory;
use soporte_ti::service::technician::list_active_technicians;
use soporte_ti::service::ticket::list_tickets;

#[actix_web::test]
async fn seeding_twice_does_not_duplicate_rows() {
    let test_db = common::migrated_db().await;
    let db = &test_db.db;

    let first = seed_if_empty(db).await.unwrap();
    assert_eq!(first, SeedReport { technicians: 4, inventory: 5, tickets: 5 });

    let second = seed_if_empty(db).await.unwrap();
    assert_eq!(second, SeedReport::default());

    assert_eq!(list_active_technicians(db).await.unwrap().len(), 4);
    assert_eq!(list_inventory(db).await.unwrap().len(), 5);
    assert_eq!(list_tickets(db, None).await.unwrap().len(), 5);
}

#[actix_web::test]
async fn reopening_the_database_keeps_data() {
    let test_db = common::seeded_db().await;

    let reopened = init_db(&test_db.url).await.unwrap();
    Migrator::up(&reopened, None).await.unwrap();
    let report = seed_if_empty(&reopened).await.unwrap();

    assert_eq!(report, SeedReport::default());
    assert_eq!(list_tickets(&reopened, None).await.unwrap().len(), 5);
}

#[actix_web::test]
async fn migrations_report_nothing_pending_after_up() {
    let test_db = common::migrated_db().await;

    let pending = Migrator::get_pending_migrations(&test_db.db).await.unwrap();

    assert!(pending.is_empty());
}
