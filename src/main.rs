use actix_cors::Cors;
use actix_web::http::header;
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use dotenv::dotenv;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use soporte_ti::api::{self, ApiDoc};
use soporte_ti::configuration::{Settings, DEFAULT_LOG_FILTER};
use soporte_ti::db::init_db;
use soporte_ti::migration::{Migrator, MigratorTrait};
use soporte_ti::seed::seed_if_empty;
use soporte_ti::telemetry::{get_subscriber, init_subscriber};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let subscriber = get_subscriber(
        "soporte_ti".into(),
        DEFAULT_LOG_FILTER.into(),
        std::io::stdout
    );
    init_subscriber(subscriber)?;

    info!("Iniciando la aplicación...");

    let settings = Settings::from_env()?;
    info!(database_url = %settings.database_url, "Configuración cargada");

    let db = init_db(&settings.database_url).await?;
    info!("Ejecutando migraciones...");
    Migrator::up(&db, None).await?;
    info!("Migraciones completas");

    seed_if_empty(&db).await?;

    let db_data = Data::new(db);
    let openapi = ApiDoc::openapi();

    let (host, port) = settings.address();
    info!("Servidor escuchando en http://{}:{}", host, port);
    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PUT", "OPTIONS"])
            .allowed_headers(vec![header::CONTENT_TYPE])
            .expose_headers(vec![header::CONTENT_DISPOSITION])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .app_data(db_data.clone())
            .configure(api::configure)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone())
            )
    })
        .bind((host, port))?
        .run()
        .await?;

    Ok(())
}
