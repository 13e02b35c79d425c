use sea_orm::{ConnectionTrait, Database, DatabaseConnection, FromQueryResult, Statement, Value};
use tracing::{info, instrument, debug};
use sea_orm::ConnectOptions;
use std::time::Duration;
use crate::model::global_error::AppError;

#[instrument]
pub async fn init_db(database_url: &str) -> anyhow::Result<DatabaseConnection> {
    info!("Configurando la conexión a la base de datos...");

    let mut options = ConnectOptions::new(database_url.to_owned());
    options
        .max_connections(5)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(8))
        .max_lifetime(Duration::from_secs(8))
        .sqlx_logging(true)
        .sqlx_logging_level(log::LevelFilter::Debug);

    info!("Conectando a la base de datos...");
    let db = Database::connect(options).await?;
    info!("Conexión a la base de datos lista");

    Ok(db)
}

/// Ejecuta una consulta parametrizada y mapea cada fila a `T`.
/// Un resultado vacío es un `Vec` vacío.
pub async fn query_all<T, C, I>(db: &C, sql: &str, values: I) -> Result<Vec<T>, AppError>
where
    T: FromQueryResult,
    C: ConnectionTrait,
    I: IntoIterator<Item = Value>,
{
    debug!(sql, "consulta");
    let statement = Statement::from_sql_and_values(db.get_database_backend(), sql, values);
    let rows = T::find_by_statement(statement).all(db).await?;
    Ok(rows)
}

/// Ejecuta una sentencia de escritura y devuelve las filas afectadas.
pub async fn execute<C, I>(db: &C, sql: &str, values: I) -> Result<u64, AppError>
where
    C: ConnectionTrait,
    I: IntoIterator<Item = Value>,
{
    debug!(sql, "escritura");
    let statement = Statement::from_sql_and_values(db.get_database_backend(), sql, values);
    let result = db.execute(statement).await?;
    Ok(result.rows_affected())
}
