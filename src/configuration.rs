use std::env;
use anyhow::Context;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://soporte_ti.db?mode=rwc";
pub const DEFAULT_LOG_FILTER: &str = "info,sqlx=warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl Settings {
    /// Lee la configuración de las variables de entorno.
    /// `main` carga antes el archivo `.env` si existe.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let host = lookup("APP_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = match lookup("APP_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("APP_PORT inválido: {}", raw))?,
            None => 8080,
        };

        Ok(Self { database_url, host, port })
    }

    pub fn address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}
