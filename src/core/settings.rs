//! Process configuration, read from the environment (and `.env`).

use anyhow::Context;
use axum::http::HeaderValue;
use di::{inject, injectable};
use log::warn;
use sqlx::sqlite::SqliteConnectOptions;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_DATABASE_URL: &str = "sqlite:grand_reserve.db";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_ADMIN_PASSWORD: &str = "admin";
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000";

#[derive(Debug, Clone)]
pub struct Settings {
    pub database: SqliteConnectOptions,
    pub max_connections: u32,
    pub bind_address: SocketAddr,
    pub admin_password: String,
    pub page_cache_ttl: Duration,
    pub static_dir: PathBuf,
    pub cors_origins: Vec<HeaderValue>,
}

#[injectable]
impl Settings {
    #[inject]
    pub fn create() -> Settings {
        // `main` loads once up front and bails on errors, so this only falls
        // back for providers built outside of it.
        Settings::load().unwrap_or_else(|e| {
            warn!("invalid configuration, using defaults: {e:#}");
            Settings::default()
        })
    }
}

impl Settings {
    pub fn load() -> anyhow::Result<Settings> {
        dotenvy::dotenv().ok();

        let database_url = var_or("DATABASE_URL", DEFAULT_DATABASE_URL);
        let database = SqliteConnectOptions::from_str(&database_url)
            .with_context(|| format!("DATABASE_URL `{database_url}` is not a SQLite URL"))?
            .create_if_missing(true);

        let max_connections = parse_var("DATABASE_MAX_CONNECTIONS", 5u32)?;

        let bind_address = var_or("BIND_ADDRESS", DEFAULT_BIND_ADDRESS);
        let bind_address = SocketAddr::from_str(&bind_address)
            .with_context(|| format!("BIND_ADDRESS `{bind_address}` is not a socket address"))?;

        let page_cache_ttl = Duration::from_secs(parse_var("PAGE_CACHE_TTL_SECS", 300u64)?);

        let cors_origins = var_or("CORS_ORIGINS", DEFAULT_CORS_ORIGINS)
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .with_context(|| format!("CORS origin `{origin}` is not a header value"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Settings {
            database,
            max_connections,
            bind_address,
            admin_password: var_or("ADMIN_PASSWORD", DEFAULT_ADMIN_PASSWORD),
            page_cache_ttl,
            static_dir: PathBuf::from(var_or("STATIC_DIR", "static")),
            cors_origins,
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            database: SqliteConnectOptions::new()
                .filename("grand_reserve.db")
                .create_if_missing(true),
            max_connections: 5,
            bind_address: SocketAddr::from(([0, 0, 0, 0], 3000)),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_owned(),
            page_cache_ttl: Duration::from_secs(300),
            static_dir: PathBuf::from("static"),
            cors_origins: vec![HeaderValue::from_static(DEFAULT_CORS_ORIGINS)],
        }
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_var<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{key} `{value}` could not be parsed")),
        Err(_) => Ok(default),
    }
}
