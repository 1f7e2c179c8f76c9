use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "VINYL_GATEWAY_LISTEN_ADDR";
pub const STORAGE_BACKEND_ENV: &str = "VINYL_GATEWAY_STORAGE_BACKEND";
pub const SQLITE_URL_ENV: &str = "VINYL_GATEWAY_SQLITE_URL";
pub const MYSQL_DSN_ENV: &str = "VINYL_GATEWAY_MYSQL_DSN";
pub const SKIP_SEED_ENV: &str = "VINYL_GATEWAY_SKIP_SEED";
pub const LOG_JSON_ENV: &str = "VINYL_GATEWAY_LOG_JSON";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_SQLITE_URL: &str = "sqlite://foo.db";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "in-memory")]
    InMemory,
    #[value(name = "sqlite")]
    Sqlite,
    #[value(name = "mysql")]
    Mysql,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::InMemory => write!(f, "in-memory"),
            StorageBackendArg::Sqlite => write!(f, "sqlite"),
            StorageBackendArg::Mysql => write!(f, "mysql"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "vinyl-gateway", about = "HTTP API for the album catalog")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::Sqlite
    )]
    pub storage: StorageBackendArg,

    #[arg(long, env = SQLITE_URL_ENV, default_value = DEFAULT_SQLITE_URL)]
    pub sqlite_url: String,

    #[arg(long, env = MYSQL_DSN_ENV, required_if_eq("storage", "mysql"))]
    pub mysql_dsn: Option<String>,

    /// Do not insert the sample albums into an empty store.
    #[arg(long, env = SKIP_SEED_ENV)]
    pub skip_seed: bool,

    /// Emit logs as JSON lines instead of human-readable text.
    #[arg(long, env = LOG_JSON_ENV)]
    pub log_json: bool,
}
