use clap::{Parser, ValueEnum};
use uniportal_core::domain::common::{CacheConfig, DatabaseConfig, UniportalConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "uniportal-api", about = "University search portal API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub cache: CacheArgs,

    #[arg(long, env = "ENVIRONMENT", default_value = "development")]
    pub environment: Environment,

    #[arg(long, env = "LOG_FILTER", default_value = "info")]
    pub log_filter: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "SERVER_PORT", default_value = "3000")]
    pub port: u16,

    #[arg(long, env = "SERVER_ROOT_PATH", default_value = "/api")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000,http://127.0.0.1:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct DatabaseArgs {
    #[arg(long, env = "DATABASE_HOST", default_value = "localhost")]
    pub database_host: String,

    #[arg(long, env = "DATABASE_PORT", default_value = "5432")]
    pub database_port: u16,

    #[arg(long, env = "DATABASE_USER", default_value = "uniportal")]
    pub database_user: String,

    #[arg(long, env = "DATABASE_PASSWORD", default_value = "uniportal")]
    pub database_password: String,

    #[arg(long, env = "DATABASE_NAME", default_value = "university_db")]
    pub database_name: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct CacheArgs {
    /// Default response cache TTL, in seconds.
    #[arg(long, env = "CACHE_TTL", default_value = "300")]
    pub ttl: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl From<Args> for UniportalConfig {
    fn from(args: Args) -> Self {
        Self {
            database: DatabaseConfig {
                host: args.database.database_host,
                port: args.database.database_port,
                username: args.database.database_user,
                password: args.database.database_password,
                name: args.database.database_name,
            },
            cache: CacheConfig {
                ttl_secs: args.cache.ttl,
            },
        }
    }
}
