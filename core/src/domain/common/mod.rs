pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct UniportalConfig {
    pub database: DatabaseConfig,
    pub cache: CacheConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

#[derive(Clone, Debug)]
pub struct CacheConfig {
    /// Default time-to-live for cached responses, in seconds.
    pub ttl_secs: u64,
}
