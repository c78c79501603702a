use crate::{
    domain::common::{UniportalConfig, services::Service},
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        health::PostgresHealthCheckRepository,
        university::PostgresUniversityRepository,
    },
};

pub type UniportalService = Service<PostgresUniversityRepository, PostgresHealthCheckRepository>;

pub async fn create_service(config: UniportalConfig) -> Result<UniportalService, anyhow::Error> {
    let database_url = format!(
        "postgres://{}:{}@{}:{}/{}",
        config.database.username,
        config.database.password,
        config.database.host,
        config.database.port,
        config.database.name
    );
    let postgres = Postgres::new(PostgresConfig { database_url }).await?;

    Ok(Service::new(
        PostgresUniversityRepository::new(postgres.get_db()),
        PostgresHealthCheckRepository::new(postgres.get_db()),
    ))
}
