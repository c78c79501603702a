use crate::domain::{health::ports::HealthCheckRepository, university::ports::UniversityRepository};

/// Aggregate service over the repository ports. Domain service traits are
/// implemented on this struct in their own modules.
#[derive(Debug, Clone)]
pub struct Service<U, HC>
where
    U: UniversityRepository,
    HC: HealthCheckRepository,
{
    pub university_repository: U,
    pub health_check_repository: HC,
}

impl<U, HC> Service<U, HC>
where
    U: UniversityRepository,
    HC: HealthCheckRepository,
{
    pub fn new(university_repository: U, health_check_repository: HC) -> Self {
        Self {
            university_repository,
            health_check_repository,
        }
    }
}
