pub mod university_repository;

pub use university_repository::PostgresUniversityRepository;
