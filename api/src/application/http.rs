pub mod health;
pub mod server;
pub mod stats;
pub mod university;
