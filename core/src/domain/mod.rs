pub mod cache;
pub mod common;
pub mod health;
pub mod university;
