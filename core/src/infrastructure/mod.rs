pub mod cache;
pub mod db;
pub mod health;
pub mod university;
