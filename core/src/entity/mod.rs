pub mod universities;
