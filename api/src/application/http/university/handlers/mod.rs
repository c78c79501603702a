pub mod get_cities;
pub mod get_countries;
pub mod get_university;
pub mod search_universities;
pub mod suggest_universities;
