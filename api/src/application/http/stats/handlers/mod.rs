pub mod get_country_stats;
pub mod get_overview_stats;
