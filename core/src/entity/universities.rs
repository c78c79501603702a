use sea_orm::entity::prelude::*;

/// University records table. Identity and every filterable or sortable
/// field is a scalar column; the nested profile groups live in JSONB
/// columns and are decoded by the repository mappers. A DB-maintained
/// `search_vector` tsvector column (not mapped here) backs full-text
/// search over name, short name, city, divisions and programs.
///
/// Rows are written by an external ingestion process only; this crate
/// never inserts or updates them.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "universities")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub iau_id: Option<String>,
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub country_line: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    #[sea_orm(column_name = "type")]
    pub kind: Option<String>,
    pub status: Option<String>,
    pub established: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub total_students: Option<i32>,
    pub updated_on: Option<Date>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub address: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub officers: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub divisions: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub degrees: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub student_staff_numbers: Option<Json>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
