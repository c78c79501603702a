use chrono::NaiveDate;
use sea_orm::FromQueryResult;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::{
    domain::university::entities::{
        Address, DegreeProgram, Division, GeneralInformation, Institution, Officer,
        StudentStaffNumbers, University, UniversitySuggestion, UniversitySummary,
    },
    entity::universities::Model,
};

/// Decodes one JSONB profile group. A missing or malformed group maps to
/// absent, matching the read model's "no field is required" rule.
fn json_group<T: DeserializeOwned>(value: Option<serde_json::Value>) -> Option<T> {
    value.and_then(|v| serde_json::from_value(v).ok())
}

pub fn map_university(model: Model) -> University {
    University {
        id: model.id,
        institution: Institution {
            name: model.name,
            short_name: model.short_name,
            iau_id: model.iau_id,
            country_line: model.country_line,
            updated_on: model.updated_on,
        },
        general_information: GeneralInformation {
            address: json_group::<Address>(model.address),
            kind: model.kind,
            status: model.status,
            established: model.established,
            website: model.website,
            phone: model.phone,
        },
        officers: json_group::<Vec<Officer>>(model.officers).unwrap_or_default(),
        divisions: json_group::<Vec<Division>>(model.divisions).unwrap_or_default(),
        degrees: json_group::<Vec<DegreeProgram>>(model.degrees).unwrap_or_default(),
        student_staff_numbers: json_group::<StudentStaffNumbers>(model.student_staff_numbers),
    }
}

/// Row shape of the fixed search projection.
#[derive(Debug, FromQueryResult)]
pub struct SummaryRow {
    pub id: Uuid,
    pub iau_id: Option<String>,
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub country_line: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub kind: Option<String>,
    pub status: Option<String>,
    pub established: Option<String>,
    pub total_students: Option<i32>,
    pub updated_on: Option<NaiveDate>,
}

impl From<SummaryRow> for UniversitySummary {
    fn from(row: SummaryRow) -> Self {
        Self {
            id: row.id,
            iau_id: row.iau_id,
            name: row.name,
            short_name: row.short_name,
            country_line: row.country_line,
            city: row.city,
            country: row.country,
            kind: row.kind,
            status: row.status,
            established: row.established,
            total_students: row.total_students,
            updated_on: row.updated_on,
        }
    }
}

/// Row shape of the minimal type-ahead projection.
#[derive(Debug, FromQueryResult)]
pub struct SuggestionRow {
    pub id: Uuid,
    pub iau_id: Option<String>,
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub country_line: Option<String>,
    pub city: Option<String>,
}

impl From<SuggestionRow> for UniversitySuggestion {
    fn from(row: SuggestionRow) -> Self {
        Self {
            id: row.id,
            iau_id: row.iau_id,
            name: row.name,
            short_name: row.short_name,
            country_line: row.country_line,
            city: row.city,
        }
    }
}
