use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// One university's full profile. Every field below the identifier is
/// optional: records come from an external ingestion process and no group
/// is guaranteed to be present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct University {
    pub id: Uuid,
    pub institution: Institution,
    pub general_information: GeneralInformation,
    pub officers: Vec<Officer>,
    pub divisions: Vec<Division>,
    pub degrees: Vec<DegreeProgram>,
    pub student_staff_numbers: Option<StudentStaffNumbers>,
}

/// Identity group: names and registry identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Institution {
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub iau_id: Option<String>,
    pub country_line: Option<String>,
    pub updated_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GeneralInformation {
    pub address: Option<Address>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub status: Option<String>,
    pub established: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, Default)]
pub struct Address {
    pub street: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub post_code: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Officer {
    pub title: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Division {
    pub name: Option<String>,
    pub field_of_study: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DegreeProgram {
    pub name: Option<String>,
    pub level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentStaffNumbers {
    pub total_students: Option<i64>,
    pub total_staff: Option<i64>,
    pub academic_staff: Option<i64>,
}

/// Fixed summary projection returned by search: only flat fields, never the
/// nested detail groups, so response size stays bounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UniversitySummary {
    pub id: Uuid,
    pub iau_id: Option<String>,
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub country_line: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub status: Option<String>,
    pub established: Option<String>,
    pub total_students: Option<i32>,
    pub updated_on: Option<NaiveDate>,
}

/// Minimal projection for type-ahead display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UniversitySuggestion {
    pub id: Uuid,
    pub iau_id: Option<String>,
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub country_line: Option<String>,
    pub city: Option<String>,
}
