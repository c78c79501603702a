use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Raw filter parameters as they arrive from the request layer.
#[derive(Debug, Clone, Default)]
pub struct SearchFilterInput {
    pub search: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub name: Option<String>,
    pub kind: Option<String>,
    pub status: Option<String>,
}

/// Field-level predicates for selecting matching records. All present
/// predicates combine with AND; `name` alone expands to name OR short name.
///
/// Precedence rule: when `search` is present, `name` is dropped entirely.
/// The full-text search already covers the name fields, so a `name` value
/// supplied alongside `search` is never consulted. The rule is applied here,
/// at construction, so every consumer sees the resolved filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchFilter {
    pub search: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub name: Option<String>,
    pub kind: Option<String>,
    pub status: Option<String>,
}

impl SearchFilter {
    pub fn new(input: SearchFilterInput) -> Self {
        let search = non_empty(input.search);
        let name = if search.is_some() {
            None
        } else {
            non_empty(input.name)
        };

        Self {
            search,
            country: non_empty(input.country),
            city: non_empty(input.city),
            name,
            kind: non_empty(input.kind),
            status: non_empty(input.status),
        }
    }

    /// An empty filter matches every record.
    pub fn is_empty(&self) -> bool {
        self.search.is_none()
            && self.country.is_none()
            && self.city.is_none()
            && self.name.is_none()
            && self.kind.is_none()
            && self.status.is_none()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Name,
    Country,
    City,
    Type,
    Updated,
    Established,
}

impl SortField {
    pub const VALID_FIELDS: [&'static str; 6] =
        ["name", "country", "city", "type", "updated", "established"];
}

impl FromStr for SortField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortField::Name),
            "country" => Ok(SortField::Country),
            "city" => Ok(SortField::City),
            "type" => Ok(SortField::Type),
            "updated" => Ok(SortField::Updated),
            "established" => Ok(SortField::Established),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(()),
        }
    }
}

/// Single-key sort specification. An unknown or absent field falls back to
/// name ascending; the repository appends the record id as a deterministic
/// tie-breaker so pagination is reproducible across identical keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(field: Option<&str>, order: Option<&str>) -> Self {
        Self {
            field: field.and_then(|f| f.parse().ok()).unwrap_or_default(),
            order: order.and_then(|o| o.parse().ok()).unwrap_or_default(),
        }
    }
}

pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const MAX_PAGE_SIZE: u64 = 100;

/// Requested result window: page defaults to 1 with floor 1, limit defaults
/// to 20 clamped to [1,100].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u64,
    pub limit: u64,
}

impl PageQuery {
    pub fn new(page: Option<u64>, limit: Option<u64>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            limit: limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Saturating: absurdly large page numbers clamp to the end of the
    /// address space instead of wrapping to a wrong window.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Pagination metadata accompanying a result slice. `has_next` and
/// `has_prev` are computed arithmetically, never clamped: a page past the
/// last one yields an empty slice with the flags still correct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageDescriptor {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PageDescriptor {
    pub fn new(query: PageQuery, total: u64) -> Self {
        Self {
            page: query.page,
            limit: query.limit,
            total,
            total_pages: total.div_ceil(query.limit),
            has_next: query.page.saturating_mul(query.limit) < total,
            has_prev: query.page > 1,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchUniversitiesInput {
    pub filter: SearchFilter,
    pub sort: SortSpec,
    pub page: PageQuery,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UniversityPage {
    pub records: Vec<super::entities::UniversitySummary>,
    pub pagination: PageDescriptor,
}

pub const SUGGEST_MIN_QUERY_LEN: usize = 2;
pub const SUGGEST_DEFAULT_LIMIT: u64 = 10;
pub const SUGGEST_MAX_LIMIT: u64 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CountryCount {
    pub country: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct InstitutionTypeCount {
    #[serde(rename = "type")]
    pub kind: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecentlyUpdated {
    pub id: Uuid,
    pub name: Option<String>,
    pub country_line: Option<String>,
    pub updated_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OverviewStats {
    pub total_universities: u64,
    pub top_countries: Vec<CountryCount>,
    pub institution_types: Vec<InstitutionTypeCount>,
    pub recently_updated: Vec<RecentlyUpdated>,
}
