use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    university::{
        entities::{University, UniversitySuggestion, UniversitySummary},
        value_objects::{
            CountryCount, InstitutionTypeCount, OverviewStats, RecentlyUpdated, SearchFilter,
            SearchUniversitiesInput, SortSpec, UniversityPage,
        },
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait UniversityService: Send + Sync {
    fn search_universities(
        &self,
        input: SearchUniversitiesInput,
    ) -> impl Future<Output = Result<UniversityPage, CoreError>> + Send;

    /// Resolves either a native record id (UUID format) or an alternate
    /// registry identifier to at most one record.
    fn get_university(
        &self,
        identifier: String,
    ) -> impl Future<Output = Result<Option<University>, CoreError>> + Send;

    fn suggest_universities(
        &self,
        query: String,
        limit: Option<u64>,
    ) -> impl Future<Output = Result<Vec<UniversitySuggestion>, CoreError>> + Send;

    fn list_countries(&self) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;

    fn list_cities(
        &self,
        country: Option<String>,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;

    fn country_stats(&self) -> impl Future<Output = Result<Vec<CountryCount>, CoreError>> + Send;

    fn overview_stats(&self) -> impl Future<Output = Result<OverviewStats, CoreError>> + Send;
}

/// Repository port over the university store. All operations are single
/// bounded reads; the store handles concurrent access.
#[cfg_attr(test, mockall::automock)]
pub trait UniversityRepository: Send + Sync {
    fn count(
        &self,
        filter: SearchFilter,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn search(
        &self,
        filter: SearchFilter,
        sort: SortSpec,
        offset: u64,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<UniversitySummary>, CoreError>> + Send;

    fn get_by_id(
        &self,
        id: Uuid,
    ) -> impl Future<Output = Result<Option<University>, CoreError>> + Send;

    fn get_by_iau_id(
        &self,
        iau_id: String,
    ) -> impl Future<Output = Result<Option<University>, CoreError>> + Send;

    fn suggest(
        &self,
        query: String,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<UniversitySuggestion>, CoreError>> + Send;

    fn distinct_countries(&self) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;

    fn distinct_cities(
        &self,
        country: Option<String>,
    ) -> impl Future<Output = Result<Vec<String>, CoreError>> + Send;

    fn country_counts(
        &self,
        limit: Option<u64>,
    ) -> impl Future<Output = Result<Vec<CountryCount>, CoreError>> + Send;

    fn type_counts(
        &self,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<InstitutionTypeCount>, CoreError>> + Send;

    fn recently_updated(
        &self,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<RecentlyUpdated>, CoreError>> + Send;

    fn total_count(&self) -> impl Future<Output = Result<u64, CoreError>> + Send;
}
