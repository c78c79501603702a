use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    university::{
        entities::{University, UniversitySuggestion},
        ports::{UniversityRepository, UniversityService},
        value_objects::{
            CountryCount, OverviewStats, PageDescriptor, SearchUniversitiesInput, UniversityPage,
            SUGGEST_DEFAULT_LIMIT, SUGGEST_MAX_LIMIT, SUGGEST_MIN_QUERY_LEN,
        },
    },
};

const TOP_COUNTRIES_LIMIT: u64 = 10;
const TOP_TYPES_LIMIT: u64 = 5;
const RECENTLY_UPDATED_LIMIT: u64 = 5;

impl<U, HC> UniversityService for Service<U, HC>
where
    U: UniversityRepository,
    HC: HealthCheckRepository,
{
    async fn search_universities(
        &self,
        input: SearchUniversitiesInput,
    ) -> Result<UniversityPage, CoreError> {
        let total = self
            .university_repository
            .count(input.filter.clone())
            .await?;

        let records = self
            .university_repository
            .search(
                input.filter,
                input.sort,
                input.page.offset(),
                input.page.limit,
            )
            .await?;

        Ok(UniversityPage {
            records,
            pagination: PageDescriptor::new(input.page, total),
        })
    }

    async fn get_university(&self, identifier: String) -> Result<Option<University>, CoreError> {
        // The two identifier spaces are disjoint in format: native ids are
        // UUIDs, registry ids are not. A simple format sniff suffices.
        match Uuid::parse_str(&identifier) {
            Ok(id) => self.university_repository.get_by_id(id).await,
            Err(_) => self.university_repository.get_by_iau_id(identifier).await,
        }
    }

    async fn suggest_universities(
        &self,
        query: String,
        limit: Option<u64>,
    ) -> Result<Vec<UniversitySuggestion>, CoreError> {
        let query = query.trim().to_string();
        if query.chars().count() < SUGGEST_MIN_QUERY_LEN {
            return Ok(Vec::new());
        }

        let limit = limit
            .unwrap_or(SUGGEST_DEFAULT_LIMIT)
            .clamp(1, SUGGEST_MAX_LIMIT);

        self.university_repository.suggest(query, limit).await
    }

    async fn list_countries(&self) -> Result<Vec<String>, CoreError> {
        self.university_repository.distinct_countries().await
    }

    async fn list_cities(&self, country: Option<String>) -> Result<Vec<String>, CoreError> {
        self.university_repository.distinct_cities(country).await
    }

    async fn country_stats(&self) -> Result<Vec<CountryCount>, CoreError> {
        self.university_repository.country_counts(None).await
    }

    async fn overview_stats(&self) -> Result<OverviewStats, CoreError> {
        let (total_universities, top_countries, institution_types, recently_updated) = tokio::try_join!(
            self.university_repository.total_count(),
            self.university_repository
                .country_counts(Some(TOP_COUNTRIES_LIMIT)),
            self.university_repository.type_counts(TOP_TYPES_LIMIT),
            self.university_repository
                .recently_updated(RECENTLY_UPDATED_LIMIT),
        )?;

        Ok(OverviewStats {
            total_universities,
            top_countries,
            institution_types,
            recently_updated,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::{
        health::ports::MockHealthCheckRepository,
        university::{
            entities::UniversitySummary,
            ports::MockUniversityRepository,
            value_objects::{
                InstitutionTypeCount, PageQuery, RecentlyUpdated, SearchFilter, SearchFilterInput,
                SortSpec,
            },
        },
    };

    fn service(
        repository: MockUniversityRepository,
    ) -> Service<MockUniversityRepository, MockHealthCheckRepository> {
        Service::new(repository, MockHealthCheckRepository::new())
    }

    fn summary(name: &str) -> UniversitySummary {
        UniversitySummary {
            id: Uuid::new_v4(),
            iau_id: None,
            name: Some(name.to_string()),
            short_name: None,
            country_line: Some("Japan".to_string()),
            city: None,
            country: None,
            kind: None,
            status: None,
            established: None,
            total_students: None,
            updated_on: None,
        }
    }

    #[tokio::test]
    async fn search_page_two_of_twenty_five_japan_records() {
        let mut repository = MockUniversityRepository::new();
        repository
            .expect_count()
            .returning(|_| Box::pin(async { Ok(25) }));
        repository
            .expect_search()
            .withf(|_, _, offset, limit| *offset == 10 && *limit == 10)
            .returning(|_, _, _, _| {
                Box::pin(async { Ok((11..=20).map(|i| summary(&format!("U{i:02}"))).collect()) })
            });

        let filter = SearchFilter::new(SearchFilterInput {
            search: Some(String::new()),
            country: Some("Japan".to_string()),
            ..Default::default()
        });
        let page = service(repository)
            .search_universities(SearchUniversitiesInput {
                filter,
                sort: SortSpec::new(Some("name"), Some("asc")),
                page: PageQuery::new(Some(2), Some(10)),
            })
            .await
            .unwrap();

        assert_eq!(page.records.len(), 10);
        assert_eq!(page.pagination.page, 2);
        assert_eq!(page.pagination.limit, 10);
        assert_eq!(page.pagination.total, 25);
        assert_eq!(page.pagination.total_pages, 3);
        assert!(page.pagination.has_next);
        assert!(page.pagination.has_prev);
    }

    #[tokio::test]
    async fn search_beyond_last_page_returns_empty_slice_with_flags() {
        let mut repository = MockUniversityRepository::new();
        repository
            .expect_count()
            .returning(|_| Box::pin(async { Ok(25) }));
        repository
            .expect_search()
            .withf(|_, _, offset, limit| *offset == 40 && *limit == 10)
            .returning(|_, _, _, _| Box::pin(async { Ok(Vec::new()) }));

        let page = service(repository)
            .search_universities(SearchUniversitiesInput {
                page: PageQuery::new(Some(5), Some(10)),
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(page.records.is_empty());
        assert_eq!(page.pagination.total_pages, 3);
        assert!(!page.pagination.has_next);
        assert!(page.pagination.has_prev);
    }

    #[tokio::test]
    async fn uuid_identifier_resolves_via_native_id() {
        let id = Uuid::new_v4();
        let mut repository = MockUniversityRepository::new();
        repository
            .expect_get_by_id()
            .with(eq(id))
            .returning(|_| Box::pin(async { Ok(None) }));

        let found = service(repository)
            .get_university(id.to_string())
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn other_identifier_resolves_via_alternate_id() {
        let mut repository = MockUniversityRepository::new();
        repository
            .expect_get_by_iau_id()
            .with(eq("IAU-019588".to_string()))
            .returning(|_| Box::pin(async { Ok(None) }));

        let found = service(repository)
            .get_university("IAU-019588".to_string())
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn short_suggestion_query_never_touches_the_store() {
        // No expectations set: any repository call would panic.
        let repository = MockUniversityRepository::new();

        let suggestions = service(repository)
            .suggest_universities("M".to_string(), Some(10))
            .await
            .unwrap();
        assert!(suggestions.is_empty());
    }

    #[tokio::test]
    async fn suggestion_limit_is_clamped_to_twenty() {
        let mut repository = MockUniversityRepository::new();
        repository
            .expect_suggest()
            .with(eq("MIT".to_string()), eq(20))
            .returning(|_, _| Box::pin(async { Ok(Vec::new()) }));

        service(repository)
            .suggest_universities("  MIT  ".to_string(), Some(50))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn suggestion_limit_defaults_to_ten() {
        let mut repository = MockUniversityRepository::new();
        repository
            .expect_suggest()
            .with(eq("MIT".to_string()), eq(10))
            .returning(|_, _| Box::pin(async { Ok(Vec::new()) }));

        service(repository)
            .suggest_universities("MIT".to_string(), None)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn overview_stats_combines_the_four_aggregations() {
        let mut repository = MockUniversityRepository::new();
        repository
            .expect_total_count()
            .returning(|| Box::pin(async { Ok(9500) }));
        repository
            .expect_country_counts()
            .with(eq(Some(10)))
            .returning(|_| {
                Box::pin(async {
                    Ok(vec![CountryCount {
                        country: "France".to_string(),
                        count: 300,
                    }])
                })
            });
        repository.expect_type_counts().with(eq(5)).returning(|_| {
            Box::pin(async {
                Ok(vec![InstitutionTypeCount {
                    kind: "University".to_string(),
                    count: 7000,
                }])
            })
        });
        repository
            .expect_recently_updated()
            .with(eq(5))
            .returning(|_| {
                Box::pin(async {
                    Ok(vec![RecentlyUpdated {
                        id: Uuid::new_v4(),
                        name: Some("Uppsala University".to_string()),
                        country_line: Some("Sweden".to_string()),
                        updated_on: NaiveDate::from_ymd_opt(2024, 3, 1),
                    }])
                })
            });

        let stats = service(repository).overview_stats().await.unwrap();
        assert_eq!(stats.total_universities, 9500);
        assert_eq!(stats.top_countries.len(), 1);
        assert_eq!(stats.institution_types[0].kind, "University");
        assert_eq!(stats.recently_updated.len(), 1);
    }
}
