use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, EntityTrait, Order,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, Statement,
    sea_query::{Expr, extension::postgres::PgExpr},
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        university::{
            entities::{University, UniversitySuggestion, UniversitySummary},
            ports::UniversityRepository,
            value_objects::{
                CountryCount, InstitutionTypeCount, RecentlyUpdated, SearchFilter, SortField,
                SortOrder, SortSpec,
            },
        },
    },
    entity::universities::{Column, Entity},
    infrastructure::university::mappers::{self, SuggestionRow, SummaryRow},
};

#[derive(Debug, Clone)]
pub struct PostgresUniversityRepository {
    pub db: DatabaseConnection,
}

impl PostgresUniversityRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Escapes LIKE wildcards so filter values always match literally.
fn like_pattern(value: &str) -> String {
    let escaped = value
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

/// Translates a resolved [`SearchFilter`] into a store condition. All
/// present predicates are ANDed; `name` alone expands to name OR short
/// name. The `search` predicate hits the DB-maintained tsvector column.
fn build_condition(filter: &SearchFilter) -> Condition {
    let mut condition = Condition::all();

    if let Some(ref search) = filter.search {
        condition = condition.add(Expr::cust_with_values(
            "search_vector @@ plainto_tsquery('simple', ?)",
            [search.clone()],
        ));
    }

    if let Some(ref country) = filter.country {
        condition = condition.add(Expr::col(Column::CountryLine).ilike(like_pattern(country)));
    }

    if let Some(ref city) = filter.city {
        condition = condition.add(Expr::col(Column::City).ilike(like_pattern(city)));
    }

    if let Some(ref name) = filter.name {
        condition = condition.add(
            Condition::any()
                .add(Expr::col(Column::Name).ilike(like_pattern(name)))
                .add(Expr::col(Column::ShortName).ilike(like_pattern(name))),
        );
    }

    if let Some(ref kind) = filter.kind {
        condition = condition.add(Expr::col(Column::Kind).ilike(like_pattern(kind)));
    }

    if let Some(ref status) = filter.status {
        condition = condition.add(Expr::col(Column::Status).ilike(like_pattern(status)));
    }

    condition
}

fn sort_column(field: SortField) -> Column {
    match field {
        SortField::Name => Column::Name,
        SortField::Country => Column::CountryLine,
        SortField::City => Column::City,
        SortField::Type => Column::Kind,
        SortField::Updated => Column::UpdatedOn,
        SortField::Established => Column::Established,
    }
}

/// Applies the single-key sort plus the id tie-breaker that keeps
/// pagination reproducible across identical keys.
fn apply_sort(query: Select<Entity>, sort: SortSpec) -> Select<Entity> {
    let order = match sort.order {
        SortOrder::Asc => Order::Asc,
        SortOrder::Desc => Order::Desc,
    };

    query
        .order_by(sort_column(sort.field), order)
        .order_by(Column::Id, Order::Asc)
}

fn summary_projection(query: Select<Entity>) -> Select<Entity> {
    query
        .select_only()
        .columns([
            Column::Id,
            Column::IauId,
            Column::Name,
            Column::ShortName,
            Column::CountryLine,
            Column::City,
            Column::Country,
            Column::Status,
            Column::Established,
            Column::TotalStudents,
            Column::UpdatedOn,
        ])
        .column_as(Column::Kind, "kind")
}

fn suggestion_projection(query: Select<Entity>) -> Select<Entity> {
    query.select_only().columns([
        Column::Id,
        Column::IauId,
        Column::Name,
        Column::ShortName,
        Column::CountryLine,
        Column::City,
    ])
}

impl UniversityRepository for PostgresUniversityRepository {
    async fn count(&self, filter: SearchFilter) -> Result<u64, CoreError> {
        Entity::find()
            .filter(build_condition(&filter))
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to count universities: {}", e);
                CoreError::InternalServerError
            })
    }

    async fn search(
        &self,
        filter: SearchFilter,
        sort: SortSpec,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<UniversitySummary>, CoreError> {
        let query = apply_sort(Entity::find().filter(build_condition(&filter)), sort);

        let rows = summary_projection(query)
            .offset(offset)
            .limit(limit)
            .into_model::<SummaryRow>()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to search universities: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(rows.into_iter().map(UniversitySummary::from).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<University>, CoreError> {
        let university = Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get university by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(mappers::map_university);

        Ok(university)
    }

    async fn get_by_iau_id(&self, iau_id: String) -> Result<Option<University>, CoreError> {
        let university = Entity::find()
            .filter(Column::IauId.eq(iau_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get university by iau_id: {}", e);
                CoreError::InternalServerError
            })?
            .map(mappers::map_university);

        Ok(university)
    }

    async fn suggest(
        &self,
        query: String,
        limit: u64,
    ) -> Result<Vec<UniversitySuggestion>, CoreError> {
        let condition = Condition::any()
            .add(Expr::col(Column::Name).ilike(like_pattern(&query)))
            .add(Expr::col(Column::ShortName).ilike(like_pattern(&query)));

        let rows = suggestion_projection(Entity::find().filter(condition))
            .limit(limit)
            .into_model::<SuggestionRow>()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to suggest universities: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(rows.into_iter().map(UniversitySuggestion::from).collect())
    }

    async fn distinct_countries(&self) -> Result<Vec<String>, CoreError> {
        let rows: Vec<Option<String>> = Entity::find()
            .select_only()
            .column(Column::CountryLine)
            .distinct()
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list countries: {}", e);
                CoreError::InternalServerError
            })?;

        let mut countries: Vec<String> = rows
            .into_iter()
            .flatten()
            .filter(|c| !c.trim().is_empty())
            .collect();
        countries.sort();

        Ok(countries)
    }

    async fn distinct_cities(&self, country: Option<String>) -> Result<Vec<String>, CoreError> {
        let mut query = Entity::find()
            .select_only()
            .column(Column::City)
            .distinct();

        if let Some(ref country) = country {
            query = query.filter(Expr::col(Column::CountryLine).ilike(like_pattern(country)));
        }

        let rows: Vec<Option<String>> = query.into_tuple().all(&self.db).await.map_err(|e| {
            error!("Failed to list cities: {}", e);
            CoreError::InternalServerError
        })?;

        let mut cities: Vec<String> = rows
            .into_iter()
            .flatten()
            .filter(|c| !c.trim().is_empty())
            .collect();
        cities.sort();

        Ok(cities)
    }

    async fn country_counts(&self, limit: Option<u64>) -> Result<Vec<CountryCount>, CoreError> {
        let limit_clause = limit.map(|l| format!(" LIMIT {l}")).unwrap_or_default();
        let stmt = Statement::from_string(
            sea_orm::DatabaseBackend::Postgres,
            format!(
                r#"
                SELECT country_line AS country, COUNT(*) AS count
                FROM universities
                WHERE country_line IS NOT NULL AND btrim(country_line) <> ''
                GROUP BY country_line
                ORDER BY count DESC{limit_clause}
                "#
            ),
        );

        let rows = self.db.query_all(stmt).await.map_err(|e| {
            error!("Failed to get country counts: {}", e);
            CoreError::InternalServerError
        })?;

        let counts = rows
            .into_iter()
            .filter_map(|row| {
                let country: String = row.try_get("", "country").ok()?;
                let count: i64 = row.try_get("", "count").ok()?;
                Some(CountryCount { country, count })
            })
            .collect();

        Ok(counts)
    }

    async fn type_counts(&self, limit: u64) -> Result<Vec<InstitutionTypeCount>, CoreError> {
        let stmt = Statement::from_string(
            sea_orm::DatabaseBackend::Postgres,
            format!(
                r#"
                SELECT "type" AS kind, COUNT(*) AS count
                FROM universities
                WHERE "type" IS NOT NULL AND btrim("type") <> ''
                GROUP BY "type"
                ORDER BY count DESC
                LIMIT {limit}
                "#
            ),
        );

        let rows = self.db.query_all(stmt).await.map_err(|e| {
            error!("Failed to get type counts: {}", e);
            CoreError::InternalServerError
        })?;

        let counts = rows
            .into_iter()
            .filter_map(|row| {
                let kind: String = row.try_get("", "kind").ok()?;
                let count: i64 = row.try_get("", "count").ok()?;
                Some(InstitutionTypeCount { kind, count })
            })
            .collect();

        Ok(counts)
    }

    async fn recently_updated(&self, limit: u64) -> Result<Vec<RecentlyUpdated>, CoreError> {
        let stmt = Statement::from_string(
            sea_orm::DatabaseBackend::Postgres,
            format!(
                r#"
                SELECT id, name, country_line, updated_on
                FROM universities
                WHERE updated_on IS NOT NULL
                ORDER BY updated_on DESC
                LIMIT {limit}
                "#
            ),
        );

        let rows = self.db.query_all(stmt).await.map_err(|e| {
            error!("Failed to get recently updated universities: {}", e);
            CoreError::InternalServerError
        })?;

        let records = rows
            .into_iter()
            .filter_map(|row| {
                let id: Uuid = row.try_get("", "id").ok()?;
                Some(RecentlyUpdated {
                    id,
                    name: row.try_get("", "name").ok(),
                    country_line: row.try_get("", "country_line").ok(),
                    updated_on: row.try_get("", "updated_on").ok(),
                })
            })
            .collect();

        Ok(records)
    }

    async fn total_count(&self) -> Result<u64, CoreError> {
        Entity::find().count(&self.db).await.map_err(|e| {
            error!("Failed to count universities: {}", e);
            CoreError::InternalServerError
        })
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DbBackend, QueryTrait};

    use super::*;
    use crate::domain::university::value_objects::SearchFilterInput;

    fn filter(input: SearchFilterInput) -> SearchFilter {
        SearchFilter::new(input)
    }

    fn build_sql(filter: &SearchFilter) -> String {
        Entity::find()
            .filter(build_condition(filter))
            .build(DbBackend::Postgres)
            .to_string()
    }

    #[test]
    fn empty_filter_builds_a_match_all_condition() {
        // An empty AND condition renders as WHERE TRUE: every record matches.
        let sql = build_sql(&filter(SearchFilterInput::default()));
        assert!(sql.contains("WHERE TRUE"), "expected match-all in: {sql}");
        assert!(!sql.contains("ILIKE"), "unexpected predicate in: {sql}");
        assert!(
            !sql.contains("plainto_tsquery"),
            "unexpected predicate in: {sql}"
        );
    }

    #[test]
    fn country_and_city_combine_with_and() {
        let sql = build_sql(&filter(SearchFilterInput {
            country: Some("France".to_string()),
            city: Some("Paris".to_string()),
            ..Default::default()
        }));

        assert!(sql.contains("ILIKE"), "missing ILIKE in: {sql}");
        assert!(sql.contains("%France%"), "missing country pattern in: {sql}");
        assert!(sql.contains("%Paris%"), "missing city pattern in: {sql}");
        assert!(sql.contains(" AND "), "predicates not ANDed in: {sql}");
    }

    #[test]
    fn name_filter_matches_name_or_short_name() {
        let sql = build_sql(&filter(SearchFilterInput {
            name: Some("Tech".to_string()),
            ..Default::default()
        }));

        assert!(sql.contains(r#""name""#), "missing name column in: {sql}");
        assert!(
            sql.contains(r#""short_name""#),
            "missing short_name column in: {sql}"
        );
        assert!(sql.contains(" OR "), "name predicates not ORed in: {sql}");
    }

    #[test]
    fn search_builds_a_tsquery_predicate_and_drops_name() {
        let sql = build_sql(&filter(SearchFilterInput {
            search: Some("polytechnic".to_string()),
            name: Some("Tech".to_string()),
            ..Default::default()
        }));

        assert!(
            sql.contains("plainto_tsquery"),
            "missing tsquery predicate in: {sql}"
        );
        assert!(
            !sql.contains("%Tech%"),
            "name predicate should be dropped in: {sql}"
        );
    }

    #[test]
    fn like_wildcards_in_values_are_escaped() {
        let sql = build_sql(&filter(SearchFilterInput {
            country: Some("100%_France".to_string()),
            ..Default::default()
        }));

        assert!(
            sql.contains(r"\%") && sql.contains(r"\_"),
            "wildcards not escaped in: {sql}"
        );
    }

    #[test]
    fn established_desc_sorts_on_the_establishment_field() {
        let sql = apply_sort(
            Entity::find(),
            SortSpec::new(Some("established"), Some("desc")),
        )
        .build(DbBackend::Postgres)
        .to_string();

        assert!(
            sql.contains(r#""established" DESC"#),
            "missing sort key in: {sql}"
        );
    }

    #[test]
    fn sorts_carry_the_id_tie_breaker() {
        let sql = apply_sort(Entity::find(), SortSpec::new(Some("name"), None))
            .build(DbBackend::Postgres)
            .to_string();

        let name_pos = sql.find(r#""name" ASC"#).expect("primary sort key");
        let id_pos = sql.find(r#""id" ASC"#).expect("tie-breaker key");
        assert!(name_pos < id_pos, "tie-breaker should follow the sort key in: {sql}");
    }

    #[test]
    fn default_sort_is_name_ascending() {
        let sql = apply_sort(Entity::find(), SortSpec::default())
            .build(DbBackend::Postgres)
            .to_string();

        assert!(sql.contains(r#""name" ASC"#), "missing default sort in: {sql}");
    }

    #[test]
    fn summary_projection_never_selects_the_detail_groups() {
        let sql = summary_projection(Entity::find())
            .build(DbBackend::Postgres)
            .to_string();

        for group in ["address", "officers", "divisions", "degrees"] {
            assert!(
                !sql.contains(group),
                "projection leaks detail group {group}: {sql}"
            );
        }
        assert!(sql.contains(r#""total_students""#));
    }

    #[test]
    fn suggestion_projection_is_minimal() {
        let sql = suggestion_projection(Entity::find())
            .build(DbBackend::Postgres)
            .to_string();

        assert!(sql.contains(r#""short_name""#));
        assert!(!sql.contains(r#""status""#));
        assert!(!sql.contains(r#""total_students""#));
    }
}
