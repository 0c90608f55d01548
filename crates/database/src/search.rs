use tokio_postgres::types::ToSql;
use trails_core::DEFAULT_LIMIT;
use trails_core::DEFAULT_PAGE;
use trails_dto::TrailsQuery;
use trails_pg::Schema;
use trails_records::Column;
use trails_records::Trail;

/// A filtered, paginated query over the trails table.
///
/// Filters are exact, case-insensitive equality on amenity columns and
/// are combined with AND. Page and limit are clamped to at least 1, so
/// the offset is never negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Search {
    filters: Vec<(Column, String)>,
    page: i64,
    limit: i64,
    offset: i64,
}

impl Default for Search {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl Search {
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        let page = page.unwrap_or(DEFAULT_PAGE).max(1);
        let limit = limit.unwrap_or(DEFAULT_LIMIT).max(1);
        Self {
            filters: Vec::new(),
            page,
            limit,
            offset: (page - 1).saturating_mul(limit),
        }
    }

    /// Adds an equality filter. Empty values are ignored.
    pub fn filter(mut self, column: Column, value: &str) -> Self {
        if !value.is_empty() {
            self.filters.push((column, value.to_string()));
        }
        self
    }

    pub fn page(&self) -> i64 {
        self.page
    }
    pub fn limit(&self) -> i64 {
        self.limit
    }
    pub fn offset(&self) -> i64 {
        self.offset
    }
    pub fn filters(&self) -> &[(Column, String)] {
        &self.filters
    }

    /// Whether `trail` passes every filter.
    pub fn matches(&self, trail: &Trail) -> bool {
        self.filters
            .iter()
            .all(|(column, value)| trail.get(*column).to_lowercase() == value.to_lowercase())
    }

    /// The SELECT statement; parameters are numbered in filter order,
    /// followed by limit and offset.
    pub fn sql(&self) -> String {
        let n = self.filters.len();
        let mut sql = format!("SELECT {} FROM {}", Trail::fields(), Trail::name());
        if n > 0 {
            let predicates = self
                .filters
                .iter()
                .enumerate()
                .map(|(i, (column, _))| format!("lower({}) = lower(${})", column, i + 1))
                .collect::<Vec<_>>()
                .join(" AND ");
            sql.push_str(" WHERE ");
            sql.push_str(&predicates);
        }
        sql.push_str(&format!(" LIMIT ${} OFFSET ${}", n + 1, n + 2));
        sql
    }

    /// Bind values matching the placeholders of [`sql`](Self::sql).
    pub fn params(&self) -> Vec<&(dyn ToSql + Sync)> {
        let mut params = self
            .filters
            .iter()
            .map(|(_, value)| value as &(dyn ToSql + Sync))
            .collect::<Vec<_>>();
        params.push(&self.limit);
        params.push(&self.offset);
        params
    }
}

impl From<&TrailsQuery> for Search {
    fn from(query: &TrailsQuery) -> Self {
        query
            .filters()
            .into_iter()
            .fold(Self::new(query.page(), query.limit()), |search, (column, value)| {
                search.filter(column, value)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let search = Search::default();
        assert_eq!(search.page(), 1);
        assert_eq!(search.limit(), 10);
        assert_eq!(search.offset(), 0);
        assert!(search.filters().is_empty());
    }

    #[test]
    fn clamps_page_and_limit() {
        let search = Search::new(Some(0), Some(-5));
        assert_eq!((search.page(), search.limit(), search.offset()), (1, 1, 0));
        let search = Search::new(Some(3), Some(20));
        assert_eq!(search.offset(), 40);
        let search = Search::new(Some(i64::MAX), Some(i64::MAX));
        assert_eq!(search.offset(), i64::MAX);
    }

    #[test]
    fn sql_without_filters() {
        let search = Search::default();
        assert_eq!(
            search.sql(),
            format!("SELECT {} FROM trails LIMIT $1 OFFSET $2", Trail::fields())
        );
        assert_eq!(search.params().len(), 2);
    }

    #[test]
    fn sql_with_filters() {
        let search = Search::new(Some(2), Some(5))
            .filter(Column::Restrooms, "Yes")
            .filter(Column::Fishing, "")
            .filter(Column::DogTube, "no");
        let sql = search.sql();
        assert!(sql.ends_with(
            " WHERE lower(restrooms) = lower($1) AND lower(dog_tube) = lower($2) LIMIT $3 OFFSET $4"
        ));
        assert_eq!(search.params().len(), 4);
        assert_eq!(search.offset(), 5);
    }

    #[test]
    fn matches_ignores_case() {
        let trail = Trail::new(1)
            .with(Column::Restrooms, "yes")
            .with(Column::Fee, "no");
        let search = Search::default().filter(Column::Restrooms, "YES");
        assert!(search.matches(&trail));
        let search = search.filter(Column::Fee, "yes");
        assert!(!search.matches(&trail));
        assert!(Search::default().matches(&trail));
    }

    #[test]
    fn from_query() {
        let query = TrailsQuery {
            grills: Some("Yes".into()),
            fee: Some("".into()),
            page: Some("4".into()),
            limit: Some("bad".into()),
            ..TrailsQuery::default()
        };
        let search = Search::from(&query);
        assert_eq!(search.page(), 4);
        assert_eq!(search.limit(), 10);
        assert_eq!(search.offset(), 30);
        assert_eq!(search.filters(), &[(Column::Grills, "Yes".to_string())]);
    }
}
