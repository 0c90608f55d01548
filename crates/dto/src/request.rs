use serde::Deserialize;
use serde::Serialize;
use trails_records::Column;

/// Body of `POST /load`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LoadRequest {
    #[serde(default)]
    pub file_path: Option<String>,
}

impl LoadRequest {
    /// The requested path, if one was given and is not empty.
    pub fn path(&self) -> Option<&str> {
        self.file_path.as_deref().filter(|path| !path.is_empty())
    }
}

/// Query string of `GET /trails`.
///
/// Everything arrives as text: unparsable `page` or `limit` values fall
/// back to their defaults instead of rejecting the request.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TrailsQuery {
    pub restrooms: Option<String>,
    pub fishing: Option<String>,
    pub bike_trail: Option<String>,
    pub horse_trail: Option<String>,
    pub fee: Option<String>,
    pub recycle_bin: Option<String>,
    pub grills: Option<String>,
    pub bike_rack: Option<String>,
    pub dog_tube: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl TrailsQuery {
    /// Non-empty equality filters, in [`Column::filters`] order.
    #[rustfmt::skip]
    pub fn filters(&self) -> Vec<(Column, &str)> {
        [
            (Column::Restrooms,  &self.restrooms),
            (Column::Fishing,    &self.fishing),
            (Column::BikeTrail,  &self.bike_trail),
            (Column::HorseTrail, &self.horse_trail),
            (Column::Fee,        &self.fee),
            (Column::RecycleBin, &self.recycle_bin),
            (Column::Grills,     &self.grills),
            (Column::BikeRack,   &self.bike_rack),
            (Column::DogTube,    &self.dog_tube),
        ]
        .into_iter()
        .filter_map(|(column, value)| value.as_deref().map(|v| (column, v)))
        .filter(|(_, value)| !value.is_empty())
        .collect()
    }
    pub fn page(&self) -> Option<i64> {
        Self::number(&self.page)
    }
    pub fn limit(&self) -> Option<i64> {
        Self::number(&self.limit)
    }
    fn number(text: &Option<String>) -> Option<i64> {
        text.as_deref().and_then(|t| t.trim().parse::<i64>().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_request_path() {
        let req = serde_json::from_str::<LoadRequest>(r#"{"file_path":"a.csv"}"#).unwrap();
        assert_eq!(req.path(), Some("a.csv"));
        let req = serde_json::from_str::<LoadRequest>(r#"{"file_path":""}"#).unwrap();
        assert_eq!(req.path(), None);
        let req = serde_json::from_str::<LoadRequest>(r#"{}"#).unwrap();
        assert_eq!(req.path(), None);
    }

    #[test]
    fn filters_skip_missing_and_empty() {
        let query = TrailsQuery {
            restrooms: Some("Yes".into()),
            fishing: Some("".into()),
            dog_tube: Some("no".into()),
            ..TrailsQuery::default()
        };
        assert_eq!(
            query.filters(),
            vec![(Column::Restrooms, "Yes"), (Column::DogTube, "no")]
        );
    }

    #[test]
    fn filter_order_matches_columns() {
        let v = || Some("x".to_string());
        let query = TrailsQuery {
            restrooms: v(),
            fishing: v(),
            bike_trail: v(),
            horse_trail: v(),
            fee: v(),
            recycle_bin: v(),
            grills: v(),
            bike_rack: v(),
            dog_tube: v(),
            ..TrailsQuery::default()
        };
        let columns = query.filters().into_iter().map(|(c, _)| c).collect::<Vec<_>>();
        assert_eq!(columns, Column::filters().to_vec());
    }

    #[test]
    fn lenient_numbers() {
        let query = TrailsQuery {
            page: Some("2".into()),
            limit: Some("ten".into()),
            ..TrailsQuery::default()
        };
        assert_eq!(query.page(), Some(2));
        assert_eq!(query.limit(), None);
        assert_eq!(TrailsQuery::default().page(), None);
    }
}
