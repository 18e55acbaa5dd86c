use std::collections::BTreeMap;

use crate::models::{Frequency, RoutePath};

/// Largest page the remote will serve per request.
pub const DEFAULT_PAGE_LENGTH: u64 = 5000;

/// Sort direction for a result column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// One `sort[i][column]` / `sort[i][direction]` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct SortSpec {
    pub column: String,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    /// Ascending by period, the remote's natural ordering for time series.
    fn default() -> Self {
        SortSpec {
            column: "period".to_string(),
            direction: SortDirection::Asc,
        }
    }
}

/// A fully validated query against a single data route.
///
/// Constructed fresh per call and treated as immutable once emitted by the
/// validator; the fetcher only ever reads it. The API key is deliberately
/// not part of this type, so requests can be logged and compared in tests
/// without leaking credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryRequest {
    pub route: RoutePath,
    /// `data[]` columns to retrieve, e.g. `revenue`, `sales`, `value`.
    pub data_columns: Vec<String>,
    /// Facet id to selected values. Ordered by facet id so the wire query
    /// is deterministic for a given request.
    pub facets: BTreeMap<String, Vec<String>>,
    pub frequency: Option<Frequency>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub sort: Vec<SortSpec>,
    /// Row offset of the first page.
    pub offset: u64,
    /// Page size; clamped to the remote maximum by the fetcher.
    pub length: u64,
    /// Caller-requested cap on total rows. `None` means fetch everything
    /// up to the configured hard cap.
    pub max_rows: Option<u64>,
}

impl QueryRequest {
    pub fn new(route: RoutePath) -> Self {
        QueryRequest {
            route,
            data_columns: Vec::new(),
            facets: BTreeMap::new(),
            frequency: None,
            start: None,
            end: None,
            sort: vec![SortSpec::default()],
            offset: 0,
            length: DEFAULT_PAGE_LENGTH,
            max_rows: None,
        }
    }

    /// Serialize this request into wire query parameters using the
    /// request's own pagination window.
    pub fn to_query_pairs(&self, api_key: &str) -> Vec<(String, String)> {
        self.to_query_pairs_at(api_key, self.offset, self.length)
    }

    /// Serialize this request into wire query parameters with an explicit
    /// pagination window. Pure and deterministic: the same request always
    /// yields the same pairs in the same order.
    ///
    /// Multi-valued facets become repeated `facets[<id>][]` entries, one
    /// per selected value, matching the v2 wire format.
    pub fn to_query_pairs_at(&self, api_key: &str, offset: u64, length: u64) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = Vec::new();
        pairs.push(("api_key".to_string(), api_key.to_string()));

        if let Some(frequency) = self.frequency {
            pairs.push(("frequency".to_string(), frequency.as_str().to_string()));
        }

        for column in &self.data_columns {
            pairs.push(("data[]".to_string(), column.clone()));
        }

        for (facet_id, values) in &self.facets {
            for value in values {
                pairs.push((format!("facets[{}][]", facet_id), value.clone()));
            }
        }

        if let Some(start) = &self.start {
            pairs.push(("start".to_string(), start.clone()));
        }
        if let Some(end) = &self.end {
            pairs.push(("end".to_string(), end.clone()));
        }

        for (i, sort) in self.sort.iter().enumerate() {
            pairs.push((format!("sort[{}][column]", i), sort.column.clone()));
            pairs.push((
                format!("sort[{}][direction]", i),
                sort.direction.as_str().to_string(),
            ));
        }

        pairs.push(("offset".to_string(), offset.to_string()));
        pairs.push(("length".to_string(), length.to_string()));
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair_values<'a>(pairs: &'a [(String, String)], key: &str) -> Vec<&'a str> {
        pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    #[test]
    fn defaults_sort_by_period_ascending() {
        let request = QueryRequest::new(RoutePath::from("electricity/retail-sales"));
        let pairs = request.to_query_pairs("k");
        assert_eq!(pair_values(&pairs, "sort[0][column]"), vec!["period"]);
        assert_eq!(pair_values(&pairs, "sort[0][direction]"), vec!["asc"]);
        assert_eq!(pair_values(&pairs, "offset"), vec!["0"]);
        assert_eq!(pair_values(&pairs, "length"), vec!["5000"]);
    }

    #[test]
    fn facets_round_trip_exactly() {
        let mut request = QueryRequest::new(RoutePath::from("electricity/retail-sales"));
        request
            .facets
            .insert("stateid".to_string(), vec!["CA".to_string(), "TX".to_string()]);
        request
            .facets
            .insert("sectorid".to_string(), vec!["RES".to_string()]);

        let pairs = request.to_query_pairs("k");
        assert_eq!(pair_values(&pairs, "facets[stateid][]"), vec!["CA", "TX"]);
        assert_eq!(pair_values(&pairs, "facets[sectorid][]"), vec!["RES"]);
        // No facet pairs beyond the ones supplied.
        let facet_pairs = pairs.iter().filter(|(k, _)| k.starts_with("facets[")).count();
        assert_eq!(facet_pairs, 3);
    }

    #[test]
    fn serialization_is_deterministic() {
        let mut a = QueryRequest::new(RoutePath::from("natural-gas/stor/wkly"));
        a.facets
            .insert("duoarea".to_string(), vec!["R30".to_string()]);
        a.frequency = Some(Frequency::Weekly);
        let b = a.clone();
        assert_eq!(a.to_query_pairs("k"), b.to_query_pairs("k"));
    }

    #[test]
    fn api_key_comes_from_the_caller_not_the_request() {
        let request = QueryRequest::new(RoutePath::from("electricity/retail-sales"));
        let debug = format!("{:?}", request);
        assert!(!debug.contains("api_key"));
        let pairs = request.to_query_pairs("secret");
        assert_eq!(pair_values(&pairs, "api_key"), vec!["secret"]);
    }

    #[test]
    fn explicit_window_overrides_request_window() {
        let request = QueryRequest::new(RoutePath::from("natural-gas/stor/wkly"));
        let pairs = request.to_query_pairs_at("k", 10000, 5000);
        assert_eq!(pair_values(&pairs, "offset"), vec!["10000"]);
        assert_eq!(pair_values(&pairs, "length"), vec!["5000"]);
    }
}
