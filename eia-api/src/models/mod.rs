use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A single row returned by a data route.
///
/// Columns are kept exactly as the remote reports them, including unit
/// columns like `sales-units`, so values from different routes remain
/// distinguishable downstream. Scalar types are the remote's native JSON
/// types, unmodified.
pub type Record = BTreeMap<String, serde_json::Value>;

/// An ordered sequence of path segments addressing a dataset route in the
/// EIA hierarchy, e.g. `electricity/retail-sales`.
///
/// Paths are immutable once constructed. The empty path addresses the API
/// root, which lists the top-level domains.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct RoutePath(Vec<String>);

impl RoutePath {
    /// The API root (no segments).
    pub fn root() -> Self {
        RoutePath(Vec::new())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Extend this path with one more segment.
    pub fn join(&self, segment: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment.to_string());
        RoutePath(segments)
    }

    pub fn parent(&self) -> Option<Self> {
        if self.0.is_empty() {
            None
        } else {
            Some(RoutePath(self.0[..self.0.len() - 1].to_vec()))
        }
    }

    /// True when `self` equals `prefix` or lies underneath it.
    pub fn starts_with(&self, prefix: &RoutePath) -> bool {
        self.0.len() >= prefix.0.len() && self.0[..prefix.0.len()] == prefix.0[..]
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("/"))
    }
}

impl fmt::Debug for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoutePath({})", self)
    }
}

impl FromStr for RoutePath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Empty segments (leading/trailing/double slashes) are dropped, so
        // "electricity/" and "electricity" address the same route.
        Ok(RoutePath(
            s.split('/')
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect(),
        ))
    }
}

impl From<&str> for RoutePath {
    fn from(s: &str) -> Self {
        s.parse().expect("RoutePath parsing is infallible")
    }
}

impl From<String> for RoutePath {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

impl From<RoutePath> for String {
    fn from(path: RoutePath) -> Self {
        path.to_string()
    }
}

/// Time granularity of a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    Hourly,
    LocalHourly,
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Annual,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Hourly => "hourly",
            Frequency::LocalHourly => "local-hourly",
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Quarterly => "quarterly",
            Frequency::Annual => "annual",
        }
    }

    /// Check a start/end period string against the granularity this
    /// frequency expects. Mismatches are rejected upstream rather than
    /// silently coerced.
    pub fn period_matches(&self, period: &str) -> bool {
        match self {
            Frequency::Annual => is_year(period),
            Frequency::Quarterly => is_quarter(period),
            Frequency::Monthly => is_year_month(period),
            Frequency::Weekly | Frequency::Daily => is_date(period),
            Frequency::Hourly | Frequency::LocalHourly => is_date_hour(period),
        }
    }

    /// A representative period string, used in validation error messages.
    pub fn period_example(&self) -> &'static str {
        match self {
            Frequency::Annual => "2024",
            Frequency::Quarterly => "2024-Q1",
            Frequency::Monthly => "2024-01",
            Frequency::Weekly | Frequency::Daily => "2024-01-15",
            Frequency::Hourly | Frequency::LocalHourly => "2024-01-15T06",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hourly" => Ok(Frequency::Hourly),
            "local-hourly" => Ok(Frequency::LocalHourly),
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            "monthly" => Ok(Frequency::Monthly),
            "quarterly" => Ok(Frequency::Quarterly),
            "annual" => Ok(Frequency::Annual),
            other => Err(format!("unknown frequency: {}", other)),
        }
    }
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_year(s: &str) -> bool {
    s.len() == 4 && all_digits(s)
}

fn is_quarter(s: &str) -> bool {
    // YYYY-Qn
    let bytes = s.as_bytes();
    s.len() == 7
        && s.is_ascii()
        && is_year(&s[..4])
        && bytes[4] == b'-'
        && bytes[5] == b'Q'
        && (b'1'..=b'4').contains(&bytes[6])
}

fn is_year_month(s: &str) -> bool {
    // YYYY-MM
    s.len() == 7
        && s.is_ascii()
        && is_year(&s[..4])
        && s.as_bytes()[4] == b'-'
        && matches!(s[5..7].parse::<u8>(), Ok(1..=12))
}

fn is_date(s: &str) -> bool {
    // YYYY-MM-DD
    s.len() == 10
        && s.is_ascii()
        && is_year_month(&s[..7])
        && s.as_bytes()[7] == b'-'
        && matches!(s[8..10].parse::<u8>(), Ok(1..=31))
}

fn is_date_hour(s: &str) -> bool {
    // YYYY-MM-DDTHH
    s.len() == 13
        && s.is_ascii()
        && is_date(&s[..10])
        && s.as_bytes()[10] == b'T'
        && matches!(s[11..13].parse::<u8>(), Ok(0..=23))
}

/// The assembled result of a (possibly multi-page) data fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    /// Rows in the order the remote returned them.
    pub records: Vec<Record>,
    /// Total row count reported by the remote for the query.
    pub total: u64,
    /// True iff `records.len()` equals `total`. False when the fetch was
    /// cut short by the row cap.
    pub complete: bool,
}

/// Metadata describing a route: its child routes, facets, and supported
/// frequencies. Returned by metadata-only calls to the bare route path.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteMetadata {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub routes: Vec<RouteListing>,
    #[serde(default)]
    pub frequency: Vec<FrequencyListing>,
    #[serde(default)]
    pub facets: Vec<FacetListing>,
    #[serde(default, rename = "defaultFrequency")]
    pub default_frequency: Option<String>,
}

/// One child route in a metadata listing.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteListing {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// One supported frequency in a metadata listing.
#[derive(Debug, Clone, Deserialize)]
pub struct FrequencyListing {
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
}

/// One filterable facet in a metadata listing.
#[derive(Debug, Clone, Deserialize)]
pub struct FacetListing {
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Top-level envelope of a successful data response.
#[derive(Debug, Deserialize)]
pub(crate) struct DataEnvelope {
    pub(crate) response: DataPage,
}

/// One page of rows plus the remote-reported total.
#[derive(Debug, Deserialize)]
pub(crate) struct DataPage {
    #[serde(default, deserialize_with = "flexible_total")]
    pub(crate) total: Option<u64>,
    #[serde(default)]
    pub(crate) data: Vec<Record>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MetadataEnvelope {
    pub(crate) response: RouteMetadata,
}

/// Error body the remote returns alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub(crate) error: Option<String>,
}

/// The API reports `total` as a JSON number on some routes and a decimal
/// string on others. Accept both.
fn flexible_total<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Number(n)) => n
            .as_u64()
            .map(Some)
            .ok_or_else(|| de::Error::custom("total is not a non-negative integer")),
        Some(serde_json::Value::String(s)) => s
            .parse::<u64>()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("total is not numeric: {}", s))),
        Some(other) => Err(de::Error::custom(format!(
            "unexpected type for total: {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_path_parses_and_displays() {
        let path: RoutePath = "electricity/retail-sales".parse().unwrap();
        assert_eq!(path.segments(), &["electricity", "retail-sales"]);
        assert_eq!(path.to_string(), "electricity/retail-sales");
    }

    #[test]
    fn route_path_ignores_empty_segments() {
        let path = RoutePath::from("/electricity//rto/");
        assert_eq!(path, RoutePath::from("electricity/rto"));
        assert!(RoutePath::from("").is_root());
    }

    #[test]
    fn route_path_prefix_and_parent() {
        let leaf = RoutePath::from("natural-gas/stor/wkly");
        let parent = leaf.parent().unwrap();
        assert_eq!(parent, RoutePath::from("natural-gas/stor"));
        assert!(leaf.starts_with(&parent));
        assert!(leaf.starts_with(&RoutePath::root()));
        assert!(!parent.starts_with(&leaf));
    }

    #[test]
    fn frequency_period_formats() {
        assert!(Frequency::Annual.period_matches("2024"));
        assert!(!Frequency::Annual.period_matches("2024-01-15"));
        assert!(Frequency::Quarterly.period_matches("2024-Q3"));
        assert!(!Frequency::Quarterly.period_matches("2024-Q5"));
        assert!(Frequency::Monthly.period_matches("2024-01"));
        assert!(!Frequency::Monthly.period_matches("2024-13"));
        assert!(Frequency::Daily.period_matches("2024-01-15"));
        assert!(!Frequency::Daily.period_matches("2024-01"));
        assert!(Frequency::Hourly.period_matches("2024-01-15T06"));
        assert!(!Frequency::Hourly.period_matches("2024-01-15T25"));
    }

    #[test]
    fn total_accepts_number_and_string() {
        let page: DataPage = serde_json::from_str(r#"{"total": 42, "data": []}"#).unwrap();
        assert_eq!(page.total, Some(42));
        let page: DataPage = serde_json::from_str(r#"{"total": "42", "data": []}"#).unwrap();
        assert_eq!(page.total, Some(42));
        let page: DataPage = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert_eq!(page.total, None);
    }

    #[test]
    fn metadata_envelope_parses_route_listing() {
        let raw = r#"{
            "response": {
                "id": "electricity",
                "name": "Electricity",
                "routes": [
                    {"id": "retail-sales", "name": "Electricity Sales to Ultimate Customers"},
                    {"id": "rto", "name": "Electric Power Operations"}
                ]
            },
            "apiVersion": "2.1.8"
        }"#;
        let envelope: MetadataEnvelope = serde_json::from_str(raw).unwrap();
        assert_eq!(envelope.response.id.as_deref(), Some("electricity"));
        assert_eq!(envelope.response.routes.len(), 2);
        assert_eq!(envelope.response.routes[0].id, "retail-sales");
    }
}
