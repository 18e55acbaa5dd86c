use std::collections::BTreeMap;

use eia_api::{DEFAULT_PAGE_LENGTH, Frequency, QueryRequest};

use crate::catalog::{FacetValues, RouteDescriptor};
use crate::error::{EiaError, Result};

/// Raw arguments for a data query, as supplied by a tool call or the CLI,
/// before any checking against the route's descriptor.
#[derive(Debug, Clone, Default)]
pub struct QueryArgs {
    /// Facet id to requested values.
    pub facets: BTreeMap<String, Vec<String>>,
    /// Frequency id, e.g. "monthly". Defaults to the route's declared
    /// default when omitted.
    pub frequency: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    /// `data[]` columns to retrieve.
    pub data_columns: Vec<String>,
    /// Maximum rows the caller wants back.
    pub limit: Option<u64>,
}

impl QueryArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_facet<I: Into<String>, V: Into<String>>(mut self, id: I, value: V) -> Self {
        self.facets.entry(id.into()).or_default().push(value.into());
        self
    }

    pub fn with_frequency<S: Into<String>>(mut self, frequency: S) -> Self {
        self.frequency = Some(frequency.into());
        self
    }

    pub fn with_period(mut self, start: Option<String>, end: Option<String>) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    pub fn with_data_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.data_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Check raw arguments against a route descriptor and produce an
/// immutable [`QueryRequest`].
///
/// Every rejection happens here, before any network call: missing
/// required facets, facet ids the route does not know, values outside a
/// closed set, unsupported frequencies, and period strings that do not
/// match the active frequency's granularity. Nothing is silently coerced
/// or ignored; a typo fails loudly instead of returning an empty result
/// set.
pub fn validate(descriptor: &RouteDescriptor, args: QueryArgs) -> Result<QueryRequest> {
    for facet in &descriptor.facets {
        if facet.required && !args.facets.contains_key(&facet.id) {
            return Err(EiaError::invalid_parameter(
                facet.id.clone(),
                format!("facet `{}` is required for {}", facet.id, descriptor.path),
            ));
        }
    }

    for (id, values) in &args.facets {
        let facet = descriptor.facet(id).ok_or_else(|| {
            EiaError::invalid_parameter(
                id.clone(),
                format!(
                    "unknown facet for route {}; known facets: {}",
                    descriptor.path,
                    known_facets(descriptor)
                ),
            )
        })?;

        for value in values {
            if !facet.values.allows(value) {
                let allowed = match &facet.values {
                    FacetValues::Closed(allowed) => allowed.join(", "),
                    FacetValues::Open => unreachable!("open facets allow every value"),
                };
                return Err(EiaError::invalid_parameter(
                    id.clone(),
                    format!("value `{}` is not one of: {}", value, allowed),
                ));
            }
        }
    }

    let frequency = match &args.frequency {
        Some(raw) => {
            let frequency: Frequency = raw
                .parse()
                .map_err(|err: String| EiaError::invalid_parameter("frequency", err))?;
            if !descriptor.supports_frequency(frequency) {
                return Err(EiaError::invalid_parameter(
                    "frequency",
                    format!(
                        "route {} supports: {}",
                        descriptor.path,
                        descriptor
                            .frequencies
                            .iter()
                            .map(|f| f.as_str())
                            .collect::<Vec<_>>()
                            .join(", ")
                    ),
                ));
            }
            Some(frequency)
        }
        None => descriptor.default_frequency,
    };

    if let Some(frequency) = frequency {
        check_period(frequency, "start", args.start.as_deref())?;
        check_period(frequency, "end", args.end.as_deref())?;
    }

    let mut request = QueryRequest::new(descriptor.path.clone());
    request.data_columns = args.data_columns;
    request.facets = args.facets;
    request.frequency = frequency;
    request.start = args.start;
    request.end = args.end;
    request.length = args.limit.unwrap_or(DEFAULT_PAGE_LENGTH).clamp(1, DEFAULT_PAGE_LENGTH);
    request.max_rows = args.limit;
    Ok(request)
}

fn check_period(frequency: Frequency, field: &str, period: Option<&str>) -> Result<()> {
    if let Some(period) = period {
        if !frequency.period_matches(period) {
            return Err(EiaError::invalid_parameter(
                field,
                format!(
                    "`{}` does not match {} granularity; expected a period like {}",
                    period,
                    frequency,
                    frequency.period_example()
                ),
            ));
        }
    }
    Ok(())
}

fn known_facets(descriptor: &RouteDescriptor) -> String {
    descriptor
        .facets
        .iter()
        .map(|facet| facet.id.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RouteCatalog;
    use eia_api::RoutePath;

    fn retail_sales() -> RouteDescriptor {
        RouteCatalog::bundled()
            .resolve(&RoutePath::from("electricity/retail-sales"))
            .unwrap()
    }

    fn field_of(err: EiaError) -> String {
        match err {
            EiaError::InvalidParameter { field, .. } => field,
            other => panic!("expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn accepts_valid_arguments() {
        let args = QueryArgs::new()
            .with_facet("stateid", "CA")
            .with_frequency("monthly")
            .with_period(Some("2024-01".to_string()), None)
            .with_data_columns(["sales", "price"])
            .with_limit(100);

        let request = validate(&retail_sales(), args).unwrap();
        assert_eq!(request.route, RoutePath::from("electricity/retail-sales"));
        assert_eq!(request.facets["stateid"], vec!["CA"]);
        assert_eq!(request.frequency, Some(Frequency::Monthly));
        assert_eq!(request.start.as_deref(), Some("2024-01"));
        assert_eq!(request.length, 100);
        assert_eq!(request.max_rows, Some(100));
    }

    #[test]
    fn unknown_facet_is_rejected_not_ignored() {
        let args = QueryArgs::new().with_facet("staet", "CA");
        let err = validate(&retail_sales(), args).unwrap_err();
        assert_eq!(field_of(err), "staet");
    }

    #[test]
    fn closed_set_violation_names_the_facet() {
        let args = QueryArgs::new().with_facet("sectorid", "RESIDENTIAL");
        let err = validate(&retail_sales(), args).unwrap_err();
        match err {
            EiaError::InvalidParameter { field, reason } => {
                assert_eq!(field, "sectorid");
                assert!(reason.contains("RES"));
            }
            other => panic!("expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn frequency_defaults_to_route_default() {
        let request = validate(&retail_sales(), QueryArgs::new()).unwrap();
        assert_eq!(request.frequency, Some(Frequency::Monthly));
    }

    #[test]
    fn unsupported_frequency_is_rejected() {
        let args = QueryArgs::new().with_frequency("hourly");
        let err = validate(&retail_sales(), args).unwrap_err();
        assert_eq!(field_of(err), "frequency");
    }

    #[test]
    fn garbled_frequency_is_rejected() {
        let args = QueryArgs::new().with_frequency("fortnightly");
        let err = validate(&retail_sales(), args).unwrap_err();
        assert_eq!(field_of(err), "frequency");
    }

    #[test]
    fn period_granularity_must_match_frequency() {
        // A daily date under the annual frequency is a mismatch, not
        // something to coerce.
        let args = QueryArgs::new()
            .with_frequency("annual")
            .with_period(Some("2024-01-15".to_string()), None);
        let err = validate(&retail_sales(), args).unwrap_err();
        assert_eq!(field_of(err), "start");

        let args = QueryArgs::new()
            .with_frequency("annual")
            .with_period(None, Some("2024-03".to_string()));
        let err = validate(&retail_sales(), args).unwrap_err();
        assert_eq!(field_of(err), "end");

        let args = QueryArgs::new()
            .with_frequency("annual")
            .with_period(Some("2023".to_string()), Some("2024".to_string()));
        assert!(validate(&retail_sales(), args).is_ok());
    }

    #[test]
    fn default_frequency_still_validates_periods() {
        // No explicit frequency: the monthly default applies to periods.
        let args = QueryArgs::new().with_period(Some("2024-01-15".to_string()), None);
        let err = validate(&retail_sales(), args).unwrap_err();
        assert_eq!(field_of(err), "start");
    }

    #[test]
    fn limit_is_clamped_to_the_page_maximum() {
        let args = QueryArgs::new().with_limit(999_999);
        let request = validate(&retail_sales(), args).unwrap();
        assert_eq!(request.length, DEFAULT_PAGE_LENGTH);
        assert_eq!(request.max_rows, Some(999_999));
    }

    #[test]
    fn validated_facets_round_trip_to_wire_pairs() {
        let args = QueryArgs::new()
            .with_facet("stateid", "CA")
            .with_facet("stateid", "TX")
            .with_facet("sectorid", "RES");
        let request = validate(&retail_sales(), args).unwrap();
        let pairs = request.to_query_pairs("k");

        let facet_pairs: Vec<&(String, String)> = pairs
            .iter()
            .filter(|(k, _)| k.starts_with("facets["))
            .collect();
        assert_eq!(facet_pairs.len(), 3);
        assert!(facet_pairs.contains(&&("facets[stateid][]".to_string(), "CA".to_string())));
        assert!(facet_pairs.contains(&&("facets[stateid][]".to_string(), "TX".to_string())));
        assert!(facet_pairs.contains(&&("facets[sectorid][]".to_string(), "RES".to_string())));
    }
}
