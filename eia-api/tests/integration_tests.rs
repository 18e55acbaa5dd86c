//! Integration tests for the EIA API client against a mocked remote.
//!
//! These exercise the pagination, retry, and normalization behavior end to
//! end without depending on the live api.eia.gov service.

use std::sync::Arc;
use std::time::Duration;

use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use eia_api::{
    ApiErrorKind, Configuration, EiaApiClient, EiaApiError, Frequency, QueryRequest, RoutePath,
};

fn test_client(server: &MockServer) -> EiaApiClient {
    let config = Configuration {
        base_path: server.uri(),
        api_key: "test-key".to_string(),
        // Keep backoff short so retry tests run quickly.
        retry_base_delay: Duration::from_millis(1),
        ..Configuration::new("test-key")
    };
    EiaApiClient::new(Arc::new(config))
}

fn rows(count: usize, start: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            json!({
                "period": "2024-01",
                "stateid": "CA",
                "sales": (start + i) as u64,
                "sales-units": "million kilowatthours"
            })
        })
        .collect()
}

fn envelope(total: u64, data: Vec<Value>) -> Value {
    json!({
        "response": { "total": total.to_string(), "data": data },
        "apiVersion": "2.1.8"
    })
}

#[tokio::test]
async fn single_page_fetch_is_complete() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/electricity/retail-sales/data/"))
        .and(query_param("api_key", "test-key"))
        .and(query_param("frequency", "monthly"))
        .and(query_param("facets[stateid][]", "CA"))
        .and(query_param("start", "2024-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(3, rows(3, 0))))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let mut request = QueryRequest::new(RoutePath::from("electricity/retail-sales"));
    request.frequency = Some(Frequency::Monthly);
    request.start = Some("2024-01".to_string());
    request
        .facets
        .insert("stateid".to_string(), vec!["CA".to_string()]);

    let result = client.fetch_all(&request).await.unwrap();
    assert_eq!(result.total, 3);
    assert_eq!(result.records.len(), 3);
    assert!(result.complete);
    // Unit metadata from the payload is preserved verbatim in each record.
    assert_eq!(
        result.records[0].get("sales-units"),
        Some(&json!("million kilowatthours"))
    );
}

#[tokio::test]
async fn large_result_paginates_by_offset() {
    let server = MockServer::start().await;

    // total=12000 with a 5000-row page limit: three pages at offsets
    // 0, 5000, and 10000.
    for (offset, count) in [(0u64, 5000usize), (5000, 5000), (10000, 2000)] {
        Mock::given(method("GET"))
            .and(path("/natural-gas/stor/wkly/data/"))
            .and(query_param("offset", offset.to_string()))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(envelope(12000, rows(count, offset as usize))),
            )
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = test_client(&server);
    let mut request = QueryRequest::new(RoutePath::from("natural-gas/stor/wkly"));
    request.frequency = Some(Frequency::Weekly);

    let result = client.fetch_all(&request).await.unwrap();
    assert_eq!(result.total, 12000);
    assert_eq!(result.records.len(), 12000);
    assert!(result.complete);
}

#[tokio::test]
async fn row_cap_yields_partial_result_not_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/natural-gas/stor/wkly/data/"))
        .and(query_param("offset", "0"))
        .and(query_param("length", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(20, rows(5, 0))))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/natural-gas/stor/wkly/data/"))
        .and(query_param("offset", "5"))
        .and(query_param("length", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(20, rows(2, 5))))
        .expect(1)
        .mount(&server)
        .await;

    let config = Configuration {
        base_path: server.uri(),
        max_total_rows: 7,
        retry_base_delay: Duration::from_millis(1),
        ..Configuration::new("test-key")
    };
    let client = EiaApiClient::new(Arc::new(config));

    let mut request = QueryRequest::new(RoutePath::from("natural-gas/stor/wkly"));
    request.length = 5;

    let result = client.fetch_all(&request).await.unwrap();
    assert_eq!(result.total, 20);
    assert_eq!(result.records.len(), 7);
    assert!(!result.complete);
}

#[tokio::test]
async fn caller_row_limit_stops_the_fetch() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/electricity/retail-sales/data/"))
        .and(query_param("offset", "0"))
        .and(query_param("length", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(500, rows(100, 0))))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let mut request = QueryRequest::new(RoutePath::from("electricity/retail-sales"));
    request.length = 100;
    request.max_rows = Some(100);

    let result = client.fetch_all(&request).await.unwrap();
    assert_eq!(result.records.len(), 100);
    assert_eq!(result.total, 500);
    assert!(!result.complete);
}

#[tokio::test]
async fn persistent_rate_limiting_exhausts_retries() {
    let server = MockServer::start().await;

    // Every attempt is throttled; the configured 3 attempts should all be
    // spent before the error surfaces, with no partial data.
    Mock::given(method("GET"))
        .and(path("/electricity/rto/region-data/data/"))
        .respond_with(
            ResponseTemplate::new(429)
                .set_body_json(json!({"error": "rate limit exceeded", "code": 429})),
        )
        .expect(3)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let request = QueryRequest::new(RoutePath::from("electricity/rto/region-data"));

    let err = client.fetch_all(&request).await.unwrap_err();
    match err {
        EiaApiError::Api {
            kind,
            status,
            ref message,
        } => {
            assert_eq!(kind, ApiErrorKind::RateLimited);
            assert_eq!(status, 429);
            assert!(message.contains("rate limit"));
        }
        other => panic!("expected rate limit error, got {:?}", other),
    }
    assert!(err.retryable());
}

#[tokio::test]
async fn transient_server_error_is_retried_then_succeeds() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/electricity/retail-sales/data/"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/electricity/retail-sales/data/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(2, rows(2, 0))))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let request = QueryRequest::new(RoutePath::from("electricity/retail-sales"));

    let result = client.fetch_all(&request).await.unwrap();
    assert_eq!(result.records.len(), 2);
    assert!(result.complete);
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/electricity/retail-sales/data/"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"error": "Invalid facet 'bogus'", "code": 400})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let request = QueryRequest::new(RoutePath::from("electricity/retail-sales"));

    let err = client.fetch_all(&request).await.unwrap_err();
    assert_eq!(err.kind(), ApiErrorKind::ClientError);
    assert!(!err.retryable());
    assert!(format!("{}", err).contains("Invalid facet"));
}

#[tokio::test]
async fn mid_fetch_failure_discards_accumulated_pages() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/natural-gas/stor/wkly/data/"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(10000, rows(5000, 0))))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/natural-gas/stor/wkly/data/"))
        .and(query_param("offset", "5000"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_json(json!({"error": "API key disabled", "code": 403})),
        )
        .mount(&server)
        .await;

    let client = test_client(&server);
    let request = QueryRequest::new(RoutePath::from("natural-gas/stor/wkly"));

    // The first page succeeded but the fetch as a whole must fail; no
    // partial success is silently returned as if complete.
    let err = client.fetch_all(&request).await.unwrap_err();
    assert_eq!(err.status(), Some(403));
}

#[tokio::test]
async fn route_metadata_hits_the_bare_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/electricity/"))
        .and(query_param("api_key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": {
                "id": "electricity",
                "name": "Electricity",
                "description": "EIA electricity survey data",
                "routes": [
                    {"id": "retail-sales", "name": "Electricity Sales to Ultimate Customers"},
                    {"id": "rto", "name": "Electric Power Operations (Daily and Hourly)"},
                    {"id": "state-electricity-profiles", "name": "State Specific Data"}
                ]
            },
            "apiVersion": "2.1.8"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let metadata = client
        .route_metadata(&RoutePath::from("electricity"))
        .await
        .unwrap();

    assert_eq!(metadata.id.as_deref(), Some("electricity"));
    assert_eq!(metadata.routes.len(), 3);
    assert_eq!(metadata.routes[0].id, "retail-sales");
}
