//! End-to-end resolution scenarios against a local mock mapping host.
//!
//! Fetch counts are asserted through wiremock expectations, which are
//! verified when each `MockServer` drops.

// Integration tests can use unwrap/expect for cleaner assertions
#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use devicename::{
    CachePolicy, Error, Family, IdentifierProvider, MemoryPreferences, NameService,
};
use futures::StreamExt;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Provider double reporting a fixed identifier and a mock-server URL.
struct StaticProvider {
    identifier: String,
    url: String,
}

impl StaticProvider {
    fn boxed(identifier: &str, server: &MockServer) -> Box<Self> {
        Box::new(Self {
            identifier: identifier.to_owned(),
            url: format!("{}/ios.json", server.uri()),
        })
    }
}

impl IdentifierProvider for StaticProvider {
    fn family(&self) -> Family {
        Family::Ios
    }

    fn mapping_url(&self) -> String {
        self.url.clone()
    }

    fn current_identifier(&self) -> String {
        self.identifier.clone()
    }
}

/// Mock host serving the canonical two-entry table, expecting `expected`
/// fetches over its lifetime.
async fn mock_table_host(expected: u64) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ios.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "iPhone17,4": "iPhone 15 Pro",
            "iPhone16,1": "iPhone 15",
        })))
        .expect(expected)
        .mount(&server)
        .await;
    server
}

fn service(server: &MockServer, identifier: &str, policy: CachePolicy) -> Arc<NameService> {
    NameService::with_parts(
        policy,
        StaticProvider::boxed(identifier, server),
        Arc::new(MemoryPreferences::new()),
    )
}

async fn wait_for_cache(service: &NameService) {
    for _ in 0..100 {
        if service.cached_name_if_any().is_some() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("cache was never warmed");
}

// ==========================================================================
// Resolution and caching scenarios
// ==========================================================================

#[tokio::test]
async fn test_no_cache_policy_fetches_every_call() {
    let server = mock_table_host(2).await;
    let service = service(&server, "iPhone17,4", CachePolicy::NoCache);

    assert_eq!(service.get_name().await.unwrap(), "iPhone 15 Pro");
    assert_eq!(service.get_name().await.unwrap(), "iPhone 15 Pro");
}

#[tokio::test]
async fn test_one_day_policy_serves_second_call_from_cache() {
    let server = mock_table_host(1).await;
    let service = service(&server, "iPhone17,4", CachePolicy::OneDay);

    let first = service.get_name().await.unwrap();
    let second = service.get_name().await.unwrap();
    assert_eq!(first, "iPhone 15 Pro");
    assert_eq!(second, first);
}

#[tokio::test]
async fn test_unknown_identifier_resolves_to_itself() {
    let server = mock_table_host(1).await;
    let service = service(&server, "iPhoneUnknown,1", CachePolicy::NoCache);

    assert_eq!(service.get_name().await.unwrap(), "iPhoneUnknown,1");
}

#[tokio::test]
async fn test_negative_custom_duration_refetches_every_call() {
    let server = mock_table_host(2).await;
    let service = service(&server, "iPhone17,4", CachePolicy::Custom(-1));

    service.get_name().await.unwrap();
    service.get_name().await.unwrap();
}

#[tokio::test]
async fn test_forever_policy_reuses_the_first_resolution() {
    let server = mock_table_host(1).await;
    let service = service(&server, "iPhone17,4", CachePolicy::Forever);

    service.get_name().await.unwrap();
    assert_eq!(service.get_name().await.unwrap(), "iPhone 15 Pro");
}

// ==========================================================================
// Failure surfacing
// ==========================================================================

#[tokio::test]
async fn test_transport_failure_carries_pre_fetch_identifier() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let service = service(&server, "iPhone17,4", CachePolicy::NoCache);

    match service.get_name().await.unwrap_err() {
        Error::Resolution { identifier, source } => {
            assert_eq!(identifier, "iPhone17,4");
            assert!(matches!(*source, Error::Transport { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_non_flat_document_surfaces_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"iPhone17,4": {"name": "nested"}})),
        )
        .mount(&server)
        .await;
    let service = service(&server, "iPhone17,4", CachePolicy::NoCache);

    match service.get_name().await.unwrap_err() {
        Error::Resolution { source, .. } => {
            assert!(matches!(*source, Error::Decode { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_fallback_returns_raw_identifier_on_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let service = service(&server, "iPhone17,4", CachePolicy::NoCache);

    assert_eq!(service.get_name_or_fallback().await, "iPhone17,4");
    assert_eq!(service.cached_name_if_any(), None);
}

#[tokio::test]
async fn test_fallback_matches_strict_path_on_success() {
    let server = mock_table_host(1).await;
    let service = service(&server, "iPhone16,1", CachePolicy::OneDay);

    assert_eq!(service.get_name_or_fallback().await, "iPhone 15");
}

// ==========================================================================
// Pinned open questions
// ==========================================================================

#[tokio::test]
async fn test_cached_name_if_any_ignores_policy_expiry() {
    // Custom(0) expires a written value immediately.
    let server = mock_table_host(2).await;
    let service = service(&server, "iPhone17,4", CachePolicy::Custom(0));

    service.get_name().await.unwrap();
    // The stored value is already stale for get_name()...
    service.get_name().await.unwrap();
    // ...yet the direct accessor still reports it.
    assert_eq!(
        service.cached_name_if_any(),
        Some("iPhone 15 Pro".to_owned())
    );
}

#[tokio::test]
async fn test_no_cache_policy_still_writes_through() {
    let server = mock_table_host(1).await;
    let service = service(&server, "iPhone17,4", CachePolicy::NoCache);

    assert_eq!(service.cached_name_if_any(), None);
    service.get_name().await.unwrap();
    assert_eq!(
        service.cached_name_if_any(),
        Some("iPhone 15 Pro".to_owned())
    );
}

// ==========================================================================
// Preload
// ==========================================================================

#[tokio::test]
async fn test_preload_warms_the_cache_for_later_calls() {
    let server = mock_table_host(1).await;
    let service = service(&server, "iPhone17,4", CachePolicy::SevenDays);

    service.preload();
    wait_for_cache(&service).await;

    // Warm cache: this call must not fetch again.
    assert_eq!(service.get_name().await.unwrap(), "iPhone 15 Pro");
}

#[tokio::test]
async fn test_preload_is_a_no_op_without_caching() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;
    let service = service(&server, "iPhone17,4", CachePolicy::NoCache);

    service.preload();
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(service.cached_name_if_any(), None);
}

#[tokio::test]
async fn test_preload_failure_leaves_cache_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let service = service(&server, "iPhone17,4", CachePolicy::SevenDays);

    service.preload();
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(service.cached_name_if_any(), None);
}

// ==========================================================================
// Calling-convention adapters
// ==========================================================================

#[tokio::test]
async fn test_callback_adapter_delivers_the_same_result() {
    let server = mock_table_host(1).await;
    let service = service(&server, "iPhone17,4", CachePolicy::OneDay);

    let (tx, rx) = tokio::sync::oneshot::channel();
    service.get_name_with(move |result| {
        tx.send(result).ok();
    });

    let name = rx.await.unwrap().unwrap();
    assert_eq!(name, "iPhone 15 Pro");
}

#[tokio::test]
async fn test_stream_adapter_yields_exactly_one_value() {
    let server = mock_table_host(1).await;
    let service = service(&server, "iPhone17,4", CachePolicy::OneDay);

    let mut stream = Box::pin(service.name_stream());
    let first = stream.next().await;
    assert_eq!(first.unwrap().unwrap(), "iPhone 15 Pro");
    assert!(stream.next().await.is_none());
}

#[tokio::test]
async fn test_stream_adapter_surfaces_strict_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let service = service(&server, "iPhone17,4", CachePolicy::NoCache);

    let mut stream = Box::pin(service.name_stream());
    let first = stream.next().await.unwrap();
    assert!(matches!(first, Err(Error::Resolution { .. })));
}
