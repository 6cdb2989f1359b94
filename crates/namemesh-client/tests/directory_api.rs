//! Integration tests against a mocked directory node.

use namemesh_client::DirectoryClient;
use namemesh_core::{resolve, NameClaim, RecordType, ResourceRecord, RosterEntry, Source};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn success() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"result": "success"}))
}

fn rejection(reason: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"result": "error", "reason": reason}))
}

#[tokio::test]
async fn get_source_decodes_names_and_zones() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/privdns/source/local"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "My source",
            "description": "the local identity",
            "names": {
                "example.nm": {"pk": "K1", "weight": 1.0},
                "endorsed.nm": {"pk": "K2", "weight": 0.7}
            },
            "zones": {
                "example.nm": {
                    "name": "example.nm",
                    "pk": "K1",
                    "version": 3,
                    "entries": [["www", "A", "1.2.3.4"], ["mail", "MX", 10, "mx.example.nm"]]
                }
            }
        })))
        .mount(&server)
        .await;

    let client = DirectoryClient::new(server.uri());
    let source = client.sources().get("local").await.unwrap();

    assert_eq!(source.id, "local");
    let zone = source.zone("example.nm").unwrap();
    assert_eq!(zone.version, 3);
    assert_eq!(
        zone.entries[0],
        ResourceRecord::new("www", RecordType::A, "1.2.3.4")
    );
    assert_eq!(zone.entries[1].priority, Some(10));

    let endorsed: Vec<_> = source.endorsements().map(|(n, _)| n).collect();
    assert_eq!(endorsed, vec!["endorsed.nm"]);
    assert!(source.missing_claims().is_empty());
}

/// The end-to-end reconciliation scenario: an edit submits the full
/// recomputed entry list; a second client racing on the same base version
/// gets the directory's rejection as a conflict.
#[tokio::test]
async fn zone_edit_submits_full_list_and_stale_edit_conflicts() {
    let server = MockServer::start().await;

    // First submission (against version 3) is accepted...
    Mock::given(method("POST"))
        .and(path("/api/privdns/source/local/zone"))
        .and(body_partial_json(json!({
            "name": "example.nm",
            "entries": [["www", "A", "5.6.7.8"]],
            "weight": 1.0
        })))
        .respond_with(success())
        .up_to_n_times(1)
        .mount(&server)
        .await;

    // ...the race loser is rejected with the service's reason.
    Mock::given(method("POST"))
        .and(path("/api/privdns/source/local/zone"))
        .respond_with(rejection("zone version 3 is stale, current is 4"))
        .mount(&server)
        .await;

    let source: Source = serde_json::from_value(json!({
        "id": "local",
        "names": {"example.nm": {"pk": "K1", "weight": 1.0}},
        "zones": {
            "example.nm": {
                "name": "example.nm", "pk": "K1", "version": 3,
                "entries": [["www", "A", "1.2.3.4"]]
            }
        }
    }))
    .unwrap();

    let client = DirectoryClient::new(server.uri());
    let old = ResourceRecord::new("www", RecordType::A, "1.2.3.4");
    let new = ResourceRecord::new("www", RecordType::A, "5.6.7.8");

    let submitted = client
        .zones()
        .apply_entry_edit(&source, "example.nm", Some(&old), new.clone())
        .await
        .unwrap();
    assert_eq!(submitted, vec![new.clone()]);

    // Second client still holds the version-3 view of the source.
    let err = client
        .zones()
        .apply_entry_edit(&source, "example.nm", Some(&old), new)
        .await
        .unwrap_err();
    assert!(err.is_conflict());
    assert_eq!(
        err.to_string(),
        "directory rejected submission: zone version 3 is stale, current is 4"
    );
}

#[tokio::test]
async fn entry_removal_submits_filtered_list() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/privdns/source/local/zone"))
        .and(body_partial_json(json!({
            "name": "example.nm",
            "entries": [["ftp", "A", "1.2.3.5"]],
            "weight": 1.0
        })))
        .respond_with(success())
        .mount(&server)
        .await;

    let source: Source = serde_json::from_value(json!({
        "id": "local",
        "names": {"example.nm": {"pk": "K1", "weight": 1.0}},
        "zones": {
            "example.nm": {
                "name": "example.nm", "pk": "K1", "version": 7,
                "entries": [
                    ["www", "A", "1.2.3.4"],
                    ["ftp", "A", "1.2.3.5"],
                    ["www", "A", "1.2.3.4"]
                ]
            }
        }
    }))
    .unwrap();

    let client = DirectoryClient::new(server.uri());
    let target = ResourceRecord::new("www", RecordType::A, "1.2.3.4");
    let remaining = client
        .zones()
        .remove_entries(&source, "example.nm", &target)
        .await
        .unwrap();

    // Duplicates are all gone, not just the first.
    assert_eq!(
        remaining,
        vec![ResourceRecord::new("ftp", RecordType::A, "1.2.3.5")]
    );
}

#[tokio::test]
async fn invalid_roster_entry_never_reaches_the_directory() {
    let server = MockServer::start().await;

    let client = DirectoryClient::new(server.uri());
    let entry = RosterEntry {
        name: "bad peer".into(),
        ip: "fc00::1".into(),
        api_port: 14123,
        weight: 1.0,
    };

    let err = client.rosters().upsert("peers", &entry).await.unwrap_err();
    assert!(err.is_validation());
    assert_eq!(err.field(), Some("weight"));

    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn roster_rejection_maps_to_conflict_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/privdns/list/trust"))
        .respond_with(rejection("list is sealed"))
        .mount(&server)
        .await;

    let client = DirectoryClient::new(server.uri());
    let entry = RosterEntry {
        name: "peer".into(),
        ip: "fc00::1".into(),
        api_port: 14123,
        weight: 0.9,
    };

    let err = client.rosters().upsert("trust", &entry).await.unwrap_err();
    assert!(err.is_conflict());
    assert!(err.to_string().contains("list is sealed"));
}

#[tokio::test]
async fn roster_delete_escapes_ipv6_key() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path_regex(r"^/api/privdns/list/peers/fc00.*$"))
        .respond_with(success())
        .mount(&server)
        .await;

    let client = DirectoryClient::new(server.uri());
    client.rosters().remove("peers", "fc00::1").await.unwrap();
}

#[tokio::test]
async fn roster_get_returns_entries_in_stored_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/privdns/list/peers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Peer list",
            "description": "",
            "entries": [
                {"name": "b", "ip": "fc00::2", "api_port": 14123, "weight": 0.3},
                {"name": "a", "ip": "fc00::1", "api_port": 14123, "weight": 0.8}
            ]
        })))
        .mount(&server)
        .await;

    let client = DirectoryClient::new(server.uri());
    let roster = client.rosters().get("peers").await.unwrap().into_roster();

    let order: Vec<_> = roster.entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(order, vec!["b", "a"]);
    let ranked: Vec<_> = roster
        .order_by_weight()
        .into_iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(ranked, vec!["a", "b"]);
}

#[tokio::test]
async fn check_name_passes_query_and_decodes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/privdns/check"))
        .and(query_param("name", "taken.nm"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "taken.nm", "valid": true, "taken": true
        })))
        .mount(&server)
        .await;

    let client = DirectoryClient::new(server.uri());
    let avail = client.sources().check_name("taken.nm").await.unwrap();
    assert!(avail.valid);
    assert!(avail.taken);
}

#[tokio::test]
async fn browse_listing_orders_by_weight() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/names"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "low.nm": {"pk": "K1", "weight": 0.2, "version": 1},
            "high.nm": {"pk": "K2", "weight": 0.9, "version": 5}
        })))
        .mount(&server)
        .await;

    let client = DirectoryClient::new(server.uri());
    let names = client.node().names().await.unwrap();
    let listing = resolve::order_names(names);

    assert_eq!(listing[0].0, "high.nm");
    assert_eq!(listing[1].0, "low.nm");
}

#[tokio::test]
async fn name_claim_weight_validated_locally() {
    let server = MockServer::start().await;

    let client = DirectoryClient::new(server.uri());
    let err = client
        .sources()
        .add_name("local", "example.nm", "K1", 0.0)
        .await
        .unwrap_err();
    assert!(err.is_validation());

    // Weight 1.0 is allowed for name claims (self-authored zones use it).
    Mock::given(method("POST"))
        .and(path("/api/privdns/source/local/name"))
        .and(body_partial_json(json!({
            "name": "example.nm", "pk": "K1", "weight": 1.0
        })))
        .respond_with(success())
        .mount(&server)
        .await;
    client
        .sources()
        .add_name("local", "example.nm", "K1", 1.0)
        .await
        .unwrap();

    let claim = NameClaim {
        public_key: "K1".into(),
        weight: 1.0,
    };
    assert!(claim.validate().is_ok());
}

#[tokio::test]
async fn unreachable_directory_is_a_transport_error() {
    // Nothing listens on port 1.
    let client = DirectoryClient::new("http://127.0.0.1:1");
    let err = client.node().info().await.unwrap_err();
    assert!(err.is_transport());
    assert!(!err.is_conflict());
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = DirectoryClient::new(server.uri());
    let err = client.node().info().await.unwrap_err();
    assert!(err.is_transport());
    assert!(matches!(err, namemesh_core::NameMeshError::Decode(_)));
}
