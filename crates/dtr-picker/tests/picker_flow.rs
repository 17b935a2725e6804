//! End-to-end picker scenarios against wiremock collaborators: a mocked
//! address search service and a mocked attendance backend.

use dtr_api::{AccessToken, AdminApiClient, ApiError};
use dtr_core::{Branch, Coordinate};
use dtr_geocode::GeocodeClient;
use dtr_picker::{GeofenceForm, SearchResolution};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn geocode_client(base_url: &str) -> GeocodeClient {
    GeocodeClient::with_base_url(30, "dtr-admin-test/0.1", base_url)
        .expect("geocode client construction should not fail")
}

fn api_client(base_url: &str) -> AdminApiClient {
    AdminApiClient::new(base_url, 30, "dtr-admin-test/0.1", 0, 0)
        .expect("api client construction should not fail")
}

fn coord(latitude: f64, longitude: f64) -> Coordinate {
    Coordinate::new(latitude, longitude).expect("valid test coordinate")
}

fn stored_branch() -> Branch {
    serde_json::from_value(serde_json::json!({
        "id": 3,
        "name": "Pasig Branch",
        "address": "Ortigas Center",
        "latitude": 14.5869,
        "longitude": 121.0614,
        "radius_meters": 150
    }))
    .expect("branch fixture")
}

/// Seed default → search "Manila" → candidate and map follow the geocoder →
/// confirm → the draft's latitude/longitude read the searched coordinate →
/// save round-trips through the backend.
#[tokio::test]
async fn search_confirm_save_flow_for_a_new_branch() {
    let geocoder = MockServer::start().await;
    let backend = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Manila"))
        .and(query_param("limit", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([{ "lat": "14.6", "lon": "121.0" }])),
        )
        .mount(&geocoder)
        .await;

    Mock::given(method("POST"))
        .and(path("/branches/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 42,
            "name": "Manila Branch",
            "address": "",
            "latitude": 14.6,
            "longitude": 121.0,
            "radius_meters": 100
        })))
        .mount(&backend)
        .await;

    let mut form = GeofenceForm::open_new();
    form.set_name("Manila Branch");

    let mut picker = form.open_picker();
    assert_eq!(
        picker.candidate(),
        coord(14.5995, 120.9842),
        "a brand-new draft seeds the picker at the fixed default"
    );

    picker.set_search_text("Manila");
    let resolution = picker.search(&geocode_client(&geocoder.uri())).await;
    assert_eq!(resolution, SearchResolution::Applied(coord(14.6, 121.0)));
    assert_eq!(
        picker.surface().center(),
        coord(14.6, 121.0),
        "the map recenters on the search result"
    );

    let confirmed = picker.confirm();
    form.apply_picker(confirmed);
    assert!((form.draft().coordinate.latitude - 14.6).abs() < f64::EPSILON);
    assert!((form.draft().coordinate.longitude - 121.0).abs() < f64::EPSILON);

    let stored = form
        .save(&api_client(&backend.uri()), &AccessToken::new("test-token"))
        .await
        .expect("save should succeed");
    assert_eq!(stored.id, Some(42));
}

/// Open on a stored branch → pan → cancel → the draft keeps its pre-picker
/// coordinate and radius.
#[tokio::test]
async fn pan_then_cancel_leaves_the_stored_values() {
    let form = GeofenceForm::open_edit(stored_branch());
    let before = form.draft().clone();

    let mut picker = form.open_picker();
    assert_eq!(picker.candidate(), before.coordinate);

    picker.note_move(coord(14.7, 121.2));
    picker.note_move(coord(14.75, 121.25));
    picker.cancel();

    assert_eq!(form.draft(), &before);
    assert_eq!(form.draft().radius_meters, 150);
}

/// Two searches race: the first dispatched resolves last and is dropped, so
/// the candidate reflects the second query's coordinate.
#[tokio::test]
async fn slower_superseded_search_cannot_overwrite_the_newer_result() {
    let geocoder = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Cebu"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([{ "lat": "10.3157", "lon": "123.8854" }])),
        )
        .mount(&geocoder)
        .await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Davao"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([{ "lat": "7.1907", "lon": "125.4553" }])),
        )
        .mount(&geocoder)
        .await;

    let client = geocode_client(&geocoder.uri());
    let form = GeofenceForm::open_new();
    let mut picker = form.open_picker();

    // Both dispatched before either resolves; the Davao ticket supersedes.
    let ticket_cebu = picker.begin_search();
    let ticket_davao = picker.begin_search();

    let davao = client.search("Davao").await;
    let resolution = picker.resolve_search(ticket_davao, davao);
    assert_eq!(
        resolution,
        SearchResolution::Applied(coord(7.1907, 125.4553))
    );

    // The slower Cebu response arrives afterwards and is dropped.
    let cebu = client.search("Cebu").await;
    let resolution = picker.resolve_search(ticket_cebu, cebu);
    assert_eq!(resolution, SearchResolution::Stale);

    assert_eq!(picker.candidate(), coord(7.1907, 125.4553));
}

/// A rejected save keeps the draft open and unchanged, with the backend's
/// detail message surfaced verbatim.
#[tokio::test]
async fn rejected_save_keeps_the_draft_for_correction() {
    let backend = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/branches/3"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "detail": "Branch not found"
        })))
        .mount(&backend)
        .await;

    let mut form = GeofenceForm::open_edit(stored_branch());
    let before = form.draft().clone();

    let result = form
        .save(&api_client(&backend.uri()), &AccessToken::new("test-token"))
        .await;

    match result {
        Err(ApiError::Rejected { status, detail }) => {
            assert_eq!(status, 404);
            assert_eq!(detail, "Branch not found");
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
    assert_eq!(form.draft(), &before, "a failed save must not touch the draft");
}

/// A search that matches nothing leaves the candidate exactly where the user
/// panned it.
#[tokio::test]
async fn no_match_search_keeps_the_panned_candidate() {
    let geocoder = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&geocoder)
        .await;

    let form = GeofenceForm::open_new();
    let mut picker = form.open_picker();
    picker.note_move(coord(14.66, 121.03));

    picker.set_search_text("no such place, honestly");
    let resolution = picker.search(&geocode_client(&geocoder.uri())).await;
    assert_eq!(resolution, SearchResolution::NoMatch);
    assert_eq!(picker.candidate(), coord(14.66, 121.03));
}
