//! Integration tests for `PlacesClient` using wiremock HTTP mocks.

use placefill_places::{PlacesClient, PlacesError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> PlacesClient {
    PlacesClient::with_base_url("test-key", 30, "placefill-test", base_url)
        .expect("client construction should not fail")
}

#[tokio::test]
async fn text_search_returns_ranked_candidates() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OK",
        "results": [
            {
                "place_id": "ChIJfirst",
                "name": "Devoción",
                "formatted_address": "69 Grand St, Brooklyn, NY 11249, USA"
            },
            { "place_id": "ChIJsecond", "name": "Devoción Downtown" }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .and(query_param("query", "Devoción Brooklyn"))
        .and(query_param("language", "en"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let results = client
        .text_search("Devoción Brooklyn", "en")
        .await
        .expect("should parse search results");

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].place_id, "ChIJfirst");
    assert_eq!(results[0].name.as_deref(), Some("Devoción"));
    assert!(results[1].formatted_address.is_none());
}

#[tokio::test]
async fn text_search_zero_results_is_empty_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "status": "ZERO_RESULTS", "results": [] })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let results = client
        .text_search("Nowhere Diner ", "en")
        .await
        .expect("ZERO_RESULTS should not be an error");
    assert!(results.is_empty());
}

#[tokio::test]
async fn text_search_request_denied_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid.",
            "results": []
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.text_search("Cafe", "en").await.unwrap_err();
    match err {
        PlacesError::ApiError { status, message } => {
            assert_eq!(status, "REQUEST_DENIED");
            assert_eq!(message, "The provided API key is invalid.");
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn text_search_candidate_without_place_id_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "OK",
            "results": [{ "name": "No Id Bistro" }]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.text_search("No Id Bistro", "en").await.unwrap_err();
    assert!(matches!(err, PlacesError::Deserialize { .. }), "got {err:?}");
}

#[tokio::test]
async fn text_search_server_error_is_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/textsearch/json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.text_search("Cafe", "en").await.unwrap_err();
    assert!(matches!(err, PlacesError::Http(_)), "got {err:?}");
}

#[tokio::test]
async fn place_details_requests_fixed_fields_and_parses_result() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OK",
        "result": {
            "formatted_address": "69 Grand St, Brooklyn, NY 11249, USA",
            "formatted_phone_number": "(718) 285-6180",
            "rating": 4.6,
            "price_level": 2,
            "website": "https://www.devocion.com/",
            "types": ["cafe", "food", "point_of_interest"],
            "address_components": [
                { "long_name": "69", "short_name": "69", "types": ["street_number"] },
                { "long_name": "Williamsburg", "short_name": "Williamsburg", "types": ["neighborhood", "political"] },
                { "long_name": "Brooklyn", "short_name": "Brooklyn", "types": ["sublocality", "political"] }
            ]
        }
    });

    Mock::given(method("GET"))
        .and(path("/details/json"))
        .and(query_param("place_id", "ChIJfirst"))
        .and(query_param(
            "fields",
            "formatted_address,formatted_phone_number,rating,price_level,website,types,address_components",
        ))
        .and(query_param("language", "en"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let detail = client
        .place_details("ChIJfirst", "en")
        .await
        .expect("should parse place detail");

    assert_eq!(
        detail.formatted_address.as_deref(),
        Some("69 Grand St, Brooklyn, NY 11249, USA")
    );
    assert_eq!(detail.price_level, Some(2));
    assert_eq!(detail.rating.map(|r| r.to_string()).as_deref(), Some("4.6"));
    assert_eq!(detail.types[0], "cafe");
    assert_eq!(detail.address_components.len(), 3);
    assert!(detail.address_components[1].has_type("neighborhood"));
}

#[tokio::test]
async fn place_details_missing_result_is_empty_detail() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/details/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "status": "OK" })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let detail = client.place_details("bare", "en").await.unwrap();
    assert!(detail.formatted_address.is_none());
    assert!(detail.price_level.is_none());
    assert!(detail.types.is_empty());
    assert!(detail.address_components.is_empty());
}

#[tokio::test]
async fn place_details_zero_results_is_empty_detail() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/details/json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "status": "ZERO_RESULTS" })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let detail = client
        .place_details("empty", "en")
        .await
        .expect("ZERO_RESULTS should not be an error");
    let place = placefill_places::normalize_place("empty", &detail);
    assert_eq!(place.address, "");
    assert_eq!(
        place.maps_link,
        "https://www.google.com/maps/place/?q=place_id:empty"
    );
}

#[tokio::test]
async fn place_details_tolerates_component_without_long_name() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/details/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "OK",
            "result": {
                "formatted_address": "12 Main St, Springfield",
                "address_components": [
                    { "short_name": "12", "types": ["street_number"] },
                    { "long_name": "Springfield", "types": ["locality", "political"] }
                ]
            }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let detail = client.place_details("partial", "en").await.unwrap();
    assert_eq!(detail.address_components.len(), 2);
    assert_eq!(detail.address_components[0].long_name, "");

    let place = placefill_places::normalize_place("partial", &detail);
    assert_eq!(place.address, "12 Main St, Springfield");
    assert_eq!(place.neighborhood, "Springfield");
}

#[tokio::test]
async fn place_details_not_found_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/details/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "status": "NOT_FOUND" })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.place_details("gone", "en").await.unwrap_err();
    assert!(
        matches!(err, PlacesError::ApiError { ref status, .. } if status == "NOT_FOUND"),
        "got {err:?}"
    );
}

#[tokio::test]
async fn place_details_malformed_rating_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/details/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "OK",
            "result": { "rating": "excellent" }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.place_details("odd", "en").await.unwrap_err();
    assert!(matches!(err, PlacesError::Deserialize { .. }), "got {err:?}");
}

#[tokio::test]
async fn non_json_body_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/details/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.place_details("html", "en").await.unwrap_err();
    assert!(matches!(err, PlacesError::Deserialize { .. }), "got {err:?}");
}
