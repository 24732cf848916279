// CatalogClient tests against a mock catalog service

use mockito::Matcher;
use pupfinder::models::{LocationSearchRequest, LoginRequest};
use pupfinder::{CatalogClient, CatalogError};
use serde_json::json;

fn dog_json(id: &str, name: &str, age: u8, zip: &str, breed: &str) -> serde_json::Value {
    json!({
        "id": id,
        "img": format!("https://img.example/{}.jpg", id),
        "name": name,
        "age": age,
        "zip_code": zip,
        "breed": breed,
    })
}

#[tokio::test]
async fn test_login_posts_credentials() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/auth/login")
        .match_body(Matcher::Json(json!({"name": "Ada", "email": "ada@example.com"})))
        .with_status(200)
        .create_async()
        .await;

    let client = CatalogClient::new(server.url(), 5);
    let request = LoginRequest {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
    };

    client.login(&request).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_login_failure_propagates() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/auth/login")
        .with_status(400)
        .create_async()
        .await;

    let client = CatalogClient::new(server.url(), 5);
    let request = LoginRequest {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
    };

    let err = client.login(&request).await.unwrap_err();
    assert!(matches!(err, CatalogError::ApiError(_)));
}

#[tokio::test]
async fn test_unauthorized_is_distinguished() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/dogs/breeds")
        .with_status(401)
        .create_async()
        .await;

    let client = CatalogClient::new(server.url(), 5);
    let err = client.get_breeds().await.unwrap_err();
    assert!(matches!(err, CatalogError::Unauthorized));
}

#[tokio::test]
async fn test_session_cookie_rides_on_later_calls() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/auth/login")
        .with_status(200)
        .with_header("set-cookie", "session=abc123; Path=/")
        .create_async()
        .await;
    let breeds_mock = server
        .mock("GET", "/dogs/breeds")
        .match_header("cookie", Matcher::Regex("session=abc123".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"["Beagle"]"#)
        .create_async()
        .await;

    let client = CatalogClient::new(server.url(), 5);
    let request = LoginRequest {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
    };
    client.login(&request).await.unwrap();

    let breeds = client.get_breeds().await.unwrap();
    assert_eq!(breeds, vec!["Beagle"]);
    breeds_mock.assert_async().await;
}

#[tokio::test]
async fn test_get_breeds_returns_ordered_list() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/dogs/breeds")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"["Akita","Beagle","Corgi"]"#)
        .create_async()
        .await;

    let client = CatalogClient::new(server.url(), 5);
    let breeds = client.get_breeds().await.unwrap();
    assert_eq!(breeds, vec!["Akita", "Beagle", "Corgi"]);
}

#[tokio::test]
async fn test_search_dogs_passes_query_verbatim() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/dogs/search")
        .match_query(Matcher::Exact(
            "breeds=Beagle&sort=age:desc&size=25&from=0".to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"resultIds":["d1"],"total":1,"next":"size=25&from=25"}"#)
        .create_async()
        .await;

    let client = CatalogClient::new(server.url(), 5);
    let result = client
        .search_dogs("breeds=Beagle&sort=age:desc&size=25&from=0")
        .await
        .unwrap();

    assert_eq!(result.result_ids, vec!["d1"]);
    assert_eq!(result.total, 1);
    assert_eq!(result.next.as_deref(), Some("size=25&from=25"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_dogs_posts_ids() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/dogs")
        .match_body(Matcher::Json(json!(["d1", "d2"])))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([
                dog_json("d2", "Maple", 5, "90210", "Corgi"),
                dog_json("d1", "Rex", 3, "10001", "Beagle"),
            ])
            .to_string(),
        )
        .create_async()
        .await;

    let client = CatalogClient::new(server.url(), 5);
    let ids = vec!["d1".to_string(), "d2".to_string()];
    let dogs = client.get_dogs(&ids).await.unwrap();

    // Response order is not guaranteed to match the request
    assert_eq!(dogs.len(), 2);
    assert_eq!(dogs[0].id, "d2");
    assert_eq!(dogs[1].breed, "Beagle");
}

#[tokio::test]
async fn test_get_dogs_empty_input_skips_network() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/dogs")
        .expect(0)
        .create_async()
        .await;

    let client = CatalogClient::new(server.url(), 5);
    let dogs = client.get_dogs(&[]).await.unwrap();

    assert!(dogs.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_locations_empty_input_skips_network() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/locations")
        .expect(0)
        .create_async()
        .await;

    let client = CatalogClient::new(server.url(), 5);
    let locations = client.get_locations(&[]).await.unwrap();

    assert!(locations.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_locations_posts_zip_codes() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/locations")
        .match_body(Matcher::Json(json!(["10001"])))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([{
                "zip_code": "10001",
                "latitude": 40.75,
                "longitude": -73.99,
                "city": "New York",
                "state": "NY",
                "county": "New York"
            }])
            .to_string(),
        )
        .create_async()
        .await;

    let client = CatalogClient::new(server.url(), 5);
    let zips = vec!["10001".to_string()];
    let locations = client.get_locations(&zips).await.unwrap();

    assert_eq!(locations.len(), 1);
    assert_eq!(locations[0].city, "New York");
}

#[tokio::test]
async fn test_search_locations_by_city() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/locations/search")
        .match_body(Matcher::Json(json!({"city": "Spring", "size": 10})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "results": [{
                    "zip_code": "65807",
                    "latitude": 37.16,
                    "longitude": -93.32,
                    "city": "Springfield",
                    "state": "MO",
                    "county": "Greene"
                }],
                "total": 1
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = CatalogClient::new(server.url(), 5);
    let response = client
        .search_locations(&LocationSearchRequest::by_city("Spring", 10))
        .await
        .unwrap();

    assert_eq!(response.total, 1);
    assert_eq!(response.results[0].zip_code, "65807");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_generate_match_returns_id() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/dogs/match")
        .match_body(Matcher::Json(json!(["d1", "d2"])))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"match":"d2"}"#)
        .create_async()
        .await;

    let client = CatalogClient::new(server.url(), 5);
    let favorites = vec!["d1".to_string(), "d2".to_string()];
    let matched = client.generate_match(&favorites).await.unwrap();

    assert_eq!(matched.match_id, "d2");
}
