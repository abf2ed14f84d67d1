use vitrine::api::{ApiError, CatalogClient, CatalogSource, Product};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Helper Functions
// ============================================================================

const PRODUCTS_BODY: &str = r#"[
    {
        "id": 1,
        "title": "Red Shoe",
        "price": 20.0,
        "category": "Shoes",
        "description": "A bright red shoe.",
        "image": "https://example.com/red-shoe.png",
        "rating": { "rate": 4.5, "count": 120 }
    },
    {
        "id": 2,
        "title": "Blue Hat",
        "price": 10.0,
        "category": "Hats",
        "description": "A blue hat.",
        "image": "https://example.com/blue-hat.png"
    }
]"#;

async fn mock_products(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(template)
        .mount(server)
        .await;
}

async fn mock_categories(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/products/categories"))
        .respond_with(template)
        .mount(server)
        .await;
}

// ============================================================================
// Product Fetch Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_products_success() {
    let mock_server = MockServer::start().await;
    mock_products(
        &mock_server,
        ResponseTemplate::new(200).set_body_string(PRODUCTS_BODY),
    )
    .await;

    let client = CatalogClient::new(mock_server.uri());
    let products: Vec<Product> = client.fetch_products().await.unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].title, "Red Shoe");
    assert_eq!(products[0].rating.as_ref().unwrap().count, 120);
    // The second entry has no rating field at all.
    assert_eq!(products[1].rating, None);
}

#[tokio::test]
async fn test_fetch_products_preserves_server_order() {
    let mock_server = MockServer::start().await;
    mock_products(
        &mock_server,
        ResponseTemplate::new(200).set_body_string(PRODUCTS_BODY),
    )
    .await;

    let client = CatalogClient::new(mock_server.uri());
    let products = client.fetch_products().await.unwrap();

    let ids: Vec<u64> = products.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn test_fetch_products_http_error() {
    let mock_server = MockServer::start().await;
    mock_products(
        &mock_server,
        ResponseTemplate::new(500).set_body_string("internal error"),
    )
    .await;

    let client = CatalogClient::new(mock_server.uri());
    let result = client.fetch_products().await;

    assert!(matches!(result, Err(ApiError::Api { status: 500, .. })));
}

#[tokio::test]
async fn test_fetch_products_malformed_body() {
    let mock_server = MockServer::start().await;
    mock_products(
        &mock_server,
        ResponseTemplate::new(200).set_body_string("{not valid json"),
    )
    .await;

    let client = CatalogClient::new(mock_server.uri());
    let result = client.fetch_products().await;

    assert!(matches!(result, Err(ApiError::Parse(_))));
}

#[tokio::test]
async fn test_fetch_products_connection_refused() {
    // Nothing is listening on this port.
    let client = CatalogClient::new("http://127.0.0.1:1".to_string());
    let result = client.fetch_products().await;

    assert!(matches!(result, Err(ApiError::Network(_))));
}

// ============================================================================
// Category Fetch Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_categories_success() {
    let mock_server = MockServer::start().await;
    mock_categories(
        &mock_server,
        ResponseTemplate::new(200).set_body_string(r#"["Shoes", "Hats"]"#),
    )
    .await;

    let client = CatalogClient::new(mock_server.uri());
    let categories = client.fetch_categories().await.unwrap();

    // Raw labels only — the "All" sentinel is prepended by the state layer.
    assert_eq!(categories, vec!["Shoes", "Hats"]);
}

#[tokio::test]
async fn test_fetch_categories_http_error() {
    let mock_server = MockServer::start().await;
    mock_categories(
        &mock_server,
        ResponseTemplate::new(503).set_body_string("unavailable"),
    )
    .await;

    let client = CatalogClient::new(mock_server.uri());
    let result = client.fetch_categories().await;

    assert!(matches!(result, Err(ApiError::Api { status: 503, .. })));
}

#[tokio::test]
async fn test_fetch_categories_malformed_body() {
    let mock_server = MockServer::start().await;
    mock_categories(
        &mock_server,
        ResponseTemplate::new(200).set_body_string(r#"[1, 2, 3]"#),
    )
    .await;

    let client = CatalogClient::new(mock_server.uri());
    let result = client.fetch_categories().await;

    assert!(matches!(result, Err(ApiError::Parse(_))));
}

// ============================================================================
// Independence of the two fetches
// ============================================================================

#[tokio::test]
async fn test_product_fetch_succeeds_while_categories_fail() {
    let mock_server = MockServer::start().await;
    mock_products(
        &mock_server,
        ResponseTemplate::new(200).set_body_string(PRODUCTS_BODY),
    )
    .await;
    mock_categories(&mock_server, ResponseTemplate::new(500)).await;

    let client = CatalogClient::new(mock_server.uri());

    // The two fetches are independent; completion order is not relied upon.
    let (products, categories) =
        tokio::join!(client.fetch_products(), client.fetch_categories());

    assert_eq!(products.unwrap().len(), 2);
    assert!(matches!(categories, Err(ApiError::Api { status: 500, .. })));
}
