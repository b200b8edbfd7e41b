use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use backend::routes::configure_routes;
use backend::shared::data::db;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, value)
}

fn shop_body(name: &str, hours: &[(u8, &str, &str)]) -> Value {
    let hours: Vec<Value> = hours
        .iter()
        .map(|(day, open, close)| json!({ "day": day, "openAt": open, "closeAt": close }))
        .collect();
    json!({ "name": name, "inVacations": false, "openingHours": hours })
}

// One database per test binary: the connection lives in a process-wide cell
#[tokio::test]
async fn shop_console_api_flow() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("shops.db");
    db::initialize_database(Some(db_path.to_str().unwrap()))
        .await
        .unwrap();
    let app = configure_routes();

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("ok"));

    // Overlapping hours on the same day are refused and nothing is stored
    let conflicting = shop_body(
        "Chez Paul",
        &[(1, "09:00:00", "12:00:00"), (1, "11:00:00", "13:00:00")],
    );
    let (status, body) = send(&app, "POST", "/api/shops", Some(conflicting)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Les horaires se chevauchent pour le même jour");

    let (_, page) = send(&app, "GET", "/api/shops", None).await;
    assert_eq!(page["totalElements"], 0);

    let (status, body) = send(&app, "POST", "/api/shops", Some(shop_body("", &[]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "name: Ce champ est requis");

    // Touching intervals are fine
    let valid = shop_body(
        "Chez Paul",
        &[(1, "09:00:00", "12:00:00"), (1, "12:00:00", "15:00:00"), (2, "10:00:00", "11:00:00")],
    );
    let (status, body) = send(&app, "POST", "/api/shops", Some(valid)).await;
    assert_eq!(status, StatusCode::OK);
    let shop_id = body["id"].as_str().unwrap().to_string();

    let (status, body) = send(&app, "POST", "/api/categories", Some(json!({ "name": "Boulangerie" }))).await;
    assert_eq!(status, StatusCode::OK);
    let category_id = body["id"].as_str().unwrap().to_string();

    let product = json!({
        "price": 2.5,
        "localizedProducts": [
            { "locale": "FR", "name": "Baguette", "description": "" },
            { "locale": "EN", "name": "", "description": "" }
        ],
        "shop": { "id": shop_id, "name": "Chez Paul" },
        "categories": [{ "id": category_id, "name": "Boulangerie" }]
    });
    let (status, body) = send(&app, "POST", "/api/products", Some(product)).await;
    assert_eq!(status, StatusCode::OK);
    let product_id = body["id"].as_str().unwrap().to_string();

    let negative = json!({
        "price": -1.0,
        "localizedProducts": [{ "locale": "FR", "name": "Croissant", "description": "" }]
    });
    let (status, body) = send(&app, "POST", "/api/products", Some(negative)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "price: Le prix ne peut pas être un nombre négatif");

    // Listing, searching and product counts
    let (status, page) = send(&app, "GET", "/api/shops?sort=nbProducts", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["totalElements"], 1);
    assert_eq!(page["pageable"]["pageNumber"], 0);
    assert_eq!(page["content"][0]["nbProducts"], 1);

    let (_, page) = send(&app, "GET", "/api/shops?search=PAUL", None).await;
    assert_eq!(page["totalElements"], 1);
    let (_, page) = send(&app, "GET", "/api/shops?search=zzz", None).await;
    assert_eq!(page["totalElements"], 0);
    let (_, page) = send(&app, "GET", "/api/shops?inVacations=true", None).await;
    assert_eq!(page["totalElements"], 0);

    let uri = format!("/api/products?shopId={}", shop_id);
    let (_, page) = send(&app, "GET", &uri, None).await;
    assert_eq!(page["totalElements"], 1);
    assert_eq!(page["content"][0]["shop"]["name"], "Chez Paul");
    assert_eq!(page["content"][0]["categories"][0]["name"], "Boulangerie");
    assert_eq!(page["content"][0]["localizedProducts"].as_array().unwrap().len(), 1);

    // Updates go through the same checks
    let uri = format!("/api/shops/{}", shop_id);
    let conflicting = shop_body(
        "Chez Paul",
        &[(3, "08:00:00", "20:00:00"), (3, "12:00:00", "13:00:00")],
    );
    let (status, _) = send(&app, "PUT", &uri, Some(conflicting)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut renamed = shop_body("Chez Paulette", &[(7, "10:00:00", "13:00:00")]);
    renamed["inVacations"] = json!(true);
    let (status, _) = send(&app, "PUT", &uri, Some(renamed)).await;
    assert_eq!(status, StatusCode::OK);
    let (_, shop) = send(&app, "GET", &uri, None).await;
    assert_eq!(shop["name"], "Chez Paulette");
    assert_eq!(shop["inVacations"], true);
    assert_eq!(shop["openingHours"][0]["day"], 7);

    // Bad and unknown ids
    let (status, _) = send(&app, "GET", "/api/shops/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let unknown = format!("/api/shops/{}", uuid::Uuid::new_v4());
    let (status, body) = send(&app, "GET", &unknown, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());

    // Deleting a category removes it from products, deleting a shop detaches them
    let uri = format!("/api/categories/{}", category_id);
    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);

    let uri = format!("/api/shops/{}", shop_id);
    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let uri = format!("/api/products/{}", product_id);
    let (status, product) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(product["shop"], Value::Null);
    assert_eq!(product["categories"], json!([]));

    let (_, page) = send(&app, "GET", "/api/categories", None).await;
    assert_eq!(page["totalElements"], 0);
    assert_eq!(page["pageable"]["pageSize"], 9);
}
