mod common;

use common::{spawn_app, TestApp};
use reqwest::StatusCode;
use serde_json::{json, Value};
use uuid::Uuid;

async fn post_item(app: &TestApp, token: &str, payload: &Value) -> reqwest::Response {
    app.client
        .post(app.url("/api/menu"))
        .headers(TestApp::auth_headers(token))
        .json(payload)
        .send()
        .await
        .expect("Failed to send create item request")
}

#[tokio::test]
async fn test_create_menu_item() {
    let app = spawn_app().await;
    let token = app.admin_token().await;
    let grill = app.create_category(&token, "Grill").await;

    let response = post_item(
        &app,
        &token,
        &json!({
            "name": "  Grilled Chicken ",
            "description": " Tender grilled chicken breast with herbs ",
            "price": "15.99",
            "category": grill["id"],
            "imageUrl": " https://cdn.example.com/chicken.jpg "
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response.json::<Value>().await.expect("Failed to parse JSON");
    assert_eq!(body["name"], "Grilled Chicken");
    assert_eq!(body["description"], "Tender grilled chicken breast with herbs");
    assert_eq!(body["price"], 15.99);
    assert_eq!(body["imageUrl"], "https://cdn.example.com/chicken.jpg");
    assert_eq!(body["category"]["id"], grill["id"]);
    assert_eq!(body["category"]["name"], "Grill");
    assert!(body["createdAt"].is_string());
    assert!(body["updatedAt"].is_string());
}

#[tokio::test]
async fn test_create_menu_item_with_embedded_category() {
    let app = spawn_app().await;
    let token = app.admin_token().await;
    let drinks = app.create_category(&token, "Drinks").await;

    let response = post_item(
        &app,
        &token,
        &json!({
            "name": "Coffee",
            "description": "Hot brewed coffee",
            "price": 2.49,
            "category": drinks
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response.json::<Value>().await.expect("Failed to parse JSON");
    assert_eq!(body["category"]["name"], "Drinks");
    assert!(body["imageUrl"].is_null());
}

#[tokio::test]
async fn test_negative_price_is_rejected() {
    let app = spawn_app().await;
    let token = app.admin_token().await;
    let grill = app.create_category(&token, "Grill").await;

    let response = post_item(
        &app,
        &token,
        &json!({
            "name": "Tea",
            "description": "Hot tea",
            "price": "-1",
            "category": grill["id"]
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Price must be a positive number");

    assert_eq!(app.get_json("/api/menu").await, Value::Array(vec![]));
}

#[tokio::test]
async fn test_create_menu_item_validation() {
    let app = spawn_app().await;
    let token = app.admin_token().await;
    let grill = app.create_category(&token, "Grill").await;

    let cases = [
        (
            json!({ "name": "Tea", "price": 2, "category": grill["id"] }),
            "All fields are required",
        ),
        (
            json!({ "name": "Tea", "description": "Hot", "price": "", "category": grill["id"] }),
            "All fields are required",
        ),
        (
            json!({ "name": "Tea", "description": "Hot", "price": "cheap", "category": grill["id"] }),
            "Price must be a positive number",
        ),
        (
            json!({ "name": "Tea", "description": "Hot", "price": 2, "category": Uuid::new_v4().to_string() }),
            "Invalid category",
        ),
        (
            json!({ "name": "Tea", "description": "Hot", "price": 2, "category": "Grill" }),
            "Invalid category",
        ),
        (
            json!({ "name": "Tea", "description": "Hot", "price": 2, "category": grill["id"], "imageUrl": "ftp://x" }),
            "Invalid image URL",
        ),
    ];

    for (payload, expected) in cases {
        let response = post_item(&app, &token, &payload).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "payload {payload}");
        let body = response.json::<Value>().await.expect("Failed to parse JSON");
        assert_eq!(body["error"], expected, "payload {payload}");
    }

    assert_eq!(app.get_json("/api/menu").await, Value::Array(vec![]));
}

#[tokio::test]
async fn test_menu_is_sorted_by_category_then_name() {
    let app = spawn_app().await;
    let token = app.admin_token().await;
    let salads = app.create_category(&token, "Salads").await;
    let drinks = app.create_category(&token, "Drinks").await;
    let salads_id = salads["id"].as_str().unwrap();
    let drinks_id = drinks["id"].as_str().unwrap();

    app.create_item(&token, "Greek Salad", 9.99, salads_id).await;
    app.create_item(&token, "Orange Juice", 3.99, drinks_id).await;
    app.create_item(&token, "Caesar Salad", 8.99, salads_id).await;
    app.create_item(&token, "Coffee", 2.49, drinks_id).await;

    let menu = app.get_json("/api/menu").await;
    let order: Vec<(&str, &str)> = menu
        .as_array()
        .unwrap()
        .iter()
        .map(|item| {
            (
                item["category"]["name"].as_str().unwrap(),
                item["name"].as_str().unwrap(),
            )
        })
        .collect();

    assert_eq!(
        order,
        vec![
            ("Drinks", "Coffee"),
            ("Drinks", "Orange Juice"),
            ("Salads", "Caesar Salad"),
            ("Salads", "Greek Salad"),
        ]
    );

    let only_drinks = app.get_json(&format!("/api/menu?category={drinks_id}")).await;
    let names: Vec<&str> = only_drinks
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Coffee", "Orange Juice"]);
}

#[tokio::test]
async fn test_update_menu_item() {
    let app = spawn_app().await;
    let token = app.admin_token().await;
    let grill = app.create_category(&token, "Grill").await;
    let salads = app.create_category(&token, "Salads").await;

    let response = post_item(
        &app,
        &token,
        &json!({
            "name": "Steak",
            "description": "Ribeye",
            "price": 20,
            "category": grill["id"],
            "imageUrl": "/images/steak.jpg"
        }),
    )
    .await;
    let created = response.json::<Value>().await.expect("Failed to parse JSON");
    let path = format!("/api/menu/{}", created["id"].as_str().unwrap());

    // image is kept when the field is left out
    let response = app
        .client
        .put(app.url(&path))
        .headers(TestApp::auth_headers(&token))
        .json(&json!({
            "name": "Steak Salad",
            "description": "Sliced ribeye on greens",
            "price": "22.5",
            "category": salads
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    let updated = response.json::<Value>().await.expect("Failed to parse JSON");
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["name"], "Steak Salad");
    assert_eq!(updated["price"], 22.5);
    assert_eq!(updated["category"]["name"], "Salads");
    assert_eq!(updated["imageUrl"], "/images/steak.jpg");
    assert_eq!(updated["createdAt"], created["createdAt"]);

    // and removed on an explicit null
    let response = app
        .client
        .put(app.url(&path))
        .headers(TestApp::auth_headers(&token))
        .json(&json!({
            "name": "Steak Salad",
            "description": "Sliced ribeye on greens",
            "price": 22.5,
            "category": salads["id"],
            "imageUrl": null
        }))
        .send()
        .await
        .expect("Failed to send request");
    let updated = response.json::<Value>().await.expect("Failed to parse JSON");
    assert!(updated["imageUrl"].is_null());
}

#[tokio::test]
async fn test_update_menu_item_errors() {
    let app = spawn_app().await;
    let token = app.admin_token().await;
    let grill = app.create_category(&token, "Grill").await;
    let item = app
        .create_item(&token, "Steak", 20.0, grill["id"].as_str().unwrap())
        .await;

    let valid = json!({
        "name": "Steak",
        "description": "Ribeye",
        "price": 20,
        "category": grill["id"]
    });

    let response = app
        .client
        .put(app.url(&format!("/api/menu/{}", Uuid::new_v4())))
        .headers(TestApp::auth_headers(&token))
        .json(&valid)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response.json::<Value>().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Menu item not found");

    let response = app
        .client
        .put(app.url(&format!("/api/menu/{}", item["id"].as_str().unwrap())))
        .headers(TestApp::auth_headers(&token))
        .json(&json!({
            "name": "Steak",
            "description": "Ribeye",
            "price": 0,
            "category": grill["id"]
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let menu = app.get_json("/api/menu").await;
    assert_eq!(menu[0]["price"], 20.0);
}

#[tokio::test]
async fn test_delete_menu_item() {
    let app = spawn_app().await;
    let token = app.admin_token().await;
    let grill = app.create_category(&token, "Grill").await;
    let item = app
        .create_item(&token, "Steak", 20.0, grill["id"].as_str().unwrap())
        .await;
    let path = format!("/api/menu/{}", item["id"].as_str().unwrap());

    let response = app
        .client
        .delete(app.url(&path))
        .headers(TestApp::auth_headers(&token))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(app.get_json("/api/menu").await, Value::Array(vec![]));

    for path in [path, format!("/api/menu/{}", Uuid::new_v4()), "/api/menu/42".to_string()] {
        let response = app
            .client
            .delete(app.url(&path))
            .headers(TestApp::auth_headers(&token))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "DELETE {path}");
    }
}
