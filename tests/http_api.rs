mod common;

use axum::{
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use rental_inventory::build_app;

async fn call(
    app: &axum::Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> anyhow::Result<(StatusCode, Value)> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    let request = match body {
        Some(body) => builder.body(Body::from(body.to_string()))?,
        None => builder.body(Body::empty())?,
    };

    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    let json = serde_json::from_slice(&bytes)?;
    Ok((status, json))
}

#[tokio::test]
async fn rental_round_trip_over_http() -> anyhow::Result<()> {
    let (state, _) = common::setup_state().await?;
    let app = build_app(state);

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/materials",
        Some(json!({ "name": "Tent", "available_quantity": 10, "rental_price": "5.00" })),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    let material_id = body["data"]["id"].as_str().expect("material id").to_string();

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/orders",
        Some(json!({ "customer_name": "Alice" })),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["severity"], "success");
    let order_id = body["data"]["id"].as_str().expect("order id").to_string();

    let (status, body) = call(
        &app,
        Method::POST,
        &format!("/api/orders/{order_id}/items"),
        Some(json!({ "material_id": material_id, "quantity": 3 })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "3x Tent added to the order");
    assert_eq!(body["data"]["material"]["available_quantity"], 7);
    assert_eq!(body["data"]["order"]["total_price"], "15.00");
    let item_id = body["data"]["item"]["id"].as_str().expect("item id").to_string();

    let (status, body) = call(
        &app,
        Method::POST,
        &format!("/api/orders/{order_id}/items"),
        Some(json!({ "material_id": material_id, "quantity": 8 })),
    )
    .await?;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["severity"], "error");
    assert_eq!(body["data"]["available"], 7);

    let (status, body) = call(&app, Method::GET, &format!("/api/orders/{order_id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["items"].as_array().map(Vec::len), Some(1));

    let (status, body) =
        call(&app, Method::DELETE, &format!("/api/order-items/{item_id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["order"]["id"], order_id.as_str());
    assert_eq!(body["data"]["order"]["total_price"], "0.00");
    assert_eq!(body["data"]["material"]["available_quantity"], 10);

    let (status, body) =
        call(&app, Method::POST, &format!("/api/orders/{order_id}/return"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Order returned");

    let (status, _) = call(&app, Method::GET, &format!("/api/orders/{order_id}"), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn blank_customer_name_is_a_bad_request() -> anyhow::Result<()> {
    let (state, _) = common::setup_state().await?;
    let app = build_app(state);

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/orders",
        Some(json!({ "customer_name": "  " })),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Customer name is required");

    let (status, body) = call(&app, Method::GET, "/api/orders", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["total"], 0);

    Ok(())
}

#[tokio::test]
async fn unknown_routes_fall_back_to_json_not_found() -> anyhow::Result<()> {
    let (state, _) = common::setup_state().await?;
    let app = build_app(state);

    let (status, body) = call(&app, Method::GET, "/nope", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["data"]["path"], "/nope");

    Ok(())
}
