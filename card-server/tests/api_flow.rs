//! End-to-end API flow against the in-memory store
//!
//! Drives the assembled router directly with `oneshot` requests: card
//! creation with welcome bonus, reward redemption, operator credit/debit,
//! and the identity/operator failure paths.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use card_server::core::{Config, ServerState};
use card_server::store::MemoryStore;
use shared::models::{BusinessProfile, LevelTable, LevelTier, Reward, RewardCatalog, Theme};

const ADMIN_TOKEN: &str = "test-operator-token";

fn test_profile() -> Arc<BusinessProfile> {
    let tier = |threshold: i64, name: &str| LevelTier {
        threshold,
        name: name.to_string(),
        reward: String::new(),
    };
    Arc::new(BusinessProfile {
        business_id: "coffee-star-v1".to_string(),
        display_name: "Coffee Star".to_string(),
        currency_name: "Stars".to_string(),
        welcome_bonus: 50,
        welcome_title: "Welcome Gift".to_string(),
        levels: LevelTable::new(vec![tier(5, "Bronze"), tier(10, "Silver"), tier(20, "Gold")])
            .unwrap(),
        rewards: RewardCatalog::new(vec![
            Reward {
                id: "extra-shot".to_string(),
                name: "Extra Shot".to_string(),
                cost: 25,
                description: "Booster".to_string(),
            },
            Reward {
                id: "free-drink".to_string(),
                name: "Free Drink".to_string(),
                cost: 100,
                description: "Any size".to_string(),
            },
        ]),
        theme: Theme::default(),
    })
}

fn test_app() -> Router {
    let config = Config::with_overrides(0, Some(ADMIN_TOKEN.to_string()));
    let profile = test_profile();
    let store = Arc::new(MemoryStore::new(profile.clone()));
    let state = ServerState::with_store(config, profile, store);
    card_server::api::router(state)
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    headers: &[(&str, &str)],
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn health_is_public() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/health", &[], None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["business_id"], "coffee-star-v1");
    assert_eq!(body["operator_enabled"], true);
}

#[tokio::test]
async fn anonymous_card_request_is_unauthorized() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/api/card", &[], None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "E3001");
}

#[tokio::test]
async fn first_card_view_creates_member_with_welcome_bonus() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/card",
        &[("x-member-id", "uid-1"), ("x-member-name", "Ana")],
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], "E0000");

    let card = &body["data"];
    assert_eq!(card["points"], 50);
    assert_eq!(card["display_name"], "Ana");
    assert_eq!(card["card_payload"], "coffee-star-v1/uid-1");
    assert_eq!(card["currency_name"], "Stars");
    // 50 points clears every threshold in the test table
    assert_eq!(card["level"]["current"]["name"], "Gold");
    assert_eq!(card["level"]["progress"], 1.0);
    // 50 affords the 25-cost reward but not the 100-cost one
    assert_eq!(card["rewards"][0]["affordable"], true);
    assert_eq!(card["rewards"][1]["affordable"], false);
}

#[tokio::test]
async fn redeem_debits_and_reports_insufficient_balance() {
    let app = test_app();
    let member = [("x-member-id", "uid-2")];

    // 50 welcome points: the 25-cost reward works
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/card/redeem",
        &member,
        Some(serde_json::json!({"reward_id": "extra-shot"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["points"], 25);

    // 25 left: the 100-cost reward does not, and the balance is unchanged
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/card/redeem",
        &member,
        Some(serde_json::json!({"reward_id": "free-drink"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "E1002");

    let (_, body) = send(&app, Method::GET, "/api/card", &member, None).await;
    assert_eq!(body["data"]["points"], 25);

    // Unknown reward id
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/card/redeem",
        &member,
        Some(serde_json::json!({"reward_id": "unicorn"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "E1003");
}

#[tokio::test]
async fn history_is_newest_first() {
    let app = test_app();
    let member = [("x-member-id", "uid-3")];
    let operator = [("x-operator-token", ADMIN_TOKEN)];

    send(&app, Method::GET, "/api/card", &member, None).await;
    // Keep the two transactions in distinct milliseconds so the ordering
    // assertion exercises the timestamp sort, not the id tie-break
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    send(
        &app,
        Method::POST,
        "/api/members/uid-3/credit",
        &operator,
        Some(serde_json::json!({"amount": 10, "title": "Latte"})),
    )
    .await;

    let (status, body) = send(&app, Method::GET, "/api/card/history", &member, None).await;

    assert_eq!(status, StatusCode::OK);
    let history = body["data"].as_array().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["title"], "Latte");
    assert_eq!(history[1]["title"], "Welcome Gift");
}

#[tokio::test]
async fn operator_routes_require_the_token() {
    let app = test_app();
    send(&app, Method::GET, "/api/card", &[("x-member-id", "uid-4")], None).await;

    // No token
    let (status, body) = send(&app, Method::GET, "/api/members/uid-4", &[], None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "E2001");

    // Wrong token
    let (status, _) = send(
        &app,
        Method::GET,
        "/api/members/uid-4",
        &[("x-operator-token", "wrong")],
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Right token
    let (status, body) = send(
        &app,
        Method::GET,
        "/api/members/uid-4",
        &[("x-operator-token", ADMIN_TOKEN)],
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["member_id"], "uid-4");
}

#[tokio::test]
async fn operator_credit_debit_round_trip() {
    let app = test_app();
    let member = [("x-member-id", "uid-5")];
    let operator = [("x-operator-token", ADMIN_TOKEN)];

    // Create via first card view, then look the member up by card number
    let (_, body) = send(&app, Method::GET, "/api/card", &member, None).await;
    let card_number = body["data"]["card_number"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/api/members/{}", card_number),
        &operator,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["member_id"], "uid-5");

    // +20 then -20 returns to the welcome balance
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/members/uid-5/credit",
        &operator,
        Some(serde_json::json!({"amount": 20})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["points"], 70);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/members/uid-5/debit",
        &operator,
        Some(serde_json::json!({"amount": 20})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["points"], 50);

    // Over-debit fails without touching the balance
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/members/uid-5/debit",
        &operator,
        Some(serde_json::json!({"amount": 500})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "E1002");

    // Non-positive amounts are invalid on both routes
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/members/uid-5/credit",
        &operator,
        Some(serde_json::json!({"amount": -5})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "E1001");

    let (_, body) = send(
        &app,
        Method::GET,
        "/api/members/uid-5",
        &operator,
        None,
    )
    .await;
    assert_eq!(body["data"]["points"], 50);
}

#[tokio::test]
async fn unknown_member_is_not_found_for_operators() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/members/ghost",
        &[("x-operator-token", ADMIN_TOKEN)],
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "E1003");
}
